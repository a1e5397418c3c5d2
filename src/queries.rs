//! Common entity query helpers.
//!
//! Pure read-only queries shared by the demo shell and tests.

use hecs::{Entity, World};

use crate::components::{Health, MoveSpeed, SprintState, Stamina, Wallet};
use crate::systems::interaction;
use crate::time_system::TimerScheduler;

/// Current and maximum stamina
pub fn stamina_of(world: &World, entity: Entity) -> Option<(f32, f32)> {
    world
        .get::<&Stamina>(entity)
        .ok()
        .map(|s| (s.current, s.max))
}

/// Current movement speed
pub fn speed_of(world: &World, entity: Entity) -> Option<f32> {
    world.get::<&MoveSpeed>(entity).ok().map(|s| s.current)
}

/// Current and maximum health
pub fn health_of(world: &World, entity: Entity) -> Option<(i32, i32)> {
    world
        .get::<&Health>(entity)
        .ok()
        .map(|h| (h.current, h.max))
}

/// Money and collectable counts
pub fn wallet_of(world: &World, entity: Entity) -> Option<(i32, u32)> {
    world
        .get::<&Wallet>(entity)
        .ok()
        .map(|w| (w.money, w.collectables))
}

pub fn is_sprinting(world: &World, entity: Entity) -> bool {
    world
        .get::<&SprintState>(entity)
        .map(|s| s.sprinting)
        .unwrap_or(false)
}

/// Whether the drain and regen loops are live, in that order
pub fn stamina_timers_active(
    world: &World,
    scheduler: &TimerScheduler,
    entity: Entity,
) -> (bool, bool) {
    let Ok(state) = world.get::<&SprintState>(entity) else {
        return (false, false);
    };
    (
        state
            .drain_timer
            .map(|id| scheduler.is_active(id))
            .unwrap_or(false),
        state
            .regen_timer
            .map(|id| scheduler.is_active(id))
            .unwrap_or(false),
    )
}

/// Interact prompt for the currently focused object, if any
pub fn focused_prompt(world: &World, entity: Entity) -> Option<String> {
    interaction::focused_prompt(world, entity)
}
