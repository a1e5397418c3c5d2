//! Stamina-gated jumping.

use hecs::{Entity, World};
use log::debug;

use crate::components::{CharacterAttributes, MovementState, SprintState, Stamina};
use crate::constants::JUMP_IMPULSE;
use crate::events::{EventQueue, GameEvent};
use crate::systems::stamina;
use crate::time_system::{GameClock, TimerScheduler};

/// Attempt a jump.
///
/// Succeeds only when the character is grounded and has at least
/// `min_stamina_to_jump` stamina; the cost is that same minimum. A
/// successful jump stops the regen loop and restarts it only when the
/// character is not sprinting, so the drain loop stays the sole active
/// timer mid-sprint. Failed requests change nothing.
pub fn try_jump(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    events: &mut EventQueue,
    entity: Entity,
) {
    let cost = {
        let Ok(movement) = world.get::<&MovementState>(entity) else {
            return;
        };
        let Ok(stamina) = world.get::<&Stamina>(entity) else {
            return;
        };
        let Ok(attrs) = world.get::<&CharacterAttributes>(entity) else {
            return;
        };
        if !movement.can_jump() || stamina.current < attrs.min_stamina_to_jump {
            debug!(
                "jump request denied for {:?} (grounded={}, stamina={:.1})",
                entity, movement.grounded, stamina.current
            );
            return;
        }
        attrs.min_stamina_to_jump
    };

    let remaining = {
        let Ok(mut movement) = world.get::<&mut MovementState>(entity) else {
            return;
        };
        movement.grounded = false;
        movement.vertical_velocity = JUMP_IMPULSE;

        let Ok(mut stamina) = world.get::<&mut Stamina>(entity) else {
            return;
        };
        stamina.current = (stamina.current - cost).max(0.0);
        stamina.current
    };

    stamina::stop_regen(world, scheduler, entity);
    let sprinting = world
        .get::<&SprintState>(entity)
        .map(|s| s.sprinting)
        .unwrap_or(false);
    if !sprinting {
        stamina::start_regen(world, clock, scheduler, entity);
    }

    events.push(GameEvent::Jumped {
        entity,
        remaining_stamina: remaining,
    });
}
