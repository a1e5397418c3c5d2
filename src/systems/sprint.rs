//! Sprint start/stop transitions and speed propagation.
//!
//! All speed changes funnel through [`set_move_speed`] so the movement
//! system sees the new value synchronously, in the same call.

use hecs::{Entity, World};
use log::debug;

use crate::components::{CharacterAttributes, MoveSpeed, SprintState, Stamina};
use crate::events::{EventQueue, GameEvent, SprintEndReason};
use crate::systems::stamina;
use crate::time_system::{GameClock, TimerScheduler};

/// Handle sprint input being pressed.
///
/// No-op if the character is already sprinting or has zero stamina.
/// Otherwise raises speed to base + additive, stops the regen loop and
/// starts the drain loop.
pub fn start_sprint(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    events: &mut EventQueue,
    entity: Entity,
) {
    let sprint_speed = {
        let Ok(stamina) = world.get::<&Stamina>(entity) else {
            return;
        };
        let Ok(state) = world.get::<&SprintState>(entity) else {
            return;
        };
        let Ok(attrs) = world.get::<&CharacterAttributes>(entity) else {
            return;
        };
        if state.sprinting || stamina.is_empty() {
            debug!(
                "sprint request ignored for {:?} (sprinting={}, stamina={:.1})",
                entity, state.sprinting, stamina.current
            );
            return;
        }
        attrs.sprint_speed()
    };

    if let Ok(mut state) = world.get::<&mut SprintState>(entity) {
        state.sprinting = true;
    }
    set_move_speed(world, events, entity, sprint_speed);
    stamina::stop_regen(world, scheduler, entity);
    stamina::start_drain(world, clock, scheduler, entity);
    events.push(GameEvent::SprintStarted { entity });
}

/// Handle sprint input being released.
///
/// Resets speed to base, stops the drain loop and starts the regen loop.
/// No-op if the character was not sprinting.
pub fn stop_sprint(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    events: &mut EventQueue,
    entity: Entity,
) {
    let base_speed = {
        let Ok(state) = world.get::<&SprintState>(entity) else {
            return;
        };
        let Ok(attrs) = world.get::<&CharacterAttributes>(entity) else {
            return;
        };
        if !state.sprinting {
            return;
        }
        attrs.base_speed
    };

    if let Ok(mut state) = world.get::<&mut SprintState>(entity) {
        state.sprinting = false;
    }
    set_move_speed(world, events, entity, base_speed);
    stamina::stop_drain(world, scheduler, entity);
    stamina::start_regen(world, clock, scheduler, entity);
    events.push(GameEvent::SprintEnded {
        entity,
        reason: SprintEndReason::Released,
    });
}

/// Write the new movement speed and push it to the movement system.
/// Emits `SpeedChanged` only when the value actually changes.
pub(crate) fn set_move_speed(
    world: &mut World,
    events: &mut EventQueue,
    entity: Entity,
    speed: f32,
) {
    let changed = match world.get::<&mut MoveSpeed>(entity) {
        Ok(mut move_speed) if move_speed.current != speed => {
            move_speed.current = speed;
            true
        }
        _ => false,
    };
    if changed {
        events.push(GameEvent::SpeedChanged { entity, speed });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CharacterAttributes;
    use crate::spawning;
    use crate::time_system::GameClock;

    fn setup() -> (World, GameClock, TimerScheduler, EventQueue, Entity) {
        let mut world = World::new();
        let player = spawning::spawn_character(&mut world, CharacterAttributes::default());
        (world, GameClock::new(), TimerScheduler::new(), EventQueue::new(), player)
    }

    fn speed(world: &World, entity: Entity) -> f32 {
        world.get::<&MoveSpeed>(entity).unwrap().current
    }

    #[test]
    fn test_sprint_start_raises_speed_and_swaps_timers() {
        let (mut world, clock, mut scheduler, mut events, player) = setup();

        start_sprint(&mut world, &clock, &mut scheduler, &mut events, player);

        let state = *world.get::<&SprintState>(player).unwrap();
        assert!(state.sprinting);
        assert!(state.drain_timer.map(|id| scheduler.is_active(id)).unwrap_or(false));
        assert!(state.regen_timer.is_none());
        assert_eq!(speed(&world, player), 850.0);
    }

    #[test]
    fn test_sprint_with_zero_stamina_is_ignored() {
        let (mut world, clock, mut scheduler, mut events, player) = setup();
        world.get::<&mut Stamina>(player).unwrap().current = 0.0;

        start_sprint(&mut world, &clock, &mut scheduler, &mut events, player);

        let state = *world.get::<&SprintState>(player).unwrap();
        assert!(!state.sprinting);
        assert!(state.drain_timer.is_none());
        assert_eq!(speed(&world, player), 500.0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_immediate_release_round_trip() {
        let (mut world, clock, mut scheduler, mut events, player) = setup();

        start_sprint(&mut world, &clock, &mut scheduler, &mut events, player);
        stop_sprint(&mut world, &clock, &mut scheduler, &mut events, player);

        // Zero elapsed time: stamina untouched, speed back to base, and the
        // active timer has swapped from drain to regen.
        let stamina = *world.get::<&Stamina>(player).unwrap();
        assert_eq!(stamina.current, 100.0);
        assert_eq!(speed(&world, player), 500.0);

        let state = *world.get::<&SprintState>(player).unwrap();
        assert!(!state.sprinting);
        assert!(state.drain_timer.map(|id| scheduler.is_active(id)) != Some(true));
        assert!(state.regen_timer.map(|id| scheduler.is_active(id)).unwrap_or(false));
    }

    #[test]
    fn test_speed_only_ever_base_or_sprint() {
        let (mut world, clock, mut scheduler, mut events, player) = setup();

        for _ in 0..3 {
            start_sprint(&mut world, &clock, &mut scheduler, &mut events, player);
            assert_eq!(speed(&world, player), 850.0);
            stop_sprint(&mut world, &clock, &mut scheduler, &mut events, player);
            assert_eq!(speed(&world, player), 500.0);
        }
    }

    #[test]
    fn test_speed_changed_event_only_on_change() {
        let (mut world, _clock, _scheduler, mut events, player) = setup();

        set_move_speed(&mut world, &mut events, player, 500.0);
        assert!(events.is_empty());

        set_move_speed(&mut world, &mut events, player, 850.0);
        let pushed: Vec<_> = events.drain().collect();
        assert!(matches!(
            pushed.as_slice(),
            [GameEvent::SpeedChanged { speed, .. }] if *speed == 850.0
        ));
    }
}
