//! Stamina drain/regen timer management and tick handlers.
//!
//! The two repeating timers are mutually exclusive: every transition that
//! starts one first stops the other, and starting an already-active timer
//! is a guarded no-op. Drain and regen steps are the per-second rates
//! scaled by [`STAMINA_TICK_INTERVAL`].

use hecs::{Entity, World};
use log::{debug, trace};

use crate::components::{CharacterAttributes, SprintState, Stamina, Velocity};
use crate::constants::{NEAR_ZERO_SPEED, STAMINA_TICK_INTERVAL};
use crate::events::{EventQueue, GameEvent, SprintEndReason};
use crate::systems::sprint;
use crate::time_system::{GameClock, TimerKind, TimerScheduler};

/// Start the drain loop. No-op if it is already running.
pub fn start_drain(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    entity: Entity,
) {
    let Ok(mut state) = world.get::<&mut SprintState>(entity) else {
        return;
    };
    if let Some(id) = state.drain_timer {
        if scheduler.is_active(id) {
            return;
        }
    }
    state.drain_timer = Some(scheduler.start(
        entity,
        TimerKind::StaminaDrain,
        STAMINA_TICK_INTERVAL,
        true,
        clock,
    ));
    trace!("drain loop started for {:?}", entity);
}

/// Stop the drain loop. Safe to call when it is not running.
pub fn stop_drain(world: &mut World, scheduler: &mut TimerScheduler, entity: Entity) {
    let Ok(mut state) = world.get::<&mut SprintState>(entity) else {
        return;
    };
    if let Some(id) = state.drain_timer.take() {
        scheduler.stop(id);
    }
}

/// Start the regen loop. No-op while sprinting or if it is already running.
pub fn start_regen(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    entity: Entity,
) {
    let Ok(mut state) = world.get::<&mut SprintState>(entity) else {
        return;
    };
    if state.sprinting {
        return;
    }
    if let Some(id) = state.regen_timer {
        if scheduler.is_active(id) {
            return;
        }
    }
    state.regen_timer = Some(scheduler.start(
        entity,
        TimerKind::StaminaRegen,
        STAMINA_TICK_INTERVAL,
        true,
        clock,
    ));
    trace!("regen loop started for {:?}", entity);
}

/// Stop the regen loop. Safe to call when it is not running.
pub fn stop_regen(world: &mut World, scheduler: &mut TimerScheduler, entity: Entity) {
    let Ok(mut state) = world.get::<&mut SprintState>(entity) else {
        return;
    };
    if let Some(id) = state.regen_timer.take() {
        scheduler.stop(id);
    }
}

/// Handle one drain tick.
///
/// A tick that observes (near-)zero velocity is skipped entirely: the
/// character holds the sprint key but is not actually moving, so no
/// stamina is spent and the loop stays active. When stamina reaches zero
/// the sprint is force-ended and the regen loop takes over.
pub fn tick_drain(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    events: &mut EventQueue,
    entity: Entity,
) {
    let moving = world
        .get::<&Velocity>(entity)
        .map(|v| v.0.length_squared() > NEAR_ZERO_SPEED * NEAR_ZERO_SPEED)
        .unwrap_or(false);
    if !moving {
        trace!("drain tick skipped for {:?}: not moving", entity);
        return;
    }

    let Ok(attrs) = world.get::<&CharacterAttributes>(entity).map(|a| *a) else {
        return;
    };
    let step = attrs.stamina_drain_rate * STAMINA_TICK_INTERVAL;

    let emptied = {
        let Ok(mut stamina) = world.get::<&mut Stamina>(entity) else {
            return;
        };
        stamina.current = (stamina.current - step).max(0.0);
        stamina.is_empty()
    };
    if !emptied {
        return;
    }

    debug!("stamina exhausted for {:?}", entity);
    let was_sprinting = {
        let Ok(mut state) = world.get::<&mut SprintState>(entity) else {
            return;
        };
        let was = state.sprinting;
        state.sprinting = false;
        was
    };
    if was_sprinting {
        sprint::set_move_speed(world, events, entity, attrs.base_speed);
    }
    stop_drain(world, scheduler, entity);
    start_regen(world, clock, scheduler, entity);
    if was_sprinting {
        events.push(GameEvent::SprintEnded {
            entity,
            reason: SprintEndReason::Exhausted,
        });
    }
}

/// Handle one regen tick.
///
/// Sprinting while the regen loop is somehow still live shuts the loop
/// down without recovering anything. Recovery saturates at max, at which
/// point the loop stops itself.
pub fn tick_regen(
    world: &mut World,
    _clock: &GameClock,
    scheduler: &mut TimerScheduler,
    events: &mut EventQueue,
    entity: Entity,
) {
    let sprinting = world
        .get::<&SprintState>(entity)
        .map(|s| s.sprinting)
        .unwrap_or(false);
    if sprinting {
        stop_regen(world, scheduler, entity);
        return;
    }

    let Ok(attrs) = world.get::<&CharacterAttributes>(entity).map(|a| *a) else {
        return;
    };
    let step = attrs.stamina_regen_rate * STAMINA_TICK_INTERVAL;

    let full = {
        let Ok(mut stamina) = world.get::<&mut Stamina>(entity) else {
            return;
        };
        stamina.current = (stamina.current + step).min(stamina.max);
        stamina.is_full()
    };
    if full {
        stop_regen(world, scheduler, entity);
        events.push(GameEvent::StaminaRecovered { entity });
    }
}
