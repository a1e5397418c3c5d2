//! Simulation advancement: movement integration and the timer pump.

use crate::systems::{interaction, movement, stamina};
use crate::time_system::TimerKind;

use super::GameState;

/// Advance the simulation by `dt` seconds.
///
/// Movement integrates first so timer ticks observe up-to-date velocity.
/// Due timer ticks then fire strictly in due-time order, the clock
/// advancing to each tick's timestamp before its handler runs; a tick
/// scheduled by a handler still fires within the same step if it comes
/// due before the step's end.
pub fn step(state: &mut GameState, dt: f32) {
    puffin::profile_function!();

    let target = state.clock.time + dt;

    movement::integrate(&mut state.world, dt, &mut state.events);
    pump_timers(state, target);
    state.clock.advance_to(target);
    interaction::update_focus(&mut state.world, state.player, &mut state.events);
}

fn pump_timers(state: &mut GameState, target: f32) {
    puffin::profile_scope!("timer_pump");

    while let Some(tick) = state.scheduler.pop_due(target) {
        state.clock.advance_to(tick.at);
        match tick.kind {
            TimerKind::StaminaDrain => stamina::tick_drain(
                &mut state.world,
                &state.clock,
                &mut state.scheduler,
                &mut state.events,
                tick.entity,
            ),
            TimerKind::StaminaRegen => stamina::tick_regen(
                &mut state.world,
                &state.clock,
                &mut state.scheduler,
                &mut state.events,
                tick.entity,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CharacterAttributes;
    use crate::events::{GameEvent, SprintEndReason};
    use crate::input::InputEvent;
    use crate::queries;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(CharacterAttributes::default())
    }

    fn run(state: &mut GameState, seconds: f32) {
        let steps = (seconds / 0.1).round() as usize;
        for _ in 0..steps {
            state.step(0.1);
        }
    }

    #[test]
    fn test_one_second_of_moving_sprint_costs_fifteen_stamina() {
        let mut state = new_state();
        state.handle_input(InputEvent::Move(Vec2::new(0.0, 1.0)));
        state.handle_input(InputEvent::SprintPressed);

        run(&mut state, 1.0);

        let (stamina, _) = queries::stamina_of(&state.world, state.player).unwrap();
        assert!((stamina - 85.0).abs() < 1e-3, "stamina was {stamina}");
        assert_eq!(queries::speed_of(&state.world, state.player), Some(850.0));
    }

    #[test]
    fn test_stationary_sprint_costs_nothing() {
        let mut state = new_state();
        state.handle_input(InputEvent::SprintPressed);

        run(&mut state, 2.0);

        let (stamina, _) = queries::stamina_of(&state.world, state.player).unwrap();
        assert_eq!(stamina, 100.0);
        assert!(queries::is_sprinting(&state.world, state.player));
    }

    #[test]
    fn test_exhaustion_ends_sprint_then_regen_refills() {
        let mut state = new_state();
        state.handle_input(InputEvent::Move(Vec2::new(0.0, 1.0)));
        state.handle_input(InputEvent::SprintPressed);

        // 100 stamina at 15/s runs out within 7 seconds
        run(&mut state, 7.0);

        assert!(!queries::is_sprinting(&state.world, state.player));
        assert_eq!(queries::speed_of(&state.world, state.player), Some(500.0));
        let events = state.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::SprintEnded { reason: SprintEndReason::Exhausted, .. }
        )));

        // 10/s regen refills the pool in 10 seconds
        run(&mut state, 10.5);
        let (stamina, max) = queries::stamina_of(&state.world, state.player).unwrap();
        assert_eq!(stamina, max);
        let (drain, regen) = queries::stamina_timers_active(
            &state.world,
            &state.scheduler,
            state.player,
        );
        assert!(!drain && !regen);
        assert!(state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::StaminaRecovered { .. })));
    }

    #[test]
    fn test_stamina_stays_in_range_across_random_flailing() {
        let mut state = new_state();
        let script = [
            InputEvent::Move(Vec2::new(0.0, 1.0)),
            InputEvent::SprintPressed,
            InputEvent::JumpPressed,
            InputEvent::SprintReleased,
            InputEvent::SprintPressed,
            InputEvent::Move(Vec2::ZERO),
            InputEvent::Move(Vec2::new(1.0, 0.0)),
            InputEvent::JumpPressed,
            InputEvent::SprintReleased,
        ];

        for (i, event) in script.iter().cycle().take(400).enumerate() {
            state.handle_input(*event);
            state.step(0.1);

            let (stamina, max) = queries::stamina_of(&state.world, state.player).unwrap();
            assert!(
                (0.0..=max).contains(&stamina),
                "stamina {stamina} out of range at iteration {i}"
            );
            let speed = queries::speed_of(&state.world, state.player).unwrap();
            assert!(
                speed == 500.0 || speed == 850.0,
                "speed {speed} is neither base nor sprint at iteration {i}"
            );
            let (drain, regen) = queries::stamina_timers_active(
                &state.world,
                &state.scheduler,
                state.player,
            );
            assert!(!(drain && regen), "both timers active at iteration {i}");
        }
    }

    #[test]
    fn test_timer_started_mid_step_fires_within_same_step() {
        let mut state = new_state();
        state.handle_input(InputEvent::Move(Vec2::new(0.0, 1.0)));
        state.handle_input(InputEvent::SprintPressed);
        // Two drain steps empty the pool; exhaustion starts the regen loop
        // whose first tick lands inside a long step.
        state
            .world
            .get::<&mut crate::components::Stamina>(state.player)
            .unwrap()
            .current = 3.0;

        state.step(1.0);

        let (stamina, _) = queries::stamina_of(&state.world, state.player).unwrap();
        assert!(stamina > 0.0, "regen never ran inside the step");
        assert!(!queries::is_sprinting(&state.world, state.player));
    }

    #[test]
    fn test_despawn_cancels_all_timers() {
        let mut state = new_state();
        state.handle_input(InputEvent::Move(Vec2::new(0.0, 1.0)));
        state.handle_input(InputEvent::SprintPressed);
        assert!(state.scheduler.active_count() > 0);

        let player = state.player;
        state.despawn(player);
        assert_eq!(state.scheduler.active_count(), 0);

        // A step after despawn must not panic or resurrect anything
        state.step(0.5);
    }

    #[test]
    fn test_focus_follows_movement() {
        let mut state = new_state();
        let coin = crate::spawning::spawn_coin(
            &mut state.world,
            glam::Vec3::new(400.0, 0.0, 0.0),
            10,
        );

        state.step(0.1);
        assert_eq!(
            state
                .world
                .get::<&crate::components::InteractionFocus>(state.player)
                .unwrap()
                .target,
            None
        );

        // Walk toward the coin until it is in range
        state.handle_input(InputEvent::Move(Vec2::new(0.0, 1.0)));
        run(&mut state, 0.5);
        assert_eq!(
            state
                .world
                .get::<&crate::components::InteractionFocus>(state.player)
                .unwrap()
                .target,
            Some(coin)
        );

        state.handle_input(InputEvent::InteractPressed);
        assert!(!state.world.contains(coin));
        let (money, _) = queries::wallet_of(&state.world, state.player).unwrap();
        assert_eq!(money, 360);
    }
}
