//! Headless demo shell: spawns a character and some props, then drives a
//! scripted input sequence through fixed 0.1s steps, printing a short
//! state trace.
//!
//! Pass a path to a JSON attributes file to override the default tuning.

use std::path::Path;

use glam::Vec2;

use character_sim::components::CharacterAttributes;
use character_sim::config;
use character_sim::engine::GameState;
use character_sim::events::GameEvent;
use character_sim::input::InputEvent;
use character_sim::queries;
use character_sim::spawning;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let attrs = match std::env::args().nth(1) {
        Some(path) => config::load_attributes(Path::new(&path))?,
        None => CharacterAttributes::default(),
    };

    let mut state = GameState::new(attrs);
    let mut rng = rand::thread_rng();
    spawning::scatter_props(&mut state.world, &mut rng, 8, 600.0);

    // A short scripted session: walk, sprint until exhausted, jump, rest.
    let script: [(f32, InputEvent); 7] = [
        (0.0, InputEvent::Look(Vec2::new(20.0, -5.0))),
        (0.5, InputEvent::Move(Vec2::new(0.0, 1.0))),
        (1.0, InputEvent::SprintPressed),
        (3.0, InputEvent::JumpPressed),
        (5.0, InputEvent::SprintReleased),
        (6.0, InputEvent::InteractPressed),
        (8.0, InputEvent::Move(Vec2::ZERO)),
    ];

    let mut next_input = 0;
    for step in 0..120 {
        let now = step as f32 * 0.1;
        while next_input < script.len() && script[next_input].0 <= now {
            state.handle_input(script[next_input].1);
            next_input += 1;
        }
        state.step(0.1);

        for event in state.drain_events() {
            report(&state, &event);
        }

        if step % 10 == 0 {
            let (stamina, max) = queries::stamina_of(&state.world, state.player)
                .unwrap_or((0.0, 0.0));
            let speed = queries::speed_of(&state.world, state.player).unwrap_or(0.0);
            println!(
                "t={now:5.1}s  stamina {stamina:6.1}/{max:.0}  speed {speed:.0}{}",
                queries::focused_prompt(&state.world, state.player)
                    .map(|p| format!("  [{p}]"))
                    .unwrap_or_default()
            );
        }
    }

    Ok(())
}

fn report(state: &GameState, event: &GameEvent) {
    match event {
        GameEvent::SprintStarted { .. } => println!("  >> sprint started"),
        GameEvent::SprintEnded { reason, .. } => println!("  >> sprint ended ({reason:?})"),
        GameEvent::StaminaRecovered { .. } => println!("  >> stamina fully recovered"),
        GameEvent::Jumped {
            remaining_stamina, ..
        } => println!("  >> jumped ({remaining_stamina:.0} stamina left)"),
        GameEvent::Landed { .. } => println!("  >> landed"),
        GameEvent::MoneyChanged { amount, total, .. } => {
            println!("  >> money {amount:+} (now {total})")
        }
        GameEvent::CollectablePicked { total, .. } => {
            println!("  >> collectable picked up (have {total})")
        }
        GameEvent::FocusChanged { target, .. } => {
            if target.is_some() {
                if let Some(prompt) = queries::focused_prompt(&state.world, state.player) {
                    println!("  >> looking at: {prompt}");
                }
            }
        }
        _ => {}
    }
}
