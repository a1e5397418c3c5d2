//! Game engine - owns all simulation state and provides a clean API to
//! the application shell.
//!
//! The engine handles:
//! - Simulation state (world, clock, timers, events)
//! - Input routing to the gameplay systems
//! - Step advancement with in-order timer delivery
//!
//! The application shell (main.rs) only feeds in input events and fixed
//! time steps, and reacts to the events drained back out.

mod game_state;
mod simulation;

pub use game_state::GameState;
