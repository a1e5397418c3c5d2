//! Headless character simulation: a player-controlled character with
//! sprint-gated stamina drain/regen on repeating timers, movement-speed
//! modulation, stamina-gated jumping, and an interactable-object
//! protocol.
//!
//! There is no engine host here. Input arrives as typed [`input::InputEvent`]s,
//! time advances through [`engine::GameState::step`], and everything the
//! simulation does is observable through drained [`events::GameEvent`]s
//! and the read-only helpers in [`queries`].

pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod input;
pub mod queries;
pub mod spawning;
pub mod systems;
pub mod time_system;
