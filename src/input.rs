//! Typed input events.
//!
//! Key bindings and device handling live outside this crate; callers
//! translate whatever backend they use into these events and feed them
//! to [`crate::engine::GameState::handle_input`].

use glam::Vec2;

/// A discrete input event delivered to the character
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Movement axes (x = strafe right, y = forward). Zero means stop.
    Move(Vec2),
    /// Look axes (x = yaw, y = pitch)
    Look(Vec2),
    SprintPressed,
    SprintReleased,
    JumpPressed,
    InteractPressed,
}
