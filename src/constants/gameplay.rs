//! Core character attribute defaults.

/// Default walking speed (units/second)
pub const CHARACTER_BASE_SPEED: f32 = 500.0;
/// Speed added on top of the base while sprinting
pub const SPRINT_SPEED_ADDITIVE: f32 = 350.0;

/// Default maximum health
pub const CHARACTER_BASE_HEALTH: i32 = 3;

/// Default maximum stamina
pub const CHARACTER_BASE_STAMINA: f32 = 100.0;
/// Stamina drained per second while sprinting
pub const STAMINA_DRAIN_RATE: f32 = 15.0;
/// Stamina recovered per second while not sprinting
pub const STAMINA_REGEN_RATE: f32 = 10.0;
/// Stamina required (and spent) to jump
pub const MIN_STAMINA_TO_JUMP: f32 = 10.0;

/// Money the character starts with
pub const STARTING_MONEY: i32 = 350;
