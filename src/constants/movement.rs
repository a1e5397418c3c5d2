//! Movement and orientation constants.

/// Vertical velocity applied on jump (units/second)
pub const JUMP_IMPULSE: f32 = 420.0;
/// Downward acceleration while airborne (units/second²)
pub const GRAVITY: f32 = 980.0;
/// World height at which an airborne character lands
pub const GROUND_HEIGHT: f32 = 0.0;

/// Speed below which the character counts as not actually moving
/// (a drain tick observing this skips the stamina cost).
pub const NEAR_ZERO_SPEED: f32 = 1.0;

/// Radians of yaw/pitch per unit of look input
pub const LOOK_SENSITIVITY: f32 = 0.015;
/// Pitch is clamped to ±89° so the view never flips over the pole
pub const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;
