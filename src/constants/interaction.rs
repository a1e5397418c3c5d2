//! Interaction focus constants.

/// Maximum distance at which an interactive object can be focused
pub const INTERACT_RANGE: f32 = 250.0;
/// Cosine of the half-angle of the focus cone (60° either side of forward)
pub const INTERACT_FACING_COS: f32 = 0.5;
