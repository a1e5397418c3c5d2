//! Time system constants.

/// Period of the repeating stamina drain/regen timers (seconds).
/// Drain and regen rates are per-second and get scaled by this interval.
pub const STAMINA_TICK_INTERVAL: f32 = 0.1;
