//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod gameplay;
mod interaction;
mod movement;
mod time;

// Re-export all constants at the module level for backward compatibility
pub use gameplay::*;
pub use interaction::*;
pub use movement::*;
pub use time::*;
