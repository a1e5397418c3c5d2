//! Gameplay systems - free functions operating on the world.

pub mod interaction;
pub mod jump;
pub mod movement;
pub mod sprint;
pub mod stamina;
pub mod wallet;
