use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::time_system::TimerId;

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Immutable character configuration, set at spawn and never mutated.
///
/// Deserializable so a tuning file can override the defaults; missing
/// fields fall back to the built-in values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterAttributes {
    pub base_speed: f32,
    pub sprint_speed_additive: f32,
    pub base_stamina: f32,
    /// Stamina lost per second while sprinting
    pub stamina_drain_rate: f32,
    /// Stamina recovered per second while not sprinting
    pub stamina_regen_rate: f32,
    /// Stamina required (and spent) to jump
    pub min_stamina_to_jump: f32,
    pub base_health: i32,
    pub starting_money: i32,
}

impl Default for CharacterAttributes {
    fn default() -> Self {
        Self {
            base_speed: CHARACTER_BASE_SPEED,
            sprint_speed_additive: SPRINT_SPEED_ADDITIVE,
            base_stamina: CHARACTER_BASE_STAMINA,
            stamina_drain_rate: STAMINA_DRAIN_RATE,
            stamina_regen_rate: STAMINA_REGEN_RATE,
            min_stamina_to_jump: MIN_STAMINA_TO_JUMP,
            base_health: CHARACTER_BASE_HEALTH,
            starting_money: STARTING_MONEY,
        }
    }
}

impl CharacterAttributes {
    /// Movement speed while sprinting
    pub fn sprint_speed(&self) -> f32 {
        self.base_speed + self.sprint_speed_additive
    }
}

/// Stamina pool. Invariant: `0 <= current <= max` at every observation point.
#[derive(Debug, Clone, Copy)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn percentage(&self) -> f32 {
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Current movement speed, pushed to the movement system on every change.
/// Only ever `base_speed` or `base_speed + sprint_speed_additive`.
#[derive(Debug, Clone, Copy)]
pub struct MoveSpeed {
    pub current: f32,
}

/// Health component
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Sprint flag plus the two opaque timer handles the regulator manages.
/// At most one of the two timers is active at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintState {
    pub sprinting: bool,
    pub drain_timer: Option<TimerId>,
    pub regen_timer: Option<TimerId>,
}

/// Most recent movement-intent axes from input (x = strafe, y = forward).
/// Zero means no intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent(pub Vec2);

/// View orientation in radians. Yaw wraps, pitch is clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    /// Unit forward vector on the horizontal plane
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Unit right vector on the horizontal plane
    pub fn right(&self) -> Vec2 {
        Vec2::new(self.yaw.sin(), -self.yaw.cos())
    }
}

/// World position (y is up)
#[derive(Debug, Clone, Copy, Default)]
pub struct Position(pub Vec3);

/// Current velocity, recomputed by the integrator each step.
/// The drain tick reads this to decide whether the character is actually moving.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec3);

/// Grounded/airborne state, owned by the movement integrator.
#[derive(Debug, Clone, Copy)]
pub struct MovementState {
    pub grounded: bool,
    pub vertical_velocity: f32,
}

impl MovementState {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            vertical_velocity: 0.0,
        }
    }

    pub fn can_jump(&self) -> bool {
        self.grounded
    }
}

/// Money and collectable counters
#[derive(Debug, Clone, Copy, Default)]
pub struct Wallet {
    pub money: i32,
    pub collectables: u32,
}

/// The interactive entity the character is currently looking at, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionFocus {
    pub target: Option<hecs::Entity>,
}
