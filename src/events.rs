//! Game event system for decoupled communication between systems.
//!
//! Systems emit events as they mutate state; the caller (demo shell, UI,
//! audio, tests) drains them at the end of a step and reacts without the
//! systems knowing about it.

use hecs::Entity;

/// Why a sprint ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintEndReason {
    /// The sprint input was released
    Released,
    /// Stamina hit zero mid-sprint
    Exhausted,
}

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A character started sprinting
    SprintStarted { entity: Entity },
    /// A character stopped sprinting
    SprintEnded {
        entity: Entity,
        reason: SprintEndReason,
    },
    /// Movement speed changed (pushed to the movement system synchronously)
    SpeedChanged { entity: Entity, speed: f32 },
    /// Stamina recovered back to maximum; the regen loop has stopped
    StaminaRecovered { entity: Entity },
    /// A character jumped, paying the stamina cost
    Jumped {
        entity: Entity,
        remaining_stamina: f32,
    },
    /// An airborne character touched the ground
    Landed { entity: Entity },
    /// The focused interactive object changed (None = looking at nothing)
    FocusChanged {
        entity: Entity,
        target: Option<Entity>,
    },
    /// A character interacted with a focused object
    Interacted { entity: Entity, target: Entity },
    /// Money changed by `amount`, new balance is `total`
    MoneyChanged {
        entity: Entity,
        amount: i32,
        total: i32,
    },
    /// A collectable was picked up, `total` held now
    CollectablePicked { entity: Entity, total: u32 },
    /// Health changed by `amount`, now at `current`
    HealthChanged {
        entity: Entity,
        amount: i32,
        current: i32,
    },
}

/// Simple event queue - events are pushed during update, processed at end of step
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
