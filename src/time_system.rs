//! Simulation clock and repeating-timer scheduler.
//!
//! The scheduler is an injected value, not a global: every system that
//! starts or stops a timer takes it by `&mut` reference. Due ticks are
//! delivered strictly in due-time order by the engine step pump, which
//! advances the clock to each tick's timestamp before dispatching it.

use hecs::Entity;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

// =============================================================================
// GAME CLOCK
// =============================================================================

/// Global game time clock (in seconds)
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds (simulation time, not real time)
    pub time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance time to the given timestamp
    pub fn advance_to(&mut self, time: f32) {
        debug_assert!(
            time >= self.time,
            "Cannot go backwards in time: {} -> {}",
            self.time,
            time
        );
        self.time = time;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TIMER SCHEDULER
// =============================================================================

/// Opaque handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What a timer tick does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    StaminaDrain,
    StaminaRegen,
}

/// A timer tick that has come due
#[derive(Debug, Clone, Copy)]
pub struct DueTick {
    pub id: TimerId,
    pub entity: Entity,
    pub kind: TimerKind,
    /// Simulation time at which the tick fires
    pub at: f32,
}

/// Bookkeeping for a live timer
#[derive(Debug, Clone, Copy)]
struct ActiveTimer {
    entity: Entity,
    kind: TimerKind,
    interval: f32,
    repeating: bool,
    /// Timestamp of the next tick; heap entries with a different timestamp
    /// are stale and get skipped.
    next_due: f32,
}

/// A pending tick in the due queue
#[derive(Debug, Clone, Copy)]
struct ScheduledTick {
    id: TimerId,
    due: f32,
}

impl PartialEq for ScheduledTick {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl Eq for ScheduledTick {}

impl PartialOrd for ScheduledTick {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTick {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest tick first)
        other.due.partial_cmp(&self.due).unwrap_or(Ordering::Equal)
    }
}

/// Manages repeating interval timers with opaque handles.
///
/// Cancellation is immediate: once `stop` returns, no further tick from
/// that timer is ever delivered, because `pop_due` ignores queue entries
/// whose id is no longer in the active table.
#[derive(Debug, Clone, Default)]
pub struct TimerScheduler {
    next_id: u64,
    active: HashMap<TimerId, ActiveTimer>,
    queue: BinaryHeap<ScheduledTick>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer for an entity. The first tick comes due one interval
    /// from the current clock time.
    pub fn start(
        &mut self,
        entity: Entity,
        kind: TimerKind,
        interval: f32,
        repeating: bool,
        clock: &GameClock,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let next_due = clock.time + interval;
        self.active.insert(
            id,
            ActiveTimer {
                entity,
                kind,
                interval,
                repeating,
                next_due,
            },
        );
        self.queue.push(ScheduledTick { id, due: next_due });
        id
    }

    /// Stop a timer. Stopping an inactive or unknown timer is a safe no-op.
    pub fn stop(&mut self, id: TimerId) {
        self.active.remove(&id);
    }

    /// Whether the timer is still scheduled to fire
    pub fn is_active(&self, id: TimerId) -> bool {
        self.active.contains_key(&id)
    }

    /// Stop all timers belonging to an entity (e.g. on despawn)
    pub fn cancel_for_entity(&mut self, entity: Entity) {
        self.active.retain(|_, timer| timer.entity != entity);
    }

    /// Number of live timers
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Earliest pending due time, if any timer has a tick scheduled.
    /// Prunes stale queue entries from cancelled or rescheduled timers.
    pub fn next_due(&mut self) -> Option<f32> {
        loop {
            let head = *self.queue.peek()?;
            match self.active.get(&head.id) {
                Some(timer) if timer.next_due == head.due => return Some(head.due),
                _ => {
                    self.queue.pop();
                }
            }
        }
    }

    /// Pop the earliest tick due at or before `until`, rescheduling the
    /// timer's next tick if it repeats. Returns None when nothing is due.
    pub fn pop_due(&mut self, until: f32) -> Option<DueTick> {
        loop {
            let head = *self.queue.peek()?;
            let stale = match self.active.get(&head.id) {
                Some(timer) => timer.next_due != head.due,
                None => true,
            };
            if stale {
                self.queue.pop();
                continue;
            }
            if head.due > until {
                return None;
            }
            self.queue.pop();

            // Active and current, checked above
            let Some(timer) = self.active.get_mut(&head.id) else {
                continue;
            };
            let tick = DueTick {
                id: head.id,
                entity: timer.entity,
                kind: timer.kind,
                at: head.due,
            };
            if timer.repeating {
                timer.next_due = head.due + timer.interval;
                let due = timer.next_due;
                self.queue.push(ScheduledTick { id: head.id, due });
            } else {
                self.active.remove(&head.id);
            }
            return Some(tick);
        }
    }
}
