//! Core game state - owns the simulation data.

use hecs::{Entity, World};
use log::debug;

use crate::components::CharacterAttributes;
use crate::events::{EventQueue, GameEvent};
use crate::input::InputEvent;
use crate::spawning;
use crate::systems::{interaction, jump, movement, sprint};
use crate::time_system::{GameClock, TimerScheduler};

use super::simulation;

/// Core game state - owns all simulation data.
pub struct GameState {
    /// The ECS world
    pub world: World,

    /// Game clock (simulation time)
    pub clock: GameClock,

    /// Repeating-timer scheduler, passed by reference into the systems
    pub scheduler: TimerScheduler,

    /// Event queue for game events
    pub events: EventQueue,

    /// Player entity handle
    pub player: Entity,
}

impl GameState {
    /// Create a new game state with a character spawned from the given
    /// attributes.
    pub fn new(attrs: CharacterAttributes) -> Self {
        let mut world = World::new();
        let player = spawning::spawn_character(&mut world, attrs);

        Self {
            world,
            clock: GameClock::new(),
            scheduler: TimerScheduler::new(),
            events: EventQueue::new(),
            player,
        }
    }

    /// Route a typed input event to the responsible system. Handlers run
    /// to completion before this returns; there is no deferral.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(axes) => movement::handle_move_input(
                &mut self.world,
                &self.clock,
                &mut self.scheduler,
                self.player,
                axes,
            ),
            InputEvent::Look(axes) => {
                movement::handle_look_input(&mut self.world, self.player, axes)
            }
            InputEvent::SprintPressed => sprint::start_sprint(
                &mut self.world,
                &self.clock,
                &mut self.scheduler,
                &mut self.events,
                self.player,
            ),
            InputEvent::SprintReleased => sprint::stop_sprint(
                &mut self.world,
                &self.clock,
                &mut self.scheduler,
                &mut self.events,
                self.player,
            ),
            InputEvent::JumpPressed => jump::try_jump(
                &mut self.world,
                &self.clock,
                &mut self.scheduler,
                &mut self.events,
                self.player,
            ),
            InputEvent::InteractPressed => {
                interaction::try_interact(&mut self.world, &mut self.events, self.player)
            }
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        simulation::step(self, dt);
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    /// Despawn an entity, cancelling any timers it owns first so no
    /// callback ever fires for a destroyed instance.
    pub fn despawn(&mut self, entity: Entity) {
        self.scheduler.cancel_for_entity(entity);
        if self.world.despawn(entity).is_err() {
            debug!("despawn of {:?} ignored: no such entity", entity);
        }
    }
}
