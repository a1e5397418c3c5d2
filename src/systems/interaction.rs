//! The interactable-object protocol: focus, hover, and interaction.
//!
//! Target objects implement [`Interactable`] and are carried in an
//! [`Interactive`] component. Behaviors return an [`InteractOutcome`]
//! describing what happened; this system applies the effect to the
//! instigator and despawns consumed targets.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::components::{Health, InteractionFocus, Orientation, Position};
use crate::constants::{INTERACT_FACING_COS, INTERACT_RANGE};
use crate::events::{EventQueue, GameEvent};
use crate::systems::wallet;

/// Effect an interaction has on the instigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractEffect {
    None,
    GiveMoney(i32),
    GiveCollectable,
    Heal(i32),
}

/// What happened when an object was interacted with
#[derive(Debug, Clone, Copy)]
pub struct InteractOutcome {
    pub effect: InteractEffect,
    /// Consumed targets are despawned after the effect is applied
    pub consumed: bool,
}

/// Behavior of an object the character can interact with
pub trait Interactable: Send + Sync {
    fn on_interact(&mut self, instigator: Entity) -> InteractOutcome;

    /// Called when the object gains or loses interaction focus
    fn on_hover(&mut self, _hovered: bool) {}

    /// Prompt text shown while the object is focused
    fn interact_text(&self) -> &str;
}

/// Component wrapping a boxed interactable behavior
pub struct Interactive {
    pub behavior: Box<dyn Interactable>,
    pub hovered: bool,
}

impl Interactive {
    pub fn new(behavior: impl Interactable + 'static) -> Self {
        Self {
            behavior: Box::new(behavior),
            hovered: false,
        }
    }
}

// =============================================================================
// BUILT-IN INTERACTABLES
// =============================================================================

/// A coin worth some amount of money. Consumed on pickup.
pub struct Coin {
    pub value: i32,
}

impl Interactable for Coin {
    fn on_interact(&mut self, _instigator: Entity) -> InteractOutcome {
        InteractOutcome {
            effect: InteractEffect::GiveMoney(self.value),
            consumed: true,
        }
    }

    fn interact_text(&self) -> &str {
        "Pick up coin"
    }
}

/// A quest collectable. Consumed on pickup.
pub struct Collectable;

impl Interactable for Collectable {
    fn on_interact(&mut self, _instigator: Entity) -> InteractOutcome {
        InteractOutcome {
            effect: InteractEffect::GiveCollectable,
            consumed: true,
        }
    }

    fn interact_text(&self) -> &str {
        "Pick up collectable"
    }
}

/// A healing fountain. Stays in the world after use.
pub struct Fountain {
    pub heal: i32,
}

impl Interactable for Fountain {
    fn on_interact(&mut self, _instigator: Entity) -> InteractOutcome {
        InteractOutcome {
            effect: InteractEffect::Heal(self.heal),
            consumed: false,
        }
    }

    fn interact_text(&self) -> &str {
        "Drink from fountain"
    }
}

// =============================================================================
// FOCUS
// =============================================================================

/// Recompute which interactive object the character is focused on: the
/// nearest one within range and inside the facing cone. Hover callbacks
/// fire on every focus change.
pub fn update_focus(world: &mut World, entity: Entity, events: &mut EventQueue) {
    let Ok(origin) = world.get::<&Position>(entity).map(|p| p.0) else {
        return;
    };
    let Ok(forward) = world.get::<&Orientation>(entity).map(|o| o.forward()) else {
        return;
    };

    let mut best: Option<(Entity, f32)> = None;
    for (id, (pos, _)) in world.query::<(&Position, &Interactive)>().iter() {
        if id == entity {
            continue;
        }
        let offset = Vec2::new(pos.0.x - origin.x, pos.0.z - origin.z);
        let distance = offset.length();
        if distance > INTERACT_RANGE {
            continue;
        }
        // Objects the character is standing on count as in front
        if distance > f32::EPSILON && forward.dot(offset / distance) < INTERACT_FACING_COS {
            continue;
        }
        if best.map(|(_, d)| distance < d).unwrap_or(true) {
            best = Some((id, distance));
        }
    }
    let new_target = best.map(|(id, _)| id);

    let old_target = {
        let Ok(focus) = world.get::<&InteractionFocus>(entity) else {
            return;
        };
        focus.target
    };
    if new_target == old_target {
        return;
    }

    if let Some(old) = old_target {
        if let Ok(mut interactive) = world.get::<&mut Interactive>(old) {
            interactive.hovered = false;
            interactive.behavior.on_hover(false);
        }
    }
    if let Some(new) = new_target {
        if let Ok(mut interactive) = world.get::<&mut Interactive>(new) {
            interactive.hovered = true;
            interactive.behavior.on_hover(true);
        }
    }
    if let Ok(mut focus) = world.get::<&mut InteractionFocus>(entity) {
        focus.target = new_target;
    }
    events.push(GameEvent::FocusChanged {
        entity,
        target: new_target,
    });
}

// =============================================================================
// INTERACTION
// =============================================================================

/// Interact with the currently focused object, if any.
pub fn try_interact(world: &mut World, events: &mut EventQueue, entity: Entity) {
    let target = {
        let Ok(focus) = world.get::<&InteractionFocus>(entity) else {
            return;
        };
        focus.target
    };
    let Some(target) = target else {
        debug!("interact pressed with nothing focused");
        return;
    };

    let outcome = {
        let Ok(mut interactive) = world.get::<&mut Interactive>(target) else {
            return;
        };
        interactive.behavior.on_interact(entity)
    };
    events.push(GameEvent::Interacted { entity, target });

    match outcome.effect {
        InteractEffect::None => {}
        InteractEffect::GiveMoney(amount) => wallet::add_money(world, events, entity, amount),
        InteractEffect::GiveCollectable => wallet::add_collectable(world, events, entity),
        InteractEffect::Heal(amount) => {
            if let Ok(mut health) = world.get::<&mut Health>(entity) {
                health.heal(amount);
                let current = health.current;
                drop(health);
                events.push(GameEvent::HealthChanged {
                    entity,
                    amount,
                    current,
                });
            }
        }
    }

    if outcome.consumed {
        if let Ok(mut focus) = world.get::<&mut InteractionFocus>(entity) {
            focus.target = None;
        }
        let _ = world.despawn(target);
    }
}

/// Prompt text for the focused object, if any
pub fn focused_prompt(world: &World, entity: Entity) -> Option<String> {
    let target = world.get::<&InteractionFocus>(entity).ok()?.target?;
    let interactive = world.get::<&Interactive>(target).ok()?;
    Some(interactive.behavior.interact_text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CharacterAttributes, Wallet};
    use crate::spawning;
    use glam::Vec3;

    fn setup() -> (World, EventQueue, Entity) {
        let mut world = World::new();
        let player = spawning::spawn_character(&mut world, CharacterAttributes::default());
        (world, EventQueue::new(), player)
    }

    fn focus_on(world: &mut World, player: Entity, target: Entity) {
        world.get::<&mut InteractionFocus>(player).unwrap().target = Some(target);
    }

    #[test]
    fn test_focus_picks_nearest_object_in_front() {
        let (mut world, mut events, player) = setup();
        // yaw 0 faces +x
        let near = spawning::spawn_coin(&mut world, Vec3::new(100.0, 0.0, 0.0), 5);
        let _far = spawning::spawn_coin(&mut world, Vec3::new(200.0, 0.0, 0.0), 5);
        let _behind = spawning::spawn_coin(&mut world, Vec3::new(-50.0, 0.0, 0.0), 5);
        let _out_of_range = spawning::spawn_coin(&mut world, Vec3::new(900.0, 0.0, 0.0), 5);

        update_focus(&mut world, player, &mut events);

        let focus = *world.get::<&InteractionFocus>(player).unwrap();
        assert_eq!(focus.target, Some(near));
        assert!(world.get::<&Interactive>(near).unwrap().hovered);
        assert_eq!(
            focused_prompt(&world, player).as_deref(),
            Some("Pick up coin")
        );
    }

    #[test]
    fn test_focus_change_unhovers_old_target() {
        let (mut world, mut events, player) = setup();
        let coin = spawning::spawn_coin(&mut world, Vec3::new(100.0, 0.0, 0.0), 5);

        update_focus(&mut world, player, &mut events);
        assert!(world.get::<&Interactive>(coin).unwrap().hovered);

        // Turn around: nothing in front any more
        world.get::<&mut Orientation>(player).unwrap().yaw = std::f32::consts::PI;
        update_focus(&mut world, player, &mut events);

        assert!(!world.get::<&Interactive>(coin).unwrap().hovered);
        assert_eq!(world.get::<&InteractionFocus>(player).unwrap().target, None);
        let changes = events
            .drain()
            .filter(|e| matches!(e, GameEvent::FocusChanged { .. }))
            .count();
        assert_eq!(changes, 2);
    }

    #[test]
    fn test_coin_pickup_adds_money_and_despawns() {
        let (mut world, mut events, player) = setup();
        let coin = spawning::spawn_coin(&mut world, Vec3::new(100.0, 0.0, 0.0), 25);
        focus_on(&mut world, player, coin);

        try_interact(&mut world, &mut events, player);

        assert_eq!(world.get::<&Wallet>(player).unwrap().money, 375);
        assert!(!world.contains(coin));
        assert_eq!(world.get::<&InteractionFocus>(player).unwrap().target, None);
    }

    #[test]
    fn test_collectable_pickup_increments_counter() {
        let (mut world, mut events, player) = setup();
        let item = spawning::spawn_collectable(&mut world, Vec3::new(100.0, 0.0, 0.0));
        focus_on(&mut world, player, item);

        try_interact(&mut world, &mut events, player);

        assert_eq!(world.get::<&Wallet>(player).unwrap().collectables, 1);
        assert!(!world.contains(item));
    }

    #[test]
    fn test_fountain_heals_and_persists() {
        let (mut world, mut events, player) = setup();
        world.get::<&mut Health>(player).unwrap().current = 1;
        let fountain = spawning::spawn_fountain(&mut world, Vec3::new(100.0, 0.0, 0.0), 1);
        focus_on(&mut world, player, fountain);

        try_interact(&mut world, &mut events, player);
        assert_eq!(world.get::<&Health>(player).unwrap().current, 2);
        assert!(world.contains(fountain));

        // Healing caps at max health on repeat use
        try_interact(&mut world, &mut events, player);
        try_interact(&mut world, &mut events, player);
        assert_eq!(world.get::<&Health>(player).unwrap().current, 3);
    }

    #[test]
    fn test_interact_with_no_focus_is_a_no_op() {
        let (mut world, mut events, player) = setup();
        try_interact(&mut world, &mut events, player);
        assert!(events.is_empty());
    }
}
