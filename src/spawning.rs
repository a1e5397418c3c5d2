//! Data-driven entity spawning.

use glam::Vec3;
use hecs::{Entity, World};
use log::info;
use rand::Rng;

use crate::components::{
    CharacterAttributes, Health, InteractionFocus, MoveIntent, MoveSpeed, MovementState,
    Orientation, Player, Position, SprintState, Stamina, Velocity, Wallet,
};
use crate::systems::interaction::{Coin, Collectable, Fountain, Interactive};

/// Spawn a player character with state initialized from its attributes:
/// speed at base, stamina and health at their maximums, standing on the
/// ground at the origin.
pub fn spawn_character(world: &mut World, attrs: CharacterAttributes) -> Entity {
    let entity = world.spawn((
        Player,
        Stamina::new(attrs.base_stamina),
        MoveSpeed {
            current: attrs.base_speed,
        },
        Health::new(attrs.base_health),
        SprintState::default(),
        MoveIntent::default(),
        Orientation::default(),
        Position::default(),
        Velocity::default(),
        MovementState::grounded(),
        Wallet {
            money: attrs.starting_money,
            collectables: 0,
        },
        InteractionFocus::default(),
        attrs,
    ));
    info!("spawned character {:?}", entity);
    entity
}

/// Spawn a coin worth `value` money
pub fn spawn_coin(world: &mut World, position: Vec3, value: i32) -> Entity {
    world.spawn((Position(position), Interactive::new(Coin { value })))
}

/// Spawn a quest collectable
pub fn spawn_collectable(world: &mut World, position: Vec3) -> Entity {
    world.spawn((Position(position), Interactive::new(Collectable)))
}

/// Spawn a healing fountain restoring `heal` health per use
pub fn spawn_fountain(world: &mut World, position: Vec3, heal: i32) -> Entity {
    world.spawn((Position(position), Interactive::new(Fountain { heal })))
}

/// Kinds of props the demo world scatters around
#[derive(Debug, Clone, Copy)]
pub enum PropKind {
    Coin,
    Collectable,
    Fountain,
}

impl PropKind {
    pub fn spawn(self, world: &mut World, position: Vec3, rng: &mut impl Rng) -> Entity {
        match self {
            PropKind::Coin => spawn_coin(world, position, rng.gen_range(5..=50)),
            PropKind::Collectable => spawn_collectable(world, position),
            PropKind::Fountain => spawn_fountain(world, position, 1),
        }
    }
}

/// Scatter `count` random props on the ground within `radius` of the origin
pub fn scatter_props(world: &mut World, rng: &mut impl Rng, count: usize, radius: f32) {
    for _ in 0..count {
        let kind = match rng.gen_range(0..10) {
            0..=5 => PropKind::Coin,
            6..=8 => PropKind::Collectable,
            _ => PropKind::Fountain,
        };
        let position = Vec3::new(
            rng.gen_range(-radius..radius),
            0.0,
            rng.gen_range(-radius..radius),
        );
        kind.spawn(world, position, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_state_initialized_from_attributes() {
        let mut world = World::new();
        let attrs = CharacterAttributes::default();
        let player = spawn_character(&mut world, attrs);

        let stamina = *world.get::<&Stamina>(player).unwrap();
        assert_eq!(stamina.current, attrs.base_stamina);
        assert_eq!(stamina.max, attrs.base_stamina);
        assert_eq!(
            world.get::<&MoveSpeed>(player).unwrap().current,
            attrs.base_speed
        );
        assert_eq!(world.get::<&Health>(player).unwrap().current, attrs.base_health);
        assert_eq!(world.get::<&Wallet>(player).unwrap().money, attrs.starting_money);
        assert!(world.get::<&MovementState>(player).unwrap().grounded);
        assert!(!world.get::<&SprintState>(player).unwrap().sprinting);
    }

    #[test]
    fn test_scatter_spawns_requested_count() {
        let mut world = World::new();
        let mut rng = rand::thread_rng();
        scatter_props(&mut world, &mut rng, 12, 400.0);
        assert_eq!(world.query::<&Interactive>().iter().count(), 12);
    }
}
