//! Money and collectable counters.

use hecs::{Entity, World};

use crate::components::Wallet;
use crate::events::{EventQueue, GameEvent};

/// Adjust the money balance by `change` (may be negative).
/// The balance never drops below zero.
pub fn add_money(world: &mut World, events: &mut EventQueue, entity: Entity, change: i32) {
    let total = {
        let Ok(mut wallet) = world.get::<&mut Wallet>(entity) else {
            return;
        };
        wallet.money = wallet.money.saturating_add(change).max(0);
        wallet.money
    };
    events.push(GameEvent::MoneyChanged {
        entity,
        amount: change,
        total,
    });
}

/// Record one more collectable picked up.
pub fn add_collectable(world: &mut World, events: &mut EventQueue, entity: Entity) {
    let total = {
        let Ok(mut wallet) = world.get::<&mut Wallet>(entity) else {
            return;
        };
        wallet.collectables += 1;
        wallet.collectables
    };
    events.push(GameEvent::CollectablePicked { entity, total });
}
