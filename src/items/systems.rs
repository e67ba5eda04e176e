//! Item pickup handling.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Item, ItemKind};
use crate::actor::Actor;
use crate::core::{CoinCollectedEvent, ItemPickupEvent};
use crate::player::Player;

/// Resolve player/item sensor overlaps.
///
/// Items carry trigger colliders; when the player walks into one the
/// effect applies once and the item despawns.
pub fn collect_items(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut items: Query<&mut Item>,
    mut player: Query<(Entity, &mut Actor), With<Player>>,
    mut pickups: EventWriter<ItemPickupEvent>,
    mut coins: EventWriter<CoinCollectedEvent>,
) {
    let Ok((player_entity, mut actor)) = player.get_single_mut() else {
        return;
    };

    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        // One side must be the player, the other an item.
        let item_entity = match (*a == player_entity, *b == player_entity) {
            (true, _) => *b,
            (_, true) => *a,
            _ => continue,
        };
        let Ok(mut item) = items.get_mut(item_entity) else {
            continue;
        };

        // Dead players don't pick things up.
        if actor.is_dead() {
            continue;
        }

        let Some(kind) = item.collect() else {
            continue;
        };

        match kind {
            ItemKind::Heart { heal } => {
                actor.heal(heal);
                info!(
                    "Heart collected: +{} health ({}/{})",
                    heal,
                    actor.health(),
                    actor.max_health()
                );
            }
            ItemKind::Coin { value } => {
                coins.send(CoinCollectedEvent { value });
                info!("Coin collected: +{} points", value);
            }
        }

        pickups.send(ItemPickupEvent {
            item: item_entity,
            player: player_entity,
        });
        commands.entity(item_entity).despawn_recursive();
    }
}

/// Spawn one item entity with its sensor collider.
pub fn spawn_item(commands: &mut Commands, kind: ItemKind, pos: Vec2) -> Entity {
    let (color, size) = match kind {
        ItemKind::Heart { .. } => (Color::srgb(0.9, 0.25, 0.35), Vec2::splat(0.5)),
        ItemKind::Coin { .. } => (Color::srgb(0.95, 0.8, 0.2), Vec2::splat(0.35)),
    };

    commands
        .spawn((
            Item::new(kind),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.5),
            Collider::ball(size.x * 0.5),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::all(),
        ))
        .id()
}
