//! Enemy AI behavior systems.

use bevy::prelude::*;

use super::components::{Enemy, EnemyStats, Patrol};
use crate::actor::Actor;
use crate::combat::DeathDelay;
use crate::player::Player;

/// Steer patrolling enemies toward the player when in detection range.
pub fn detect_player(
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&Transform, &EnemyStats, &mut Patrol, &Actor), With<Enemy>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, stats, mut patrol, actor) in enemy_query.iter_mut() {
        if actor.is_dead() {
            continue;
        }

        let offset = player_pos - transform.translation.truncate();
        if offset.length() <= stats.detection_range {
            patrol.steer_toward(offset.normalize_or_zero());
        }
    }
}

/// Move enemies along their patrol, bouncing at the bounds.
pub fn patrol_move(
    time: Res<Time>,
    mut enemy_query: Query<(&mut Transform, &mut Patrol, &EnemyStats, &Actor), With<Enemy>>,
) {
    for (mut transform, mut patrol, stats, actor) in enemy_query.iter_mut() {
        if actor.is_dead() {
            continue;
        }

        let pos = transform.translation.truncate();
        let dir = patrol.step(pos);
        let movement = dir * stats.move_speed * time.delta_secs();
        transform.translation += movement.extend(0.0);
    }
}

/// Start the despawn delay when an enemy dies.
pub fn handle_enemy_death(
    mut commands: Commands,
    enemy_query: Query<(Entity, &Actor), (With<Enemy>, Without<DeathDelay>)>,
) {
    for (entity, actor) in enemy_query.iter() {
        if actor.is_dead() {
            commands.entity(entity).insert(DeathDelay::new(1.0));
        }
    }
}

/// Despawn enemies once their death delay runs out.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathDelay), With<Enemy>>,
) {
    for (entity, mut delay) in query.iter_mut() {
        if delay.0.tick(time.delta()).finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
