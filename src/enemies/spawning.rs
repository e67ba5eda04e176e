//! Wave-based enemy spawning.
//!
//! A wave fills the level's spawn points with randomly chosen enemy
//! kinds, up to a cap on living enemies. With a nonzero interval new
//! waves keep coming while the run is active.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::components::{Enemy, EnemyType, Patrol};
use super::data::{EnemyDefinition, EnemyRegistry};
use crate::actor::Actor;
use crate::world::{LevelGeometry, LoadedLevel};

/// Time until the next wave, if periodic spawning is configured.
#[derive(Resource, Default)]
pub struct WaveTimer(pub Option<Timer>);

/// Arm the wave timer and spawn the opening wave.
pub fn start_waves(
    mut commands: Commands,
    mut timer: ResMut<WaveTimer>,
    level: Res<LoadedLevel>,
    registry: Res<EnemyRegistry>,
) {
    let Some(level) = level.0.as_ref() else {
        return;
    };

    timer.0 = (level.waves.spawn_interval > 0.0).then(|| {
        Timer::from_seconds(level.waves.spawn_interval, TimerMode::Repeating)
    });

    let spawned = spawn_wave(&mut commands, level, &registry, 0);
    info!("Opening wave: {} enemies", spawned);
}

/// Spawn periodic waves while the run is active.
pub fn wave_tick(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<WaveTimer>,
    level: Res<LoadedLevel>,
    registry: Res<EnemyRegistry>,
    alive: Query<&Actor, With<Enemy>>,
) {
    let (Some(timer), Some(level)) = (timer.0.as_mut(), level.0.as_ref()) else {
        return;
    };

    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    let living = alive.iter().filter(|actor| !actor.is_dead()).count();
    let spawned = spawn_wave(&mut commands, level, &registry, living);
    if spawned > 0 {
        info!("Wave spawned: {} enemies ({} already active)", spawned, living);
    }
}

/// Spawn up to one wave of enemies, cycling over the spawn points and
/// picking a random kind per slot. Returns how many were spawned.
fn spawn_wave(
    commands: &mut Commands,
    level: &crate::world::LevelDefinition,
    registry: &EnemyRegistry,
    already_alive: usize,
) -> usize {
    let points = &level.enemy_spawn_points;
    if points.is_empty() || level.waves.kinds.is_empty() {
        warn!("Level has no enemy spawn points or wave kinds configured");
        return 0;
    }

    let mut rng = rand::thread_rng();
    let mut alive = already_alive;
    let mut spawned = 0;

    for i in 0..level.waves.enemies_per_wave {
        if alive >= level.waves.max_enemies {
            break;
        }

        let Some(kind) = level.waves.kinds.choose(&mut rng) else {
            break;
        };
        let Some(definition) = registry.get(kind) else {
            warn!("Unknown enemy type in wave settings: {}", kind);
            continue;
        };

        let point = points[i % points.len()];
        spawn_enemy(
            commands,
            kind,
            definition,
            Vec2::new(point.0, point.1),
            &mut rng,
        );
        alive += 1;
        spawned += 1;
    }

    spawned
}

/// Spawn one enemy entity at the given position.
fn spawn_enemy(
    commands: &mut Commands,
    kind: &str,
    definition: &EnemyDefinition,
    pos: Vec2,
    rng: &mut impl Rng,
) -> Entity {
    commands
        .spawn((
            Enemy,
            EnemyType(kind.to_string()),
            definition.to_stats(),
            Actor::new(definition.max_health),
            // Random initial heading so a wave doesn't march in lockstep.
            Patrol::with_heading(pos, definition.patrol_range, rng.gen(), rng.gen()),
            Sprite {
                color: Color::srgb(definition.color.0, definition.color.1, definition.color.2),
                custom_size: Some(Vec2::splat(definition.size)),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 1.0),
            RigidBody::KinematicPositionBased,
            Collider::ball(definition.size * 0.5),
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::all(),
            LevelGeometry,
        ))
        .id()
}
