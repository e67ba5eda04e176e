//! Arena construction and run setup/teardown.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy_rapier2d::prelude::*;

use super::data::LoadedLevel;
use crate::items::spawn_item;
use crate::player::{spawn_player, CharacterSheet};

/// Marker for everything spawned for the current run, so it can be
/// cleaned up wholesale when the run ends.
#[derive(Component)]
pub struct LevelGeometry;

/// Vertical world units visible on screen.
const VIEW_HEIGHT: f32 = 28.0;
const WALL_THICKNESS: f32 = 0.5;

/// Build the arena from the loaded level: camera, walls, items, and
/// the player. Enemy waves start separately, after this.
pub fn setup_level(
    mut commands: Commands,
    loaded: Res<LoadedLevel>,
    sheet: Res<CharacterSheet>,
) {
    let Some(level) = loaded.0.as_ref() else {
        error!("No level loaded, cannot set up the arena");
        return;
    };

    info!("Building level: {}", level.name);

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        },
        LevelGeometry,
    ));

    spawn_walls(&mut commands, level.half_extents.0, level.half_extents.1);

    for item in &level.items {
        let entity = spawn_item(&mut commands, item.kind, Vec2::new(item.pos.0, item.pos.1));
        commands.entity(entity).insert(LevelGeometry);
    }

    spawn_player(&mut commands, level.player_spawn(), &sheet);
}

/// Four static walls boxing in the arena.
fn spawn_walls(commands: &mut Commands, hx: f32, hy: f32) {
    let walls = [
        // (center, half extents)
        (Vec2::new(0.0, hy + WALL_THICKNESS), Vec2::new(hx + 2.0 * WALL_THICKNESS, WALL_THICKNESS)),
        (Vec2::new(0.0, -hy - WALL_THICKNESS), Vec2::new(hx + 2.0 * WALL_THICKNESS, WALL_THICKNESS)),
        (Vec2::new(hx + WALL_THICKNESS, 0.0), Vec2::new(WALL_THICKNESS, hy)),
        (Vec2::new(-hx - WALL_THICKNESS, 0.0), Vec2::new(WALL_THICKNESS, hy)),
    ];

    for (center, half) in walls {
        commands.spawn((
            Sprite {
                color: Color::srgb(0.12, 0.16, 0.12),
                custom_size: Some(half * 2.0),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            Collider::cuboid(half.x, half.y),
            LevelGeometry,
        ));
    }
}

/// Tear the run down when leaving it.
pub fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelGeometry>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
