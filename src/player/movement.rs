//! Top-down player movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Facing, Player};
use super::data::CharacterSheet;
use crate::actor::Actor;
use crate::core::GameState;
use crate::world::LevelGeometry;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Update,
        player_movement.run_if(in_state(GameState::InGame)),
    );
}

/// Handle WASD movement.
///
/// While the dash override is active it replaces input entirely;
/// otherwise the normalized input axis scaled by the character's speed
/// drives the kinematic controller. A dead player stops moving.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    sheet: Res<CharacterSheet>,
    mut player_query: Query<
        (&Actor, &mut Facing, &mut KinematicCharacterController),
        With<Player>,
    >,
) {
    let Ok((actor, mut facing, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    if actor.is_dead() {
        controller.translation = None;
        return;
    }

    // Build input direction from WASD
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    // Normalize to prevent faster diagonal movement
    if axis != Vec2::ZERO {
        axis = axis.normalize();
        facing.0 = axis;
    }

    let velocity = match actor.motion_override() {
        Some(dash) => dash,
        None if actor.ability_active() => Vec2::ZERO,
        None => axis * sheet.0.move_speed,
    };

    controller.translation = Some(velocity * time.delta_secs());
}

/// Spawn the player entity.
pub fn spawn_player(commands: &mut Commands, pos: Vec2, sheet: &CharacterSheet) -> Entity {
    let (ability, cooldown, duration) = sheet.0.ability.to_ability();

    commands
        .spawn((
            Player,
            Facing::default(),
            Actor::with_ability(sheet.0.max_health, ability, cooldown, duration),
            Sprite {
                color: Color::srgb(0.3, 0.8, 0.9),
                custom_size: Some(Vec2::splat(0.9)),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 1.0),
            RigidBody::KinematicPositionBased,
            Collider::ball(0.45),
            KinematicCharacterController::default(),
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::all(),
            LevelGeometry,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Ability;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn world_with_time(dt: f32) -> World {
        let mut world = World::new();
        world.insert_resource(ButtonInput::<KeyCode>::default());
        let mut time: Time = Time::default();
        time.advance_by(Duration::from_secs_f32(dt));
        world.insert_resource(time);
        world.insert_resource(CharacterSheet::default());
        world
    }

    #[test]
    fn input_drives_the_controller() {
        let mut world = world_with_time(0.1);
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        world.spawn((
            Player,
            Facing::default(),
            Actor::new(3),
            KinematicCharacterController::default(),
        ));

        world
            .run_system_once(player_movement)
            .expect("system run failed");

        let translation = world
            .query::<&KinematicCharacterController>()
            .iter(&world)
            .next()
            .unwrap()
            .translation
            .unwrap();
        // move_speed 5.0 for 0.1s
        assert!((translation.x - 0.5).abs() < 1e-5);
        assert_eq!(translation.y, 0.0);
    }

    #[test]
    fn dash_override_replaces_input() {
        let mut world = world_with_time(0.1);
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);

        let mut actor = Actor::with_ability(3, Ability::Dash { multiplier: 4.0 }, 1.0, 0.1);
        assert!(actor.activate_ability(Vec2::X, 5.0));
        world.spawn((
            Player,
            Facing::default(),
            actor,
            KinematicCharacterController::default(),
        ));

        world
            .run_system_once(player_movement)
            .expect("system run failed");

        let translation = world
            .query::<&KinematicCharacterController>()
            .iter(&world)
            .next()
            .unwrap()
            .translation
            .unwrap();
        // Dash velocity 20 to the right for 0.1s, input ignored.
        assert!((translation.x - 2.0).abs() < 1e-5);
        assert_eq!(translation.y, 0.0);
    }

    #[test]
    fn dead_player_does_not_move() {
        let mut world = world_with_time(0.1);
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);

        let mut actor = Actor::new(1);
        actor.apply_damage(1);
        world.spawn((
            Player,
            Facing::default(),
            actor,
            KinematicCharacterController::default(),
        ));

        world
            .run_system_once(player_movement)
            .expect("system run failed");

        let controller = world
            .query::<&KinematicCharacterController>()
            .iter(&world)
            .next()
            .unwrap();
        assert!(controller.translation.is_none());
    }
}
