//! Combat systems - actor ticking, attacks, contact damage, deaths.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{BaseColor, DeathDelay};
use crate::actor::Actor;
use crate::core::{DamageEvent, DeathEvent, GameState};
use crate::enemies::{Enemy, EnemyStats};
use crate::player::{CharacterSheet, Facing, Player};

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Input,
    Tick,
    Damage,
    Feedback,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // System ordering
        .configure_sets(
            Update,
            (
                CombatSet::Input,
                CombatSet::Tick,
                CombatSet::Damage,
                CombatSet::Feedback,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        // Input systems
        .add_systems(Update, combat_input.in_set(CombatSet::Input))
        // Per-tick state machine advancement
        .add_systems(Update, advance_actors.in_set(CombatSet::Tick))
        // Damage systems
        .add_systems(
            Update,
            (resolve_contacts, apply_damage, check_deaths, game_over_after_delay)
                .chain()
                .in_set(CombatSet::Damage),
        )
        // Feedback systems
        .add_systems(
            Update,
            (hit_flash_tint, invincibility_blink)
                .chain()
                .in_set(CombatSet::Feedback),
        );
}

/// Handle attack and ability input from the player.
///
/// Space opens the attack window; Shift fires the special move. Both
/// are silent no-ops when the actor isn't in a state to accept them.
fn combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    sheet: Res<CharacterSheet>,
    mut query: Query<(&mut Actor, &Facing), With<Player>>,
) {
    let Ok((mut actor, facing)) = query.get_single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Space) && actor.attack() {
        info!("{} attacks", sheet.0.name);
    }

    if keyboard.just_pressed(KeyCode::ShiftLeft)
        && actor.activate_ability(facing.0, sheet.0.move_speed)
    {
        info!("{} uses their ability", sheet.0.name);
    }
}

/// Advance every actor's timers by one simulation step.
///
/// The fixed order inside `Actor::advance` (invincibility, attack
/// window, hit flash, ability) is the only place timers are mutated.
fn advance_actors(time: Res<Time>, mut query: Query<&mut Actor>) {
    for mut actor in query.iter_mut() {
        actor.advance(time.delta_secs());
    }
}

/// Resolve player/enemy contact starts.
///
/// An attacking player damages the enemy; otherwise the enemy's touch
/// damages the player, unless the player is invincible, in which case
/// the contact trades nothing.
fn resolve_contacts(
    mut collisions: EventReader<CollisionEvent>,
    sheet: Res<CharacterSheet>,
    player_query: Query<&Actor, With<Player>>,
    enemy_query: Query<&EnemyStats, With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        // Find which side is the player and which the enemy.
        let (player_entity, enemy_entity) = if player_query.contains(*a) && enemy_query.contains(*b)
        {
            (*a, *b)
        } else if player_query.contains(*b) && enemy_query.contains(*a) {
            (*b, *a)
        } else {
            continue;
        };

        let Ok(player_actor) = player_query.get(player_entity) else {
            continue;
        };
        let Ok(enemy_stats) = enemy_query.get(enemy_entity) else {
            continue;
        };

        // Attacking wins: the attack's own i-frames must not cancel
        // the hit on the enemy.
        if player_actor.is_attacking() {
            damage_events.send(DamageEvent {
                target: enemy_entity,
                source: player_entity,
                amount: sheet.0.damage,
            });
        } else if !player_actor.is_invincible() {
            damage_events.send(DamageEvent {
                target: player_entity,
                source: enemy_entity,
                amount: enemy_stats.damage,
            });
        }
    }
}

/// Apply queued damage to actors.
///
/// `Actor::apply_damage` is the single gate: invincible or dead
/// targets shrug the event off.
fn apply_damage(
    mut damage_events: EventReader<DamageEvent>,
    mut actors: Query<&mut Actor>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok(mut actor) = actors.get_mut(event.target) else {
            continue;
        };

        if !actor.apply_damage(event.amount) {
            continue;
        }

        info!(
            "Hit for {}: {}/{}",
            event.amount,
            actor.health(),
            actor.max_health()
        );

        if actor.is_dead() {
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// React to deaths: the player gets a game-over delay, enemies are
/// handled by the enemy systems.
fn check_deaths(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    enemy_query: Query<(), With<Enemy>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died");
            commands.entity(event.entity).insert(DeathDelay::new(1.5));
        } else if enemy_query.get(event.entity).is_ok() {
            // Enemies despawn via their own death delay systems.
        }
    }
}

/// Move to the game-over screen once the player's death delay runs out.
fn game_over_after_delay(
    time: Res<Time>,
    mut query: Query<&mut DeathDelay, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(mut delay) = query.get_single_mut() else {
        return;
    };

    if delay.0.tick(time.delta()).just_finished() {
        next_state.set(GameState::GameOver);
    }
}

const FLASH_TINT: Color = Color::srgb(0.95, 0.3, 0.25);

/// Tint sprites red while their actor's hit-flash window is open,
/// restoring the saved color when it closes.
fn hit_flash_tint(
    mut commands: Commands,
    mut query: Query<(Entity, &Actor, &mut Sprite, Option<&BaseColor>)>,
) {
    for (entity, actor, mut sprite, base) in query.iter_mut() {
        match (actor.is_hit_flashing(), base) {
            (true, None) => {
                commands.entity(entity).insert(BaseColor(sprite.color));
                sprite.color = FLASH_TINT;
            }
            (false, Some(base)) => {
                sprite.color = base.0;
                commands.entity(entity).remove::<BaseColor>();
            }
            _ => {}
        }
    }
}

/// Blink sprites while their actor is invincible, restore them after.
fn invincibility_blink(time: Res<Time>, mut query: Query<(&Actor, &mut Sprite)>) {
    for (actor, mut sprite) in query.iter_mut() {
        let alpha = if actor.is_invincible() {
            // 10 Hz square-wave blink between full and faded.
            if (time.elapsed_secs() * 10.0) % 2.0 > 1.0 {
                1.0
            } else {
                0.3
            }
        } else {
            1.0
        };
        sprite.color.set_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use std::time::Duration;

    fn world_with_time(dt: f32) -> World {
        let mut world = World::new();
        let mut time: Time = Time::default();
        time.advance_by(Duration::from_secs_f32(dt));
        world.insert_resource(time);
        world
    }

    #[test]
    fn advance_ticks_every_actor() {
        let mut world = world_with_time(0.6);

        let mut hit = Actor::new(3);
        hit.apply_damage(1);
        let entity = world.spawn(hit).id();
        world.spawn(Actor::new(2));

        world
            .run_system_once(advance_actors)
            .expect("system run failed");

        let actor = world.get::<Actor>(entity).unwrap();
        // Hit flash (0.5s) expired, invincibility (1.0s) still up.
        assert!(!actor.is_hit_flashing());
        assert!(actor.is_invincible());
    }

    #[test]
    fn damage_events_apply_and_report_deaths() {
        let mut world = World::new();
        world.insert_resource(Events::<DamageEvent>::default());
        world.insert_resource(Events::<DeathEvent>::default());

        let source = world.spawn_empty().id();
        let target = world.spawn(Actor::new(2)).id();
        world.send_event(DamageEvent {
            target,
            source,
            amount: 2,
        });

        world
            .run_system_once(apply_damage)
            .expect("system run failed");

        assert!(world.get::<Actor>(target).unwrap().is_dead());
        let deaths = world.resource::<Events<DeathEvent>>();
        let mut cursor = deaths.get_cursor();
        let death = cursor.read(deaths).next().expect("death event");
        assert_eq!(death.entity, target);
        assert_eq!(death.killed_by, Some(source));
    }

    #[test]
    fn invincible_target_reports_no_death() {
        let mut world = World::new();
        world.insert_resource(Events::<DamageEvent>::default());
        world.insert_resource(Events::<DeathEvent>::default());

        let source = world.spawn_empty().id();
        let mut actor = Actor::new(2);
        actor.apply_damage(1); // now invincible at 1 hp
        let target = world.spawn(actor).id();

        world.send_event(DamageEvent {
            target,
            source,
            amount: 5,
        });
        world
            .run_system_once(apply_damage)
            .expect("system run failed");

        let actor = world.get::<Actor>(target).unwrap();
        assert_eq!(actor.health(), 1);
        assert!(!actor.is_dead());

        let deaths = world.resource::<Events<DeathEvent>>();
        let mut cursor = deaths.get_cursor();
        assert!(cursor.read(deaths).next().is_none());
    }

    fn world_for_contacts() -> (World, Entity, Entity) {
        let mut world = World::new();
        world.insert_resource(Events::<CollisionEvent>::default());
        world.insert_resource(Events::<DamageEvent>::default());
        world.insert_resource(CharacterSheet::default());

        let player = world.spawn((Player, Actor::new(3))).id();
        let enemy = world.spawn((Enemy, EnemyStats::default())).id();
        (world, player, enemy)
    }

    fn sent_damage(world: &World) -> Vec<(Entity, Entity, u32)> {
        let events = world.resource::<Events<DamageEvent>>();
        let mut cursor = events.get_cursor();
        cursor
            .read(events)
            .map(|e| (e.target, e.source, e.amount))
            .collect()
    }

    #[test]
    fn enemy_touch_damages_the_player() {
        let (mut world, player, enemy) = world_for_contacts();
        world.send_event(CollisionEvent::Started(
            enemy,
            player,
            CollisionEventFlags::empty(),
        ));

        world
            .run_system_once(resolve_contacts)
            .expect("system run failed");

        // EnemyStats::default() contact damage is 1.
        assert_eq!(sent_damage(&world), vec![(player, enemy, 1)]);
    }

    #[test]
    fn attacking_player_damages_the_enemy() {
        let (mut world, player, enemy) = world_for_contacts();
        assert!(world.get_mut::<Actor>(player).unwrap().attack());
        world.send_event(CollisionEvent::Started(
            player,
            enemy,
            CollisionEventFlags::empty(),
        ));

        world
            .run_system_once(resolve_contacts)
            .expect("system run failed");

        // The attack's own i-frames must not cancel the hit.
        assert_eq!(sent_damage(&world), vec![(enemy, player, 1)]);
    }

    #[test]
    fn invincible_player_trades_nothing() {
        let (mut world, player, enemy) = world_for_contacts();
        world.get_mut::<Actor>(player).unwrap().apply_damage(1);
        world.send_event(CollisionEvent::Started(
            enemy,
            player,
            CollisionEventFlags::empty(),
        ));

        world
            .run_system_once(resolve_contacts)
            .expect("system run failed");

        assert!(sent_damage(&world).is_empty());
    }

    #[test]
    fn hit_flash_tints_and_restores() {
        let mut world = World::new();

        let mut actor = Actor::new(3);
        actor.apply_damage(1); // opens the flash window
        let base = Color::srgb(0.3, 0.8, 0.9);
        let entity = world
            .spawn((
                actor,
                Sprite {
                    color: base,
                    ..Default::default()
                },
            ))
            .id();

        world
            .run_system_once(hit_flash_tint)
            .expect("system run failed");
        world.flush();
        assert_eq!(world.get::<Sprite>(entity).unwrap().color, FLASH_TINT);
        assert!(world.get::<BaseColor>(entity).is_some());

        // Flash window (0.5s) expires; color comes back.
        world.get_mut::<Actor>(entity).unwrap().advance(0.6);
        world
            .run_system_once(hit_flash_tint)
            .expect("system run failed");
        world.flush();
        assert_eq!(world.get::<Sprite>(entity).unwrap().color, base);
        assert!(world.get::<BaseColor>(entity).is_none());
    }

    #[test]
    fn player_death_gets_a_delay() {
        let mut world = World::new();
        world.insert_resource(Events::<DeathEvent>::default());

        let player = world.spawn(Player).id();
        world.send_event(DeathEvent {
            entity: player,
            killed_by: None,
        });

        world
            .run_system_once(check_deaths)
            .expect("system run failed");
        // Apply the queued insert before asserting.
        world.flush();

        assert!(world.get::<DeathDelay>(player).is_some());
    }
}
