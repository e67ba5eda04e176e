//! In-game HUD - health, score, and ability cooldown display.

use bevy::prelude::*;

use crate::actor::Actor;
use crate::core::{GameState, InRun, Score};
use crate::player::Player;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health readout.
#[derive(Component)]
pub struct HealthText;

/// Marker for the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the ability cooldown bar fill.
#[derive(Component)]
pub struct CooldownBar;

const COOLDOWN_READY: Color = Color::srgb(0.3, 0.85, 0.9);
const COOLDOWN_CHARGING: Color = Color::srgb(0.4, 0.4, 0.45);

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(InRun), spawn_hud)
        .add_systems(OnExit(InRun), cleanup_hud)
        .add_systems(
            Update,
            (update_health_text, update_score_text, update_cooldown_bar)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Health readout
            parent.spawn((
                Text::new("Health 0/0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.3, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(4.0)),
                    ..default()
                },
                HealthText,
            ));

            // Score readout
            parent.spawn((
                Text::new("Score 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
                ScoreText,
            ));

            // Ability cooldown bar
            parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(COOLDOWN_READY),
                        CooldownBar,
                    ));
                });
        });
}

/// Update the health readout from the player's vitals.
fn update_health_text(
    player: Query<&Actor, With<Player>>,
    mut text: Query<&mut Text, With<HealthText>>,
) {
    let (Ok(actor), Ok(mut text)) = (player.get_single(), text.get_single_mut()) else {
        return;
    };
    text.0 = format!("Health {}/{}", actor.health(), actor.max_health());
}

/// Update the score readout.
fn update_score_text(score: Res<Score>, mut text: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = text.get_single_mut() else {
        return;
    };
    text.0 = format!("Score {}", score.0);
}

/// Fill the cooldown bar toward ready, recoloring when it gets there.
fn update_cooldown_bar(
    player: Query<&Actor, With<Player>>,
    mut bar: Query<(&mut Node, &mut BackgroundColor), With<CooldownBar>>,
) {
    let (Ok(actor), Ok((mut node, mut color))) = (player.get_single(), bar.get_single_mut())
    else {
        return;
    };

    let fraction = if actor.cooldown() > 0.0 {
        1.0 - actor.cooldown_remaining() / actor.cooldown()
    } else {
        1.0
    };
    node.width = Val::Percent(fraction * 100.0);
    color.0 = if actor.can_activate() {
        COOLDOWN_READY
    } else {
        COOLDOWN_CHARGING
    };
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
