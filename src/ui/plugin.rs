//! Menu screens and UI plugin.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::core::{GameState, Score};

use super::hud::setup_hud_systems;

/// Plugin for menus and the in-game HUD.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        setup_hud_systems(app);

        app.add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_menu)
            .add_systems(OnEnter(GameState::Paused), spawn_pause_menu)
            .add_systems(OnExit(GameState::Paused), cleanup_menu)
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_menu)
            .add_systems(OnExit(GameState::GameOver), cleanup_menu)
            .add_systems(
                Update,
                handle_menu_buttons.run_if(
                    in_state(GameState::MainMenu)
                        .or(in_state(GameState::Paused))
                        .or(in_state(GameState::GameOver)),
                ),
            );
    }
}

/// Marker for the root node of the currently shown menu.
#[derive(Component)]
struct MenuRoot;

/// Marker for cameras spawned for camera-less menu screens.
#[derive(Component)]
struct MenuCamera;

/// Actions the menu buttons can trigger.
#[derive(Component, Clone, Copy)]
enum MenuButton {
    NewGame,
    Resume,
    MainMenu,
    Quit,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.35);
const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.35, 0.5);

fn spawn_main_menu(mut commands: Commands) {
    commands.spawn((Camera2d, MenuCamera, MenuRoot));

    commands
        .spawn((menu_root_node(Color::srgb(0.05, 0.04, 0.1)), MenuRoot))
        .with_children(|parent| {
            spawn_title(parent, "ONIRIC FOREST", Color::srgb(0.7, 0.6, 0.95));
            spawn_menu_button(parent, "New Game", MenuButton::NewGame);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((menu_root_node(Color::srgba(0.0, 0.0, 0.0, 0.6)), MenuRoot))
        .with_children(|parent| {
            spawn_title(parent, "PAUSED", Color::srgb(0.9, 0.9, 0.9));
            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

fn spawn_game_over_menu(mut commands: Commands, score: Res<Score>) {
    commands.spawn((Camera2d, MenuCamera, MenuRoot));

    let final_score = score.0;
    commands
        .spawn((menu_root_node(Color::srgb(0.08, 0.02, 0.03)), MenuRoot))
        .with_children(|parent| {
            spawn_title(parent, "YOU FELL ASLEEP", Color::srgb(0.85, 0.25, 0.25));
            parent.spawn((
                Text::new(format!("Final score: {final_score}")),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            spawn_menu_button(parent, "Retry", MenuButton::NewGame);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

fn menu_root_node(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(15.0),
            ..default()
        },
        BackgroundColor(background),
    )
}

fn spawn_title(parent: &mut ChildBuilder, text: &str, color: Color) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 60.0,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(40.0)),
            ..default()
        },
    ));
}

fn spawn_menu_button(parent: &mut ChildBuilder, label: &str, action: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(55.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            action,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

fn handle_menu_buttons(
    mut interactions: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut color) in interactions.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                color.0 = BUTTON_PRESSED;
                match button {
                    MenuButton::NewGame | MenuButton::Resume => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::MainMenu => {
                        next_state.set(GameState::MainMenu);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => color.0 = BUTTON_HOVER,
            Interaction::None => color.0 = BUTTON_IDLE,
        }
    }
}

fn cleanup_menu(mut commands: Commands, query: Query<Entity, With<MenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
