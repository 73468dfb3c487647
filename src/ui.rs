//! Score HUD, the "GAME OVER" banner and the celebration overlay.
//!
//! The HUD is laid out inside a node the size of the board, centered in the window, so text
//! positions can be given in board pixels. UI entities are part of Bevy's ECS; despawning the root
//! drops every child with it.

use bevy::prelude::*;

use crate::assets::GameTextures;
use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, GAME_OVER_TEXT_POSITION, HUD_FONT_SIZE, SCORE_TEXT_POSITION,
};
use crate::state::GameState;
use crate::world::{GameWorld, Phase};

pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Registers HUD spawn/update systems and the end-of-level overlays.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_hud)
            .add_systems(
                Update,
                update_score_text.run_if(resource_changed::<GameWorld>),
            )
            .add_systems(OnEnter(GameState::GameOver), show_game_over)
            .add_systems(
                OnEnter(GameState::Won),
                (despawn_hud, spawn_congrats_overlay),
            );
    }
}

#[derive(Component)]
struct Hud;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct GameOverText;

#[derive(Component)]
struct CongratsOverlay;

/// Formats the score the way a script engine prints numbers: whole values without a fraction,
/// halves as `.5`.
pub fn format_score(score: f32) -> String {
    format!("{}", score)
}

/// The banner shown over a frozen board. Only a crash before the destination earns one.
pub fn game_over_banner(world: &GameWorld) -> Option<&'static str> {
    (world.phase == Phase::Over && world.bird.x() < world.destination.x).then_some(GAME_OVER_TEXT)
}

/// Text in the HUD is placed by its baseline, like canvas text.
fn top_for_baseline(baseline: f32) -> Val {
    Val::Px((baseline - HUD_FONT_SIZE).max(0.0))
}

fn hud_style() -> TextStyle {
    TextStyle {
        font_size: HUD_FONT_SIZE,
        color: Color::WHITE,
        ..default()
    }
}

fn spawn_hud(mut commands: Commands, world: Res<GameWorld>) {
    commands
        .spawn((
            Hud,
            Name::new("Hud"),
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn(NodeBundle {
                style: Style {
                    width: Val::Px(BOARD_WIDTH),
                    height: Val::Px(BOARD_HEIGHT),
                    ..default()
                },
                ..default()
            })
            .with_children(|board| {
                board.spawn((
                    ScoreText,
                    TextBundle::from_section(format_score(world.score), hud_style()).with_style(
                        Style {
                            position_type: PositionType::Absolute,
                            left: Val::Px(SCORE_TEXT_POSITION.x),
                            top: top_for_baseline(SCORE_TEXT_POSITION.y),
                            ..default()
                        },
                    ),
                ));
                board.spawn((
                    GameOverText,
                    TextBundle::from_section("", hud_style()).with_style(Style {
                        position_type: PositionType::Absolute,
                        left: Val::Px(GAME_OVER_TEXT_POSITION.x),
                        top: top_for_baseline(GAME_OVER_TEXT_POSITION.y),
                        ..default()
                    }),
                ));
            });
        });
}

fn update_score_text(world: Res<GameWorld>, mut query: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut query {
        let score = format_score(world.score);
        if text.sections[0].value != score {
            text.sections[0].value = score;
        }
    }
}

fn show_game_over(world: Res<GameWorld>, mut query: Query<&mut Text, With<GameOverText>>) {
    let Some(banner) = game_over_banner(&world) else {
        return;
    };

    for mut text in &mut query {
        text.sections[0].value = banner.to_owned();
    }
}

fn despawn_hud(mut commands: Commands, query: Query<Entity, With<Hud>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Full-screen celebration shown in place of the board after a win.
fn spawn_congrats_overlay(mut commands: Commands, textures: Res<GameTextures>) {
    commands
        .spawn((
            CongratsOverlay,
            Name::new("CongratsOverlay"),
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn(ImageBundle {
                image: UiImage::new(textures.congrats.clone()),
                style: Style {
                    width: Val::Vw(80.0),
                    max_width: Val::Px(BOARD_WIDTH),
                    height: Val::Auto,
                    ..default()
                },
                ..default()
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_prints_like_a_script_number() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(12.5), "12.5");
    }

    #[test]
    fn banner_only_after_a_crash() {
        let mut world = GameWorld::new();
        assert_eq!(game_over_banner(&world), None);

        world.phase = Phase::Over;
        assert_eq!(game_over_banner(&world), Some(GAME_OVER_TEXT));

        world.phase = Phase::Won;
        assert_eq!(game_over_banner(&world), None);
    }

    #[test]
    fn no_banner_once_past_the_destination() {
        let mut world = GameWorld::new();
        world.phase = Phase::Over;
        world.destination.x = world.bird.x();
        assert_eq!(game_over_banner(&world), None);
    }

    #[test]
    fn score_text_follows_the_world() {
        let mut app = App::new();
        let mut world = GameWorld::new();
        world.score = 2.5;
        app.insert_resource(world)
            .add_systems(Update, update_score_text);
        let entity = app
            .world_mut()
            .spawn((ScoreText, Text::from_section("0", TextStyle::default())))
            .id();

        app.update();

        let text = app.world().get::<Text>(entity).map(|t| t.sections[0].value.clone());
        assert_eq!(text.as_deref(), Some("2.5"));
    }

    #[test]
    fn game_over_text_appears_on_crash() {
        let mut app = App::new();
        let mut world = GameWorld::new();
        world.phase = Phase::Over;
        app.insert_resource(world).add_systems(Update, show_game_over);
        let entity = app
            .world_mut()
            .spawn((GameOverText, Text::from_section("", TextStyle::default())))
            .id();

        app.update();

        let text = app.world().get::<Text>(entity).map(|t| t.sections[0].value.clone());
        assert_eq!(text.as_deref(), Some(GAME_OVER_TEXT));
    }

    #[test]
    fn winning_swaps_the_board_for_the_overlay() {
        use bevy::state::app::StatesPlugin;

        use crate::render::{BoardRenderPlugin, BoardSprite};
        use crate::world::{Pipe, PipeSide};

        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<GameState>()
            .insert_resource(GameWorld::new())
            .init_resource::<GameTextures>()
            .add_plugins((BoardRenderPlugin, HudPlugin));

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Playing);
        app.update();

        app.world_mut()
            .resource_mut::<GameWorld>()
            .pipes
            .push_back(Pipe {
                x: 200.0,
                y: 0.0,
                width: 64.0,
                height: 500.0,
                side: PipeSide::Top,
                passed: false,
            });
        app.update();

        let mut hud = app.world_mut().query_filtered::<Entity, With<Hud>>();
        assert_eq!(hud.iter(app.world()).count(), 1);

        app.world_mut().resource_mut::<GameWorld>().phase = Phase::Won;
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Won);
        app.update();

        let mut board = app
            .world_mut()
            .query_filtered::<&Visibility, With<BoardSprite>>();
        let visibilities: Vec<Visibility> = board.iter(app.world()).copied().collect();
        // Background, bird, two landmarks, two captions and the pipe.
        assert_eq!(visibilities.len(), 7);
        assert!(visibilities.iter().all(|v| *v == Visibility::Hidden));

        let mut overlay = app
            .world_mut()
            .query_filtered::<Entity, With<CongratsOverlay>>();
        assert_eq!(overlay.iter(app.world()).count(), 1);

        let mut hud = app.world_mut().query_filtered::<Entity, With<Hud>>();
        assert_eq!(hud.iter(app.world()).count(), 0);
    }
}
