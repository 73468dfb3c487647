//! Draws the board from a read-only view of `GameWorld`.
//!
//! Nothing here mutates the level. Every rendered frame, sprite transforms are rewritten from the
//! world's board coordinates (top-left origin, y down) into Bevy world space (board centered on the
//! origin, y up).

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::assets::GameTextures;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, CAPTION_FONT_SIZE};
use crate::state::GameState;
use crate::world::{GameWorld, Landmark, ScriptedSprite};

const BACKGROUND_Z: f32 = 0.0;
const LANDMARK_Z: f32 = 1.0;
const CAPTION_Z: f32 = 1.5;
const BIRD_Z: f32 = 2.0;
// Pipes are painted over the bird.
const PIPE_Z: f32 = 3.0;

/// Registers the systems that spawn, sync and finally hide the board sprites.
pub struct BoardRenderPlugin;

impl Plugin for BoardRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_board)
            .add_systems(
                Update,
                (sync_bird, sync_pipes, sync_landmarks).run_if(board_visible),
            )
            .add_systems(OnEnter(GameState::Won), hide_board);
    }
}

/// Everything drawn on the board. Hidden as a whole when the level is won.
#[derive(Component)]
pub struct BoardSprite;

/// Marker on the bird sprite so its transform can follow `GameWorld::bird`.
#[derive(Component)]
pub struct BirdSprite;

/// Marker on pooled pipe sprites.
#[derive(Component)]
pub struct PipeSprite;

/// Image of a scripted landmark.
#[derive(Component)]
pub struct LandmarkSprite(pub Landmark);

/// Caption text floating above a landmark.
#[derive(Component)]
pub struct LandmarkCaption(pub Landmark);

/// The board is drawn while playing and stays on screen, frozen, after a crash.
fn board_visible(state: Res<State<GameState>>) -> bool {
    matches!(state.get(), GameState::Playing | GameState::GameOver)
}

/// Center of a board-space rectangle, in world space.
pub fn board_rect_to_world(origin: Vec2, size: Vec2) -> Vec2 {
    board_point_to_world(origin + size * 0.5)
}

pub fn board_point_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x - BOARD_WIDTH * 0.5, BOARD_HEIGHT * 0.5 - point.y)
}

fn spawn_board(mut commands: Commands, textures: Res<GameTextures>, world: Res<GameWorld>) {
    commands.spawn((
        Name::new("Background"),
        BoardSprite,
        SpriteBundle {
            texture: textures.background.clone(),
            sprite: Sprite {
                custom_size: Some(Vec2::new(BOARD_WIDTH, BOARD_HEIGHT)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
            ..default()
        },
    ));

    let bird = &world.bird;
    let bird_size = Vec2::new(bird.width, bird.height);
    commands.spawn((
        Name::new("Bird"),
        BoardSprite,
        BirdSprite,
        SpriteBundle {
            texture: textures.bird.clone(),
            sprite: Sprite {
                custom_size: Some(bird_size),
                ..default()
            },
            transform: Transform::from_translation(
                board_rect_to_world(Vec2::new(bird.x(), bird.y), bird_size).extend(BIRD_Z),
            ),
            ..default()
        },
    ));

    for sprite in [&world.departure, &world.destination] {
        spawn_landmark(&mut commands, &textures, sprite);
    }
}

fn spawn_landmark(commands: &mut Commands, textures: &GameTextures, sprite: &ScriptedSprite) {
    let landmark = sprite.landmark;
    let size = sprite.layout.image_size;

    commands.spawn((
        Name::new(format!("{:?}Landmark", landmark)),
        BoardSprite,
        LandmarkSprite(landmark),
        SpriteBundle {
            texture: textures.landmark(landmark),
            sprite: Sprite {
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_translation(
                board_rect_to_world(sprite.image_origin(), size).extend(LANDMARK_Z),
            ),
            ..default()
        },
    ));

    let color = match landmark {
        Landmark::Departure => Color::WHITE,
        Landmark::Destination => Color::srgb(0.85, 0.9, 1.0),
    };
    commands.spawn((
        Name::new(format!("{:?}Caption", landmark)),
        BoardSprite,
        LandmarkCaption(landmark),
        Text2dBundle {
            text: Text::from_section(
                sprite.caption,
                TextStyle {
                    font_size: CAPTION_FONT_SIZE,
                    color,
                    ..default()
                },
            ),
            // Captions are positioned by their baseline-left point.
            text_anchor: Anchor::BottomLeft,
            transform: Transform::from_translation(
                board_point_to_world(sprite.caption_origin()).extend(CAPTION_Z),
            ),
            ..default()
        },
    ));
}

fn sync_bird(world: Res<GameWorld>, mut query: Query<&mut Transform, With<BirdSprite>>) {
    let bird = &world.bird;
    let translation =
        board_rect_to_world(Vec2::new(bird.x(), bird.y), Vec2::new(bird.width, bird.height));

    for mut transform in &mut query {
        transform.translation = translation.extend(BIRD_Z);
    }
}

/// Pipe entities are pooled: one per pipe in the world, reassigned in queue order each frame.
fn sync_pipes(
    mut commands: Commands,
    world: Res<GameWorld>,
    textures: Res<GameTextures>,
    mut query: Query<(Entity, &mut Transform, &mut Handle<Image>), With<PipeSprite>>,
) {
    let mut pooled = query.iter_mut();

    for pipe in &world.pipes {
        let size = Vec2::new(pipe.width, pipe.height);
        let translation = board_rect_to_world(Vec2::new(pipe.x, pipe.y), size).extend(PIPE_Z);
        let texture = textures.pipe(pipe.side);

        if let Some((_, mut transform, mut handle)) = pooled.next() {
            transform.translation = translation;
            if *handle != texture {
                *handle = texture;
            }
            continue;
        }

        commands.spawn((
            Name::new("Pipe"),
            BoardSprite,
            PipeSprite,
            SpriteBundle {
                texture,
                sprite: Sprite {
                    custom_size: Some(size),
                    ..default()
                },
                transform: Transform::from_translation(translation),
                ..default()
            },
        ));
    }

    for (entity, _, _) in pooled {
        commands.entity(entity).despawn();
    }
}

fn sync_landmarks(
    world: Res<GameWorld>,
    mut images: Query<
        (&LandmarkSprite, &mut Transform, &mut Visibility),
        Without<LandmarkCaption>,
    >,
    mut captions: Query<(&LandmarkCaption, &mut Transform, &mut Visibility), Without<LandmarkSprite>>,
) {
    for (LandmarkSprite(landmark), mut transform, mut visibility) in &mut images {
        let sprite = world.landmark(*landmark);
        transform.translation =
            board_rect_to_world(sprite.image_origin(), sprite.layout.image_size).extend(LANDMARK_Z);
        *visibility = visibility_of(sprite);
    }

    for (LandmarkCaption(landmark), mut transform, mut visibility) in &mut captions {
        let sprite = world.landmark(*landmark);
        transform.translation = board_point_to_world(sprite.caption_origin()).extend(CAPTION_Z);
        *visibility = visibility_of(sprite);
    }
}

fn visibility_of(sprite: &ScriptedSprite) -> Visibility {
    if sprite.active {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

fn hide_board(mut query: Query<&mut Visibility, With<BoardSprite>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}
