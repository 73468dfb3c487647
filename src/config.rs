//! Fixed tuning for the single level. Units are board pixels, with the origin in the top-left
//! corner and y growing downwards, matching the layout of the artwork.

use bevy::prelude::*;

pub const BOARD_WIDTH: f32 = 360.0;
pub const BOARD_HEIGHT: f32 = 640.0;

pub const BIRD_WIDTH: f32 = 80.0;
pub const BIRD_HEIGHT: f32 = 50.0;
pub const BIRD_X: f32 = BOARD_WIDTH / 8.0;
pub const BIRD_Y: f32 = BOARD_HEIGHT / 2.0;

pub const PIPE_WIDTH: f32 = 64.0;
pub const PIPE_HEIGHT: f32 = 500.0;
/// Pipes enter at the right edge of the board.
pub const PIPE_X: f32 = BOARD_WIDTH;
/// Baseline the random gap offset is measured from.
pub const PIPE_Y: f32 = 0.0;
pub const OPENING_SPACE: f32 = BOARD_HEIGHT / 2.0;

/// Seconds of wall-clock time between two pipe pairs.
pub const PIPE_SPAWN_INTERVAL: f32 = 1.5;

/// Rate of the frame schedule. Every per-frame constant below assumes this rate.
pub const FRAMES_PER_SECOND: f64 = 60.0;

pub const SCROLL_VELOCITY: f32 = -2.0;
pub const GRAVITY: f32 = 0.4;
pub const FLAP_VELOCITY: f32 = -6.0;

pub const DEPARTURE_START_X: f32 = PIPE_X;
pub const DESTINATION_START_X: f32 = PIPE_X + 1000.0;
pub const SCRIPTED_SPRITE_Y: f32 = BOARD_HEIGHT / 3.0;
/// The departure sprite is retired once its anchor passes this x.
pub const DEPARTURE_EXIT_X: f32 = -100.0;

pub const SCORE_TEXT_POSITION: Vec2 = Vec2::new(5.0, 45.0);
pub const GAME_OVER_TEXT_POSITION: Vec2 = Vec2::new(5.0, 90.0);
pub const HUD_FONT_SIZE: f32 = 45.0;
pub const CAPTION_FONT_SIZE: f32 = 20.0;

/// Physics constants read by the frame update. Kept as a resource so systems and tests share a
/// single source instead of reaching for globals.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub flap_velocity: f32,
    pub scroll_velocity: f32,
    pub board_height: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,
            board_height: BOARD_HEIGHT,
        }
    }
}
