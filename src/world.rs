//! Entity model for the level. Everything the frame update touches lives in one owned
//! `GameWorld` resource; systems borrow it through the ECS instead of sharing globals.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::collision::{Bounded, Hitbox};
use crate::config::{
    BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, BIRD_Y, DEPARTURE_START_X, DESTINATION_START_X,
    SCRIPTED_SPRITE_Y,
};

/// Where the level currently stands. `Over` and `Won` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Running,
    Over,
    Won,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// The player. Only `y` and `velocity` change during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
        }
    }

    /// Horizontal position. Fixed for the lifetime of the bird; the world scrolls past it.
    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(BIRD_X, BIRD_Y)
    }
}

impl Bounded for Bird {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }
}

/// Which half of a pair a pipe is; picks the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeSide {
    Top,
    Bottom,
}

/// One obstacle rectangle. Pipes always come in top/bottom pairs around a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub side: PipeSide,
    /// Set once the bird has cleared this pipe so it scores only once.
    pub passed: bool,
}

impl Pipe {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

impl Bounded for Pipe {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    /// Farewell sign that scrolls away at the start of the level.
    Departure,
    /// End-of-level marker. Reaching it wins the game.
    Destination,
}

/// How a scripted sprite is drawn relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteLayout {
    pub image_offset: Vec2,
    pub image_size: Vec2,
    pub caption_offset: Vec2,
}

/// Decorative sprite that moves at scroll speed and ignores physics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSprite {
    pub landmark: Landmark,
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub caption: &'static str,
    pub layout: SpriteLayout,
}

impl ScriptedSprite {
    pub fn departure() -> Self {
        Self {
            landmark: Landmark::Departure,
            x: DEPARTURE_START_X,
            y: SCRIPTED_SPRITE_Y,
            active: true,
            caption: "Good luck!",
            layout: SpriteLayout {
                image_offset: Vec2::new(-200.0, 230.0),
                image_size: Vec2::splat(150.0),
                caption_offset: Vec2::new(-180.0, 210.0),
            },
        }
    }

    pub fn destination() -> Self {
        Self {
            landmark: Landmark::Destination,
            x: DESTINATION_START_X,
            y: SCRIPTED_SPRITE_Y,
            active: true,
            caption: "ようこそ!🇯🇵",
            layout: SpriteLayout {
                image_offset: Vec2::new(0.0, 290.0),
                image_size: Vec2::splat(100.0),
                caption_offset: Vec2::new(0.0, 270.0),
            },
        }
    }

    /// Top-left corner of the image in board coordinates.
    pub fn image_origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.layout.image_offset
    }

    /// Baseline-left point of the caption in board coordinates.
    pub fn caption_origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.layout.caption_offset
    }
}

/// The whole mutable state of a play session.
#[derive(Resource, Debug, Clone)]
pub struct GameWorld {
    pub bird: Bird,
    /// Oldest pipe first.
    pub pipes: VecDeque<Pipe>,
    pub departure: ScriptedSprite,
    pub destination: ScriptedSprite,
    pub score: f32,
    pub phase: Phase,
    /// One-way latch flipped by the first flap. Browsers refuse audio before a user gesture.
    pub user_interacted: bool,
    pub pairs_spawned: u32,
}

impl GameWorld {
    pub fn new() -> Self {
        Self {
            bird: Bird::default(),
            pipes: VecDeque::new(),
            departure: ScriptedSprite::departure(),
            destination: ScriptedSprite::destination(),
            score: 0.0,
            phase: Phase::Running,
            user_interacted: false,
            pairs_spawned: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.phase.is_terminal()
    }

    pub fn landmark(&self, landmark: Landmark) -> &ScriptedSprite {
        match landmark {
            Landmark::Departure => &self.departure,
            Landmark::Destination => &self.destination,
        }
    }

    /// True once the bird has flown up to the destination marker.
    pub fn reached_destination(&self) -> bool {
        self.bird.x() >= self.destination.x
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
