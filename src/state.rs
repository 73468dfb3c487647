//! Bevy-side game state. The level's own `Phase` lives in `GameWorld`; `GameState` mirrors it so
//! systems can be gated with `in_state` and on-enter schedules fire exactly once per transition.

use bevy::prelude::*;

use crate::world::Phase;

/// High-level state machine for the app.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    GameOver,
    Won,
}

impl From<Phase> for GameState {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Running => GameState::Playing,
            Phase::Over => GameState::GameOver,
            Phase::Won => GameState::Won,
        }
    }
}

/// Named system sets. `Input` runs every rendered frame; `Spawn` and `Frame` run on the fixed
/// tick, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Spawn,
    Frame,
}
