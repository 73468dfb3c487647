//! Bird kinematics, in per-frame units.

use crate::config::PhysicsSettings;
use crate::world::{Bird, GameWorld};

/// Result of a single gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    InBounds,
    /// The bird dropped below the bottom of the board.
    OutOfBounds,
}

/// Accelerates the bird, moves it, and clamps it at the ceiling. There is no floor; dropping
/// below the board is reported to the caller.
pub fn apply_gravity(bird: &mut Bird, settings: &PhysicsSettings) -> Fall {
    bird.velocity += settings.gravity;
    bird.y = (bird.y + bird.velocity).max(0.0);

    if bird.y > settings.board_height {
        Fall::OutOfBounds
    } else {
        Fall::InBounds
    }
}

/// Replaces whatever velocity the bird had with the upward impulse. Ignored once the level has
/// ended. Returns whether the flap was applied.
pub fn flap(world: &mut GameWorld, settings: &PhysicsSettings) -> bool {
    if !world.is_running() {
        return false;
    }

    world.user_interacted = true;
    world.bird.velocity = settings.flap_velocity;
    true
}
