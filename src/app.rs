//! High-level plugin composition.
//!
//! `FlightPlugin` registers every gameplay plugin, the shared level resources, and the ordering of
//! the fixed-tick systems. The level itself only advances while the game is `Playing`; entering
//! either terminal state stops the frame and spawn systems for good.

use bevy::prelude::*;

use crate::assets::GameAssetsPlugin;
use crate::audio::GameAudioPlugin;
use crate::camera::CameraPlugin;
use crate::config::{PhysicsSettings, FRAMES_PER_SECOND};
use crate::frame::FramePlugin;
use crate::input::FlapInputPlugin;
use crate::render::BoardRenderPlugin;
use crate::spawner::SpawnerPlugin;
use crate::state::{GameSet, GameState};
use crate::ui::HudPlugin;
use crate::world::GameWorld;

/// Bundles every gameplay plugin into a single unit that can be added to the Bevy `App`.
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<PhysicsSettings>()
            .init_resource::<GameWorld>()
            // Per-frame constants are tuned for this rate, so the level plays the same on any
            // display refresh rate.
            .insert_resource(Time::<Fixed>::from_hz(FRAMES_PER_SECOND))
            .add_plugins((
                GameAssetsPlugin,  // Texture loading, Loading -> Playing.
                GameAudioPlugin,   // Victory cue.
                CameraPlugin,      // Board-fitting camera.
                FlapInputPlugin,   // Touch / key flaps.
                SpawnerPlugin,     // Timed pipe pairs.
                FramePlugin,       // The per-frame update.
                BoardRenderPlugin, // Sprites.
                HudPlugin,         // Score, banner, overlay.
            ))
            // Spawning and the frame update share the world; chaining keeps each tick's
            // writes in a fixed order.
            .configure_sets(
                FixedUpdate,
                (GameSet::Spawn, GameSet::Frame)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .configure_sets(Update, GameSet::Input.run_if(in_state(GameState::Playing)));
    }
}
