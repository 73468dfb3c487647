//! Texture loading. Queues every sprite the level draws when entering `Loading`, then waits for the
//! asset server before starting play.
//!
//! Handles live in the `GameTextures` resource, which keeps the reference-counted image data alive
//! for the whole session.
//!
//! Expected layout under `assets/` (the directory is not checked in; missing files are logged and
//! the level runs without those sprites):
//!
//! ```text
//! assets/
//!   textures/
//!     background.png   board backdrop, 360x640
//!     lawson.png       bird, drawn at 80x50
//!     toppipe.png      top pipe, drawn at 64x500
//!     bottompipe.png   bottom pipe, drawn at 64x500
//!     australia.png    departure landmark, drawn at 150x150
//!     osaka.png        destination landmark, drawn at 100x100
//!     congrats.png     win overlay
//!   audio/
//!     victory.ogg      win cue (see `audio.rs`)
//! ```

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::state::GameState;
use crate::world::{Landmark, PipeSide};

/// Registers texture loading and the `Loading -> Playing` hand-off.
pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTextures>()
            .add_systems(OnEnter(GameState::Loading), load_textures)
            .add_systems(
                Update,
                monitor_texture_loading.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Handles to every image the board and overlays draw.
#[derive(Resource, Default)]
pub struct GameTextures {
    pub background: Handle<Image>,
    pub bird: Handle<Image>,
    pub top_pipe: Handle<Image>,
    pub bottom_pipe: Handle<Image>,
    pub departure: Handle<Image>,
    pub destination: Handle<Image>,
    pub congrats: Handle<Image>,
}

impl GameTextures {
    pub fn pipe(&self, side: PipeSide) -> Handle<Image> {
        match side {
            PipeSide::Top => self.top_pipe.clone(),
            PipeSide::Bottom => self.bottom_pipe.clone(),
        }
    }

    pub fn landmark(&self, landmark: Landmark) -> Handle<Image> {
        match landmark {
            Landmark::Departure => self.departure.clone(),
            Landmark::Destination => self.destination.clone(),
        }
    }

    fn ids(&self) -> [(UntypedAssetId, &'static str); 7] {
        [
            (self.background.id().untyped(), "background"),
            (self.bird.id().untyped(), "bird"),
            (self.top_pipe.id().untyped(), "top pipe"),
            (self.bottom_pipe.id().untyped(), "bottom pipe"),
            (self.departure.id().untyped(), "departure landmark"),
            (self.destination.id().untyped(), "destination landmark"),
            (self.congrats.id().untyped(), "congratulations overlay"),
        ]
    }
}

fn load_textures(asset_server: Res<AssetServer>, mut textures: ResMut<GameTextures>) {
    *textures = GameTextures {
        background: asset_server.load("textures/background.png"),
        bird: asset_server.load("textures/lawson.png"),
        top_pipe: asset_server.load("textures/toppipe.png"),
        bottom_pipe: asset_server.load("textures/bottompipe.png"),
        departure: asset_server.load("textures/australia.png"),
        destination: asset_server.load("textures/osaka.png"),
        congrats: asset_server.load("textures/congrats.png"),
    };

    info!("Queued level textures.");
}

/// Starts play once every texture has settled. A texture that fails to load is reported and
/// skipped; the level is still playable with a missing sprite.
fn monitor_texture_loading(
    asset_server: Res<AssetServer>,
    textures: Res<GameTextures>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut failed = Vec::new();

    for (id, label) in textures.ids() {
        match asset_server.get_load_state(id) {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed(_)) => failed.push(label),
            _ => return,
        }
    }

    for label in failed {
        warn!("Unable to load the {} texture; continuing without it.", label);
    }

    next_state.set(GameState::Playing);
}
