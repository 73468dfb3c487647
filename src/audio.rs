//! Victory cue. The handle is queued with the textures and held in `AudioHandles` so the decoded
//! clip stays cached until the level is won.
//!
//! Browsers refuse to start audio before a user gesture, so the cue only plays if the player has
//! interacted with the page at least once.

use bevy::prelude::*;

use crate::state::GameState;
use crate::world::GameWorld;

/// Registers the cue loading system and plays the cue on a win.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioHandles>()
            .add_systems(OnEnter(GameState::Loading), load_audio_handles)
            .add_systems(OnEnter(GameState::Won), play_victory_cue);
    }
}

/// Resource holding the victory clip handle. The handle keeps the decoded audio alive in Bevy's
/// asset storage until the cue is played.
#[derive(Resource, Default)]
pub struct AudioHandles {
    pub victory: Option<Handle<AudioSource>>,
}

/// Marker on the one-shot audio entity; it despawns itself when playback ends.
#[derive(Component)]
pub struct VictoryCue;

fn load_audio_handles(asset_server: Res<AssetServer>, mut handles: ResMut<AudioHandles>) {
    handles.victory = Some(asset_server.load("audio/victory.ogg"));

    info!("Queued victory cue.");
}

fn play_victory_cue(mut commands: Commands, handles: Res<AudioHandles>, world: Res<GameWorld>) {
    if !world.user_interacted {
        debug!("Skipping victory cue; no user interaction yet.");
        return;
    }

    let Some(source) = handles.victory.clone() else {
        return;
    };

    commands.spawn((
        Name::new("VictoryCue"),
        VictoryCue,
        AudioBundle {
            source,
            settings: PlaybackSettings::DESPAWN,
        },
    ));
}
