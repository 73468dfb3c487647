//! Flap input. Touch, Space, ArrowUp and X all flap; any key, click or touch counts as the user
//! interacting with the page.

use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;

use crate::config::PhysicsSettings;
use crate::physics::flap;
use crate::state::GameSet;
use crate::world::GameWorld;

pub const FLAP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyX];

/// Registers the flap input reader. Its set only runs while playing.
pub struct FlapInputPlugin;

impl Plugin for FlapInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, read_flap_input.in_set(GameSet::Input));
    }
}

fn read_flap_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    settings: Res<PhysicsSettings>,
    mut world: ResMut<GameWorld>,
) {
    if !world.is_running() {
        return;
    }

    let touched = touches.any_just_pressed();
    let wants_flap = touched || keyboard.any_just_pressed(FLAP_KEYS);

    if wants_flap {
        flap(&mut world, &settings);
    } else if keyboard.get_just_pressed().next().is_some()
        || mouse.get_just_pressed().next().is_some()
    {
        world.user_interacted = true;
    }
}
