//! Application entry point: composes the Bevy runtime, window configuration and `FlightPlugin`.
//!
//! The window is sized to the 360×640 board. On the web the game renders into `#bevy-canvas`.

mod app;
mod assets;
mod audio;
mod camera;
mod collision;
mod config;
mod frame;
mod input;
mod physics;
mod render;
mod spawner;
mod state;
mod ui;
mod world;

use app::FlightPlugin;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::render::texture::ImagePlugin;
use bevy::window::{Window, WindowResizeConstraints, WindowResolution};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() {
    // Route panics to the browser console instead of an opaque `unreachable` trap.
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    console_error_panic_hook::set_once();

    // Resizing is allowed; the camera rescales so the board always fits.
    let primary_window = Window {
        title: "Lawson's Flight".to_string(),
        resolution: WindowResolution::new(BOARD_WIDTH, BOARD_HEIGHT),
        resizable: true,
        resize_constraints: WindowResizeConstraints {
            min_width: BOARD_WIDTH / 2.0,
            min_height: BOARD_HEIGHT / 2.0,
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
        },
        canvas: cfg!(all(target_arch = "wasm32", feature = "web"))
            .then(|| "#bevy-canvas".to_owned()),
        fit_canvas_to_parent: cfg!(all(target_arch = "wasm32", feature = "web")),
        // Touch scrolling would otherwise pan the page instead of flapping.
        prevent_default_event_handling: true,
        ..default()
    };

    let mut default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(primary_window),
            ..default()
        })
        .set(ImagePlugin::default_nearest());

    #[cfg(not(target_arch = "wasm32"))]
    {
        default_plugins = default_plugins.set(AssetPlugin {
            file_path: "assets".to_owned(),
            watch_for_changes_override: Some(true),
            ..default()
        });
    }

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        default_plugins = default_plugins.set(AssetPlugin {
            file_path: "assets".to_owned(),
            watch_for_changes_override: Some(false),
            ..default()
        });
    }

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.44, 0.77, 0.81)))
        .add_plugins(default_plugins)
        .add_plugins(FlightPlugin)
        .run();
}
