//! Board camera. Keeps the whole 360×640 board in view whatever the window size, and scales the
//! UI by the same factor so HUD text stays glued to the board.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// Spawns the board camera and refits it whenever the window is resized.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, fit_board_to_window.run_if(on_event::<WindowResized>()));
    }
}

/// Marker for the single 2D camera looking at the board.
#[derive(Component)]
pub struct BoardCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("BoardCamera"), Camera2dBundle::default(), BoardCamera));
}

/// World units per logical window pixel needed to fit the board inside `window_size`.
pub fn board_scale(window_size: Vec2) -> f32 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return 1.0;
    }

    (BOARD_WIDTH / window_size.x)
        .max(BOARD_HEIGHT / window_size.y)
        .max(0.0001)
}

fn fit_board_to_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut projections: Query<&mut OrthographicProjection, With<BoardCamera>>,
    mut ui_scale: ResMut<UiScale>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let scale = board_scale(window.resolution.size());

    for mut projection in &mut projections {
        projection.scale = scale;
    }
    ui_scale.0 = 1.0 / scale;
}
