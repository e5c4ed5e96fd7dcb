//! Input handling systems

use bevy::prelude::*;

use super::components::{BoardResource, ConfigResource};
use crate::simulation::{steer_towards, GameBoard, Point2D};

/// Handle basic keyboard input
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Space toggles the game, R builds a fresh stopped board
pub fn handle_game_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ConfigResource>,
    board: Option<ResMut<BoardResource>>,
) {
    let Some(mut board) = board else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Space) {
        if board.0.is_running() {
            board.0.stop_game();
        } else {
            board.0.start_game();
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        board.0.stop_game();
        match GameBoard::from_config(&config.0) {
            Ok(fresh) => board.0 = fresh,
            Err(e) => bevy::log::error!("Failed to reset game board: {}", e),
        }
    }
}

/// Left click points the player's car at the cursor
pub fn handle_steering_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    board: Option<ResMut<BoardResource>>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(mut board) = board else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    // The window is exactly arena-sized, so cursor and arena coordinates match
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let target = Point2D::new(f64::from(cursor_position.x), f64::from(cursor_position.y));
    if let Err(e) = steer_towards(board.0.player_car_mut(), target) {
        bevy::log::warn!("Ignoring steering input: {}", e);
    }
}
