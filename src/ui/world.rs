//! Startup systems: camera, board and one sprite per car

use bevy::prelude::*;

use super::components::{BoardResource, CarLink, ConfigResource, StatusText};
use crate::simulation::GameBoard;

/// Arena floor behind the cars
pub const ARENA_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);
const STATUS_TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

/// Build the board and the 2D camera
pub fn setup_world(mut commands: Commands, config: Res<ConfigResource>) {
    match GameBoard::from_config(&config.0) {
        Ok(board) => {
            commands.insert_resource(BoardResource(board));
        }
        Err(e) => {
            bevy::log::error!("Failed to create game board: {}", e);
        }
    }

    commands.spawn(Camera2d);

    commands.spawn((
        StatusText,
        Text::new("Press Space to start"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(STATUS_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            ..default()
        },
    ));
}

/// Spawn a sprite for every car; `sync_cars` positions them each frame
pub fn spawn_cars(mut commands: Commands, board: Option<Res<BoardResource>>) {
    let Some(board) = board else {
        return;
    };

    let links = (0..board.0.cars().len())
        .map(CarLink::Autonomous)
        .chain(std::iter::once(CarLink::Player));

    for link in links {
        commands.spawn((
            link,
            Sprite::from_color(Color::WHITE, Vec2::ONE),
            Transform::default(),
        ));
    }
}
