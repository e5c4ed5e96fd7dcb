//! Systems for syncing Bevy entities with the game board

use bevy::prelude::*;

use super::components::{BoardResource, CarLink, StatusText};
use crate::simulation::{Car, CarKind, Dimension2D};

const PLAYER_COLOR: Color = Color::srgb(0.2, 0.4, 0.9);
const FAST_CAR_COLOR: Color = Color::srgb(0.9, 0.5, 0.1);
const SLOW_CAR_COLOR: Color = Color::srgb(0.2, 0.7, 0.3);
const CRUNCHED_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const UNKNOWN_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);

/// System to run one board update per fixed step while the game runs
pub fn tick_simulation(board: Option<ResMut<BoardResource>>) {
    let Some(mut board) = board else {
        return;
    };
    if board.0.is_running() {
        // Events are logged by the board itself
        board.0.update();
    }
}

/// System to move and recolor car sprites from board state
pub fn sync_cars(
    board: Option<Res<BoardResource>>,
    mut car_query: Query<(&CarLink, &mut Transform, &mut Sprite)>,
) {
    let Some(board) = board else {
        return;
    };
    let board = &board.0;
    let arena = board.size();

    for (link, mut transform, mut sprite) in car_query.iter_mut() {
        let (car, is_player) = match link {
            CarLink::Player => (board.player_car(), true),
            CarLink::Autonomous(index) => match board.cars().get(*index) {
                Some(car) => (car, false),
                None => continue,
            },
        };

        transform.translation = to_world(car, arena);
        sprite.custom_size = Some(Vec2::new(car.size().width as f32, car.size().height as f32));
        sprite.color = car_color(car, is_player);
    }
}

/// System to show the game state in the status line
pub fn update_status_text(
    board: Option<Res<BoardResource>>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    let Some(board) = board else {
        return;
    };
    let board = &board.0;

    for mut text in text_query.iter_mut() {
        **text = if board.is_player_crunched() {
            "Crunched! Press R to reset".to_string()
        } else if board.is_running() {
            format!(
                "Crunched cars: {}/{}",
                board.crunched_count(),
                board.cars().len()
            )
        } else {
            "Paused - press Space to start".to_string()
        };
    }
}

/// Arena coordinates (origin top-left, y down) to the centered camera space
fn to_world(car: &Car, arena: Dimension2D) -> Vec3 {
    let position = car.position();
    let size = car.size();
    let center_x = position.x + size.width / 2.0 - arena.width / 2.0;
    let center_y = arena.height / 2.0 - (position.y + size.height / 2.0);
    Vec3::new(center_x as f32, center_y as f32, if car.is_crunched() { 0.0 } else { 1.0 })
}

fn car_color(car: &Car, is_player: bool) -> Color {
    if car.is_crunched() {
        return CRUNCHED_COLOR;
    }
    if is_player {
        return PLAYER_COLOR;
    }
    match CarKind::from_icon_tag(car.icon_tag()) {
        Ok(CarKind::Fast) => FAST_CAR_COLOR,
        Ok(CarKind::Slow) => SLOW_CAR_COLOR,
        Err(e) => {
            bevy::log::warn!("{}", e);
            UNKNOWN_COLOR
        }
    }
}
