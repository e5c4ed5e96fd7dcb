//! Mapping a target point to a driving direction
//!
//! This is the only way input code changes the player's direction.

use super::car::Car;
use super::error::SimError;
use super::types::{Point2D, MAX_ANGLE};

const ANGLE_90_DEGREES: i32 = 90;
const ANGLE_270_DEGREES: i32 = 270;

/// Direction (degrees clockwise from "up") pointing from `car_position`
/// towards `target`, truncated to whole degrees.
pub fn direction_towards(car_position: Point2D, target: Point2D) -> i32 {
    let delta_x = (target.x - car_position.x).abs();
    let delta_y = target.y - car_position.y;
    let angle = delta_y.atan2(delta_x).to_degrees() as i32;

    let degree = if target.x > car_position.x {
        ANGLE_90_DEGREES - angle
    } else {
        ANGLE_270_DEGREES + angle
    };
    // straight below gives 360
    degree.rem_euclid(MAX_ANGLE)
}

/// Point the car at `target`. A crunched car keeps its direction.
pub fn steer_towards(car: &mut Car, target: Point2D) -> Result<i32, SimError> {
    if car.is_crunched() {
        return Ok(car.direction());
    }
    let direction = direction_towards(car.position(), target);
    car.set_direction(direction)?;
    Ok(direction)
}
