//! The human player and their car

use super::car::Car;
use super::error::SimError;

const START_X_COORDINATE: f64 = 0.0;
const START_Y_COORDINATE: f64 = 0.0;
const START_DIRECTION: i32 = 90;

#[derive(Debug, Clone)]
pub struct Player {
    car: Car,
}

impl Player {
    pub fn new(car: Car) -> Self {
        Self { car }
    }

    /// Put the car in the upper left corner facing right
    pub fn setup(&mut self) -> Result<(), SimError> {
        self.car.set_position(START_X_COORDINATE, START_Y_COORDINATE);
        self.car.set_direction(START_DIRECTION)
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }
}
