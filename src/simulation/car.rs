//! Car movement logic for the bumper simulation
//!
//! A car integrates its own motion every tick and bounces off the arena
//! walls. Variants only differ in their speed range and icon.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::types::{
    Dimension2D, Point2D, DEFAULT_CAR_HEIGHT, DEFAULT_CAR_WIDTH, HALF_ANGLE, MAX_ANGLE,
};

const FAST_CAR_ICON: &str = "FastCar.gif";
const SLOW_CAR_ICON: &str = "SlowCar.gif";

/// Parameter preset a car is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarKind {
    /// Speed range [2, 10], used for the player
    Fast,
    /// Speed range [2, 5], used for the autonomous cars
    #[default]
    Slow,
}

impl CarKind {
    pub fn min_speed(&self) -> i32 {
        match self {
            CarKind::Fast => 2,
            CarKind::Slow => 2,
        }
    }

    pub fn max_speed(&self) -> i32 {
        match self {
            CarKind::Fast => 10,
            CarKind::Slow => 5,
        }
    }

    /// Opaque identifier handed to the presentation layer
    pub fn icon_tag(&self) -> &'static str {
        match self {
            CarKind::Fast => FAST_CAR_ICON,
            CarKind::Slow => SLOW_CAR_ICON,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CarKind::Fast => "FastCar",
            CarKind::Slow => "SlowCar",
        }
    }

    /// Resolve an icon tag back to the preset that owns it
    pub fn from_icon_tag(tag: &str) -> Result<Self, SimError> {
        match tag {
            FAST_CAR_ICON => Ok(CarKind::Fast),
            SLOW_CAR_ICON => Ok(CarKind::Slow),
            other => Err(SimError::MissingResource(other.to_string())),
        }
    }
}

/// A car driving around the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    kind: CarKind,
    position: Point2D,
    size: Dimension2D,
    /// Degrees clockwise from "up", always in `[0, 360)`
    direction: i32,
    speed: i32,
    min_speed: i32,
    max_speed: i32,
    crunched: bool,
}

impl Car {
    /// Create a car at a random spot inside the arena, facing a random
    /// direction with a random speed from the kind's range.
    pub fn new<R: Rng>(kind: CarKind, arena: Dimension2D, rng: &mut R) -> Self {
        let size = Dimension2D::new(DEFAULT_CAR_WIDTH, DEFAULT_CAR_HEIGHT);
        let x = random_coordinate(rng, arena.width - size.width);
        let y = random_coordinate(rng, arena.height - size.height);
        let direction = rng.random_range(0..MAX_ANGLE);
        // Bounds are known before the speed is drawn
        let speed = rng.random_range(kind.min_speed()..=kind.max_speed());

        Self {
            kind,
            position: Point2D::new(x, y),
            size,
            direction,
            speed,
            min_speed: kind.min_speed(),
            max_speed: kind.max_speed(),
            crunched: false,
        }
    }

    /// Advance the car by one tick, reflecting off the arena walls.
    ///
    /// Crunched cars do not move. Each axis is reflected at most once per
    /// call, so a car moving further than the arena allows in a single tick
    /// is not pulled back inside.
    pub fn drive(&mut self, arena: Dimension2D) {
        if self.crunched {
            return;
        }

        let max_x = arena.width;
        let max_y = arena.height;

        let radians = f64::from(self.direction).to_radians();
        let delta_x = f64::from(self.speed) * radians.sin();
        let delta_y = f64::from(self.speed) * radians.cos();
        let mut new_x = self.position.x + delta_x;
        let mut new_y = self.position.y + delta_y;

        if new_x < 0.0 {
            new_x = -new_x;
            self.direction = (MAX_ANGLE - self.direction) % MAX_ANGLE;
        } else if new_x + self.size.width > max_x {
            new_x = 2.0 * max_x - new_x - 2.0 * self.size.width;
            self.direction = (MAX_ANGLE - self.direction) % MAX_ANGLE;
        }

        if new_y < 0.0 {
            new_y = -new_y;
            self.direction = reflect_vertical(self.direction);
        } else if new_y + self.size.height > max_y {
            new_y = 2.0 * max_y - new_y - 2.0 * self.size.height;
            self.direction = reflect_vertical(self.direction);
        }

        self.position = Point2D::new(new_x, new_y);
    }

    pub fn set_direction(&mut self, direction: i32) -> Result<(), SimError> {
        if !(0..MAX_ANGLE).contains(&direction) {
            return Err(SimError::InvalidDirection(direction));
        }
        self.direction = direction;
        Ok(())
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    /// Increase the speed by one, saturating at the maximum
    pub fn increment_speed(&mut self) {
        if self.speed < self.max_speed {
            self.speed += 1;
        }
    }

    /// Decrease the speed by one, saturating at the minimum
    pub fn decrement_speed(&mut self) {
        if self.speed > self.min_speed {
            self.speed -= 1;
        }
    }

    pub fn min_speed(&self) -> i32 {
        self.min_speed
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    pub fn kind(&self) -> CarKind {
        self.kind
    }

    pub fn icon_tag(&self) -> &'static str {
        self.kind.icon_tag()
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point2D::new(x, y);
    }

    pub fn size(&self) -> Dimension2D {
        self.size
    }

    pub fn set_size(&mut self, size: Dimension2D) {
        self.size = size;
    }

    /// Disable the car for good
    pub fn crunch(&mut self) {
        self.crunched = true;
        self.speed = 0;
    }

    pub fn is_crunched(&self) -> bool {
        self.crunched
    }
}

fn reflect_vertical(direction: i32) -> i32 {
    let reflected = HALF_ANGLE - direction;
    if reflected < 0 {
        MAX_ANGLE + reflected
    } else {
        reflected
    }
}

/// Uniform coordinate in `[0, max)`, or 0 when the car does not fit
fn random_coordinate<R: Rng>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
