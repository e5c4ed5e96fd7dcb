//! Core value types for the bumper car simulation
//!
//! These are plain immutable values; every position change produces a new
//! `Point2D`.

use std::fmt;

/// A point in arena coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Offset this point by the given deltas
    pub fn translate(&self, dx: f64, dy: f64) -> Point2D {
        Point2D::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A width/height pair, used both for car footprints and arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension2D {
    pub width: f64,
    pub height: f64,
}

impl Dimension2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Both sides finite and strictly positive
    pub fn is_valid_arena(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl fmt::Display for Dimension2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dimension2D [width={:.2}, height={:.2}]",
            self.width, self.height
        )
    }
}

/// Full circle in degrees; directions live in `[0, MAX_ANGLE)`
pub const MAX_ANGLE: i32 = 360;

/// Half circle in degrees, used by the vertical reflection
pub const HALF_ANGLE: i32 = MAX_ANGLE / 2;

/// Default footprint of a car
pub const DEFAULT_CAR_WIDTH: f64 = 50.0;
pub const DEFAULT_CAR_HEIGHT: f64 = 25.0;

/// Default arena size, the classic window canvas
pub const DEFAULT_ARENA_WIDTH: f64 = 500.0;
pub const DEFAULT_ARENA_HEIGHT: f64 = 300.0;

/// Number of autonomous cars on a fresh board
pub const DEFAULT_AUTONOMOUS_CARS: usize = 5;

/// Reference tick cadence (40 ms per tick)
pub const DEFAULT_TICKS_PER_SECOND: u32 = 25;
