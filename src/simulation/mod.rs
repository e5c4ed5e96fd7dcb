//! Standalone bumper car simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod audio;
mod board;
mod car;
mod collision;
mod error;
mod player;
mod session;
mod steering;
mod ticker;
mod types;

pub use audio::{AudioPlayer, HeadlessAudioPlayer};
pub use board::{CarSnapshot, GameBoard, GameEvent};
pub use car::{Car, CarKind};
pub use collision::Collision;
pub use error::SimError;
pub use player::Player;
pub use session::{GameSession, DEFAULT_EVENT_CAPACITY};
pub use steering::{direction_towards, steer_towards};
pub use ticker::{Cadence, Clock, ManualClock, SystemClock, Ticker};
pub use types::{
    Dimension2D, Point2D, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_AUTONOMOUS_CARS,
    DEFAULT_CAR_HEIGHT, DEFAULT_CAR_WIDTH, DEFAULT_TICKS_PER_SECOND, HALF_ANGLE, MAX_ANGLE,
};
