//! Error taxonomy for the simulation core

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("direction must be between 0 (inclusive) and 360 (exclusive), got {0}")]
    InvalidDirection(i32),

    #[error("arena dimensions must be positive and finite, got {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("missing resource: {0}")]
    MissingResource(String),
}
