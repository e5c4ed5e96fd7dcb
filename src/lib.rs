//! Bumpers Simulation Library
//!
//! A bumper car simulation library that can run independently or with a Bevy UI.

pub mod config;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
