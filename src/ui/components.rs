//! UI components and resources for linking Bevy entities to the game board

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::simulation::GameBoard;

/// Resource wrapper for the game board
#[derive(Resource)]
pub struct BoardResource(pub GameBoard);

/// Config the board was built from, reused on reset
#[derive(Resource)]
pub struct ConfigResource(pub GameConfig);

/// Links a sprite to a car on the board
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarLink {
    Player,
    Autonomous(usize),
}

/// Marker for the status line
#[derive(Component)]
pub struct StatusText;
