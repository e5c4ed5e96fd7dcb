//! UI module that visualizes the bumper board using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `GameBoard` and draws every car as a flat rectangle.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::BoardResource;

use crate::config::GameConfig;
use components::ConfigResource;
use input::{handle_game_keys, handle_input, handle_steering_click};
use sync::{sync_cars, tick_simulation, update_status_text};
use world::{setup_world, spawn_cars, ARENA_COLOR};

/// Plugin to register all UI systems
pub struct BumpersUIPlugin {
    pub config: GameConfig,
}

impl Plugin for BumpersUIPlugin {
    fn build(&self, app: &mut App) {
        let ticks_per_second = f64::from(self.config.ticks_per_second.max(1));

        app.insert_resource(ConfigResource(self.config.clone()))
            .insert_resource(Time::<Fixed>::from_hz(ticks_per_second))
            .insert_resource(ClearColor(ARENA_COLOR))
            .add_systems(Startup, (setup_world, spawn_cars.after(setup_world)))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    sync_cars,
                    update_status_text,
                    handle_input,
                    handle_game_keys,
                    handle_steering_click,
                ),
            );
    }
}
