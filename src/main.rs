use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bumpers::config::GameConfig;
use bumpers::simulation::{Clock, GameBoard, GameEvent, ManualClock, SystemClock, Ticker};

#[derive(Parser)]
#[command(name = "bumpers")]
#[command(about = "Bumper car simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "500")]
    ticks: u64,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of autonomous cars
    #[arg(long)]
    cars: Option<usize>,

    /// Arena width
    #[arg(long)]
    width: Option<f64>,

    /// Arena height
    #[arg(long)]
    height: Option<f64>,

    /// Pace headless ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(cars) = self.cars {
            config.autonomous_cars = cars;
        }
        if let Some(width) = self.width {
            config.arena_width = width;
        }
        if let Some(height) = self.height {
            config.arena_height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        // Bevy installs its own logger
        let config = cli.game_config()?;
        return launch_ui(config);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = cli.game_config()?;

    if cli.realtime {
        run_headless(&config, cli.ticks, SystemClock)
    } else {
        run_headless(&config, cli.ticks, ManualClock::new())
    }
}

#[cfg(feature = "ui")]
fn launch_ui(config: GameConfig) -> Result<()> {
    run_with_ui(config);
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn launch_ui(_config: GameConfig) -> Result<()> {
    anyhow::bail!("UI feature is not enabled. Rebuild with --features ui")
}

/// Run the simulation in headless mode (no graphics)
fn run_headless<C: Clock>(config: &GameConfig, ticks: u64, mut clock: C) -> Result<()> {
    println!("Running bumpers in headless mode...");
    println!(
        "Ticks: {}, Rate: {} ticks/s, Arena: {}x{}",
        ticks, config.ticks_per_second, config.arena_width, config.arena_height
    );
    println!();

    let mut board = GameBoard::from_config(config).context("Failed to create game board")?;

    println!("Initial state:");
    board.print_summary();
    board.draw_map();

    let ticker = Ticker::from_rate(config.ticks_per_second);
    let ticks_per_second = u64::from(config.ticks_per_second);
    let mut crashes = 0usize;
    let mut player_wins = 0usize;

    board.start_game();
    let performed = ticker.run(&mut board, &mut clock, ticks, |board, events| {
        crashes += events.len();
        player_wins += events
            .iter()
            .filter(|event| matches!(event, GameEvent::PlayerWon { .. }))
            .count();

        // Print summary after every second of simulated time
        if board.tick_count() % ticks_per_second == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                board.tick_count(),
                board.tick_count() as f64 / ticks_per_second as f64
            );
            board.print_summary();
            board.draw_map();
        }
    });
    board.stop_game();

    println!("=== Final State ===");
    board.print_summary();
    board.draw_map();

    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks run: {}", performed);
    info!("Crashes: {}", crashes);
    info!("Player wins: {}", player_wins);
    info!("Crunched cars: {}/{}", board.crunched_count(), board.cars().len());
    info!(
        "Player crunched: {}",
        if board.is_player_crunched() { "yes" } else { "no" }
    );

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(config: GameConfig) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Bumpers UI...");
    println!();
    println!("Controls:");
    println!("  Space       - Start/stop the game");
    println!("  Left click  - Steer the player's car towards the cursor");
    println!("  R           - Reset the board");
    println!("  ESC         - Exit");
    println!();

    let resolution = (config.arena_width as u32, config.arena_height as u32);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,bumpers=info".to_string(),
                    level: bevy::log::Level::INFO,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Bumpers".into(),
                        resolution: resolution.into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(bumpers::ui::BumpersUIPlugin { config })
        .run();
}
