//! The game board that ties cars, collisions and audio together
//!
//! This is the entry point for running the bumper simulation without any
//! Bevy dependencies.

use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::audio::{AudioPlayer, HeadlessAudioPlayer};
use super::car::{Car, CarKind};
use super::collision::Collision;
use super::error::SimError;
use super::player::Player;
use super::types::{Dimension2D, Point2D, DEFAULT_AUTONOMOUS_CARS};
use crate::config::GameConfig;

/// Something worth telling the player about, one per crash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The player's car won; `loser` indexes the crunched autonomous car
    PlayerWon { loser: usize },
    /// Autonomous car `car` won and the player's car got crunched
    CarWon { car: usize, icon_tag: &'static str },
    /// The collision produced no winner, which should never happen
    NoWinner { car: usize },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PlayerWon { loser } => {
                write!(f, "The player's car won the collision against car {}!", loser)
            }
            GameEvent::CarWon { car, icon_tag } => {
                write!(f, "Car {} ({}) won the collision!", car, icon_tag)
            }
            GameEvent::NoWinner { car } => {
                write!(f, "Collision with car {} produced no winner!", car)
            }
        }
    }
}

/// Read-only view of a car for presentation layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarSnapshot {
    pub icon_tag: &'static str,
    pub position: Point2D,
    pub size: Dimension2D,
    pub crunched: bool,
    pub is_player: bool,
}

impl CarSnapshot {
    fn of(car: &Car, is_player: bool) -> Self {
        Self {
            icon_tag: car.icon_tag(),
            position: car.position(),
            size: car.size(),
            crunched: car.is_crunched(),
            is_player,
        }
    }
}

/// The arena with the player's car and the autonomous cars
pub struct GameBoard {
    /// Autonomous cars, never contains the player's car
    cars: Vec<Car>,

    player: Player,

    size: Dimension2D,

    running: bool,

    audio_player: Box<dyn AudioPlayer + Send + Sync>,

    /// Number of updates since the board was created
    ticks: u64,
}

impl GameBoard {
    /// Create a board with the default number of slow cars, seeded from the OS
    pub fn new(size: Dimension2D) -> Result<Self, SimError> {
        let mut rng = StdRng::from_os_rng();
        Self::with_rng(size, DEFAULT_AUTONOMOUS_CARS, CarKind::Slow, &mut rng)
    }

    /// Create a board with a seeded RNG for reproducible games
    pub fn new_with_seed(size: Dimension2D, seed: u64) -> Result<Self, SimError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(size, DEFAULT_AUTONOMOUS_CARS, CarKind::Slow, &mut rng)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, SimError> {
        let size = config.arena_size();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(size, config.autonomous_cars, config.autonomous_kind, &mut rng)
    }

    pub fn with_rng<R: Rng>(
        size: Dimension2D,
        autonomous_cars: usize,
        autonomous_kind: CarKind,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        if !size.is_valid_arena() {
            return Err(SimError::InvalidArena {
                width: size.width,
                height: size.height,
            });
        }

        let mut player = Player::new(Car::new(CarKind::Fast, size, rng));
        player.setup()?;

        let cars = (0..autonomous_cars)
            .map(|_| Car::new(autonomous_kind, size, rng))
            .collect();

        Ok(Self {
            cars,
            player,
            size,
            running: false,
            audio_player: Box::new(HeadlessAudioPlayer::new()),
            ticks: 0,
        })
    }

    pub fn size(&self) -> Dimension2D {
        self.size
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn cars_mut(&mut self) -> &mut [Car] {
        &mut self.cars
    }

    pub fn player_car(&self) -> &Car {
        self.player.car()
    }

    pub fn player_car_mut(&mut self) -> &mut Car {
        self.player.car_mut()
    }

    pub fn audio_player(&self) -> &dyn AudioPlayer {
        self.audio_player.as_ref()
    }

    pub fn set_audio_player(&mut self, audio_player: Box<dyn AudioPlayer + Send + Sync>) {
        self.audio_player = audio_player;
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Start the game: cars move on updates and the music plays
    pub fn start_game(&mut self) {
        if self.running {
            return;
        }
        self.audio_player.play_background_music();
        self.running = true;
        info!("Game started");
    }

    /// Stop the game: cars stop moving and the music stops
    pub fn stop_game(&mut self) {
        if !self.running {
            return;
        }
        self.audio_player.stop_background_music();
        self.running = false;
        info!("Game stopped after {} ticks", self.ticks);
    }

    /// Advance the board by one tick and report what happened
    pub fn update(&mut self) -> Vec<GameEvent> {
        self.ticks += 1;
        self.move_cars();
        self.resolve_collisions()
    }

    fn move_cars(&mut self) {
        for car in &mut self.cars {
            car.drive(self.size);
        }
        self.player.car_mut().drive(self.size);
    }

    fn resolve_collisions(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for index in 0..self.cars.len() {
            // A crunched player can neither win nor lose again
            if self.player.car().is_crunched() {
                break;
            }
            if self.cars[index].is_crunched() {
                continue;
            }

            let event = {
                let player_car = self.player.car();
                let car = &self.cars[index];
                let collision = Collision::new(player_car, car);
                if !collision.is_crash() {
                    continue;
                }

                let winner = collision.evaluate();
                if std::ptr::eq(winner, player_car) {
                    GameEvent::PlayerWon { loser: index }
                } else if std::ptr::eq(winner, car) {
                    GameEvent::CarWon {
                        car: index,
                        icon_tag: car.icon_tag(),
                    }
                } else {
                    GameEvent::NoWinner { car: index }
                }
            };

            match event {
                GameEvent::PlayerWon { loser } => {
                    self.cars[loser].crunch();
                    info!("{}", event);
                }
                GameEvent::CarWon { .. } => {
                    self.player.car_mut().crunch();
                    info!("{}", event);
                }
                GameEvent::NoWinner { .. } => {
                    error!("{}", event);
                }
            }
            self.audio_player.play_crash_sound();
            events.push(event);
        }

        events
    }

    /// Autonomous cars first, the player's car last (drawing order)
    pub fn snapshots(&self) -> Vec<CarSnapshot> {
        self.cars
            .iter()
            .map(|car| CarSnapshot::of(car, false))
            .chain(std::iter::once(CarSnapshot::of(self.player.car(), true)))
            .collect()
    }

    pub fn crunched_count(&self) -> usize {
        self.cars.iter().filter(|car| car.is_crunched()).count()
    }

    pub fn is_player_crunched(&self) -> bool {
        self.player.car().is_crunched()
    }

    /// Print a summary of the board state
    pub fn print_summary(&self) {
        println!("=== Bumpers Summary ===");
        println!("Arena: {}", self.size);
        println!("Ticks: {}", self.ticks);
        println!("Running: {}", self.running);
        println!(
            "Crunched cars: {}/{}",
            self.crunched_count(),
            self.cars.len()
        );
        println!();

        let player_car = self.player.car();
        println!("--- Player ---");
        println!(
            "  {}: position={}, direction={}, speed={}{}",
            player_car.kind().name(),
            player_car.position(),
            player_car.direction(),
            player_car.speed(),
            if player_car.is_crunched() { " (crunched)" } else { "" }
        );

        println!("--- Cars ---");
        for (index, car) in self.cars.iter().enumerate() {
            println!(
                "  Car {} {}: position={}, direction={}, speed={}{}",
                index,
                car.kind().name(),
                car.position(),
                car.direction(),
                car.speed(),
                if car.is_crunched() { " (crunched)" } else { "" }
            );
        }
    }

    /// Draw the arena in the terminal
    pub fn draw_map(&self) {
        let (width, height) = map_grid_size(self.size);
        let mut grid = vec![vec![' '; width]; height];

        let to_grid = |position: Point2D, size: Dimension2D| -> (usize, usize) {
            let center_x = (position.x + size.width / 2.0).max(0.0);
            let center_y = (position.y + size.height / 2.0).max(0.0);
            let col = (center_x / CELL_WIDTH) as usize;
            let row = (center_y / CELL_HEIGHT) as usize;
            (row.min(height - 1), col.min(width - 1))
        };

        for snapshot in self.snapshots() {
            let (row, col) = to_grid(snapshot.position, snapshot.size);
            grid[row][col] = if snapshot.is_player {
                if snapshot.crunched {
                    'p'
                } else {
                    'P'
                }
            } else if snapshot.crunched {
                'x'
            } else {
                match CarKind::from_icon_tag(snapshot.icon_tag) {
                    Ok(CarKind::Fast) => 'F',
                    Ok(CarKind::Slow) => 'S',
                    Err(_) => '?',
                }
            };
        }

        println!("\n=== Arena ===");
        println!("Legend: P=Player, F=Fast car, S=Slow car, x=Crunched car, p=Crunched player");
        println!();
        let border: String = std::iter::repeat('#').take(width + 2).collect();
        println!("{}", border);
        for row in &grid {
            let line: String = row.iter().collect();
            println!("#{}#", line);
        }
        println!("{}", border);
        println!();
    }
}

/// Arena units per character cell; cells are twice as tall as wide
const CELL_WIDTH: f64 = 10.0;
const CELL_HEIGHT: f64 = 20.0;

/// Largest map drawn in the terminal, in cells
const MAX_MAP_COLUMNS: usize = 120;
const MAX_MAP_ROWS: usize = 60;

/// Columns and rows of the ASCII map. Huge arenas are clipped to the
/// maximum map size; cars beyond it are drawn on the last row or column.
fn map_grid_size(size: Dimension2D) -> (usize, usize) {
    let cells = |length: f64, cell: f64, max: usize| {
        let count = (length / cell).ceil();
        if count.is_finite() && count >= 1.0 {
            (count as usize).min(max)
        } else if count.is_finite() {
            1
        } else {
            max
        }
    };
    (
        cells(size.width, CELL_WIDTH, MAX_MAP_COLUMNS),
        cells(size.height, CELL_HEIGHT, MAX_MAP_ROWS),
    )
}
