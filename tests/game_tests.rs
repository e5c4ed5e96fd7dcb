//! Game board validation tests
//!
//! These tests validate the per-tick update, collision outcomes and the
//! start/stop state machine of the board.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use bumpers::config::GameConfig;
use bumpers::simulation::{
    AudioPlayer, CarKind, Dimension2D, GameBoard, GameEvent, Point2D, SimError,
};

fn arena() -> Dimension2D {
    Dimension2D::new(500.0, 300.0)
}

/// A board with a single autonomous car, both cars placed by hand
fn board_with_one_car(player: (f64, f64, i32, i32), other: (f64, f64)) -> GameBoard {
    let mut rng = StdRng::seed_from_u64(11);
    let mut board = GameBoard::with_rng(arena(), 1, CarKind::Slow, &mut rng).unwrap();

    let car = board.player_car_mut();
    car.set_position(player.0, player.1);
    car.set_direction(player.2).unwrap();
    car.set_speed(player.3);

    let car = &mut board.cars_mut()[0];
    car.set_position(other.0, other.1);
    car.set_speed(0);

    board
}

#[derive(Clone, Default)]
struct RecordingAudio {
    playing: Arc<AtomicBool>,
    music_starts: Arc<AtomicUsize>,
    music_stops: Arc<AtomicUsize>,
    crashes: Arc<AtomicUsize>,
}

impl AudioPlayer for RecordingAudio {
    fn play_background_music(&mut self) {
        if !self.playing.swap(true, Ordering::SeqCst) {
            self.music_starts.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn stop_background_music(&mut self) {
        if self.playing.swap(false, Ordering::SeqCst) {
            self.music_stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_playing_background_music(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn play_crash_sound(&mut self) {
        self.crashes.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_board_initialization() {
    let board = GameBoard::new_with_seed(arena(), 5).unwrap();
    assert_eq!(board.size(), arena());
    assert_eq!(board.cars().len(), 5);
    assert!(!board.is_running());
    assert_eq!(board.tick_count(), 0);

    let player_car = board.player_car();
    assert_eq!(player_car.position(), Point2D::new(0.0, 0.0));
    assert_eq!(player_car.direction(), 90);
    assert_eq!(player_car.kind(), CarKind::Fast);
    assert!((2..=10).contains(&player_car.speed()));

    for car in board.cars() {
        assert_eq!(car.kind(), CarKind::Slow);
        assert!(!car.is_crunched());
    }
}

#[test]
fn test_seeded_boards_are_reproducible() {
    let first = GameBoard::new_with_seed(arena(), 99).unwrap();
    let second = GameBoard::new_with_seed(arena(), 99).unwrap();
    assert_eq!(first.cars(), second.cars());
    assert_eq!(first.player_car(), second.player_car());
}

#[test]
fn test_invalid_arena_is_rejected() {
    let result = GameBoard::new_with_seed(Dimension2D::new(0.0, 300.0), 1);
    assert!(matches!(result, Err(SimError::InvalidArena { .. })));

    let result = GameBoard::new_with_seed(Dimension2D::new(500.0, -1.0), 1);
    assert!(matches!(result, Err(SimError::InvalidArena { .. })));

    let result = GameBoard::new_with_seed(Dimension2D::new(f64::INFINITY, 300.0), 1);
    assert!(matches!(result, Err(SimError::InvalidArena { .. })));

    let result = GameBoard::new_with_seed(Dimension2D::new(500.0, f64::NAN), 1);
    assert!(matches!(result, Err(SimError::InvalidArena { .. })));
}

#[test]
fn test_huge_arena_draws_clipped_map() {
    let board = GameBoard::new_with_seed(Dimension2D::new(1e300, 1e300), 1).unwrap();
    board.draw_map();
}

#[test]
fn test_board_from_config() {
    let config = GameConfig {
        autonomous_cars: 3,
        autonomous_kind: CarKind::Fast,
        seed: Some(4),
        ..GameConfig::default()
    };
    let board = GameBoard::from_config(&config).unwrap();
    assert_eq!(board.cars().len(), 3);
    assert!(board.cars().iter().all(|car| car.kind() == CarKind::Fast));
}

#[test]
fn test_player_wins_collision_and_crunches_other_car() {
    // Player at the origin driving right at speed 5, other car just out of reach
    let mut board = board_with_one_car((0.0, 0.0, 90, 5), (52.0, 0.0));
    board.start_game();

    let events = board.update();

    assert_eq!(events, vec![GameEvent::PlayerWon { loser: 0 }]);
    assert!(board.cars()[0].is_crunched());
    assert_eq!(board.cars()[0].speed(), 0);
    assert!(!board.is_player_crunched());
}

#[test]
fn test_autonomous_car_wins_and_crunches_player() {
    // Player drives left into a car sitting further left
    let mut board = board_with_one_car((100.0, 0.0, 270, 5), (46.0, 0.0));

    let events = board.update();

    assert_eq!(
        events,
        vec![GameEvent::CarWon {
            car: 0,
            icon_tag: "SlowCar.gif"
        }]
    );
    assert!(board.is_player_crunched());
    assert_eq!(board.player_car().speed(), 0);
    assert!(!board.cars()[0].is_crunched());

    // The crunched player no longer moves and the wreck raises no new events
    let frozen = board.player_car().position();
    assert!(board.update().is_empty());
    assert_eq!(board.player_car().position(), frozen);
}

#[test]
fn test_crunched_player_loses_only_once() {
    let audio = RecordingAudio::default();
    // Player drives left into a slow car that keeps moving down through it
    let mut board = board_with_one_car((100.0, 0.0, 270, 5), (46.0, 0.0));
    board.set_audio_player(Box::new(audio.clone()));
    let car = &mut board.cars_mut()[0];
    car.set_direction(180).unwrap();
    car.set_speed(2);

    let mut car_wins = 0;
    for _ in 0..20 {
        car_wins += board
            .update()
            .iter()
            .filter(|event| matches!(event, GameEvent::CarWon { .. }))
            .count();
    }

    assert_eq!(car_wins, 1);
    assert_eq!(audio.crashes.load(Ordering::SeqCst), 1);
    assert!(board.is_player_crunched());
}

#[test]
fn test_crunched_player_cannot_win() {
    // A wreck on the left of a car driving into it must not crunch that car
    let mut board = board_with_one_car((0.0, 0.0, 90, 0), (60.0, 0.0));
    board.player_car_mut().crunch();
    let car = &mut board.cars_mut()[0];
    car.set_direction(270).unwrap();
    car.set_speed(5);

    for _ in 0..5 {
        assert!(board.update().is_empty());
    }
    assert!(!board.cars()[0].is_crunched());
    assert_eq!(board.crunched_count(), 0);
}

#[test]
fn test_no_collision_without_overlap() {
    let mut board = board_with_one_car((0.0, 0.0, 90, 5), (200.0, 200.0));
    assert!(board.update().is_empty());
    assert!(!board.cars()[0].is_crunched());
}

#[test]
fn test_crunched_cars_are_skipped() {
    let mut board = board_with_one_car((0.0, 0.0, 90, 5), (52.0, 0.0));
    assert_eq!(board.update().len(), 1);

    // Player keeps driving through the wreck; no further events for it
    board.player_car_mut().set_speed(1);
    for _ in 0..5 {
        assert!(board.update().is_empty());
    }
    assert_eq!(board.crunched_count(), 1);
}

#[test]
fn test_crash_plays_sound() {
    let audio = RecordingAudio::default();
    let mut board = board_with_one_car((0.0, 0.0, 90, 5), (52.0, 0.0));
    board.set_audio_player(Box::new(audio.clone()));

    board.update();
    assert_eq!(audio.crashes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_start_and_stop_are_idempotent() {
    let audio = RecordingAudio::default();
    let mut board = GameBoard::new_with_seed(arena(), 3).unwrap();
    board.set_audio_player(Box::new(audio.clone()));

    board.stop_game();
    assert!(!board.is_running());
    assert_eq!(audio.music_stops.load(Ordering::SeqCst), 0);

    board.start_game();
    board.update();
    let positions: Vec<Point2D> = board.cars().iter().map(|car| car.position()).collect();

    board.start_game();
    assert!(board.is_running());
    assert!(board.audio_player().is_playing_background_music());
    assert_eq!(audio.music_starts.load(Ordering::SeqCst), 1);
    let unchanged: Vec<Point2D> = board.cars().iter().map(|car| car.position()).collect();
    assert_eq!(positions, unchanged);

    board.stop_game();
    board.stop_game();
    assert!(!board.is_running());
    assert!(!board.audio_player().is_playing_background_music());
    assert_eq!(audio.music_stops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_update_counts_ticks_and_keeps_cars_in_arena() {
    let mut board = GameBoard::new_with_seed(arena(), 21).unwrap();
    board.start_game();

    for _ in 0..500 {
        board.update();
        for snapshot in board.snapshots() {
            if snapshot.crunched {
                continue;
            }
            assert!(snapshot.position.x >= 0.0);
            assert!(snapshot.position.y >= 0.0);
            assert!(snapshot.position.x + snapshot.size.width <= 500.0 + 1e-9);
            assert!(snapshot.position.y + snapshot.size.height <= 300.0 + 1e-9);
        }
    }
    assert_eq!(board.tick_count(), 500);
}

#[test]
fn test_snapshots_list_player_last() {
    let board = GameBoard::new_with_seed(arena(), 8).unwrap();
    let snapshots = board.snapshots();

    assert_eq!(snapshots.len(), board.cars().len() + 1);
    let (player, others) = snapshots.split_last().unwrap();
    assert!(player.is_player);
    assert_eq!(player.icon_tag, "FastCar.gif");
    assert!(others.iter().all(|s| !s.is_player && s.icon_tag == "SlowCar.gif"));
}

#[test]
fn test_event_messages() {
    assert_eq!(
        GameEvent::PlayerWon { loser: 2 }.to_string(),
        "The player's car won the collision against car 2!"
    );
    assert_eq!(
        GameEvent::CarWon {
            car: 1,
            icon_tag: "SlowCar.gif"
        }
        .to_string(),
        "Car 1 (SlowCar.gif) won the collision!"
    );
}
