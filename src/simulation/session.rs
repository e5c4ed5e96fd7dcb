//! A game board ticking on its own thread
//!
//! Start and stop may come from another thread (a UI button, a signal
//! handler). Every tick and every start/stop takes the board lock, so a tick
//! never sees a half-started or half-stopped board.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use log::{debug, warn};

use super::board::{GameBoard, GameEvent};
use super::ticker::{SystemClock, Ticker};

/// Events kept for `drain_events` before the oldest are dropped
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Ring buffer of the most recent events
#[derive(Debug)]
struct EventLog {
    events: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventLog {
    fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    fn extend(&mut self, events: Vec<GameEvent>) {
        for event in events {
            if self.capacity == 0 {
                self.dropped += 1;
                continue;
            }
            if self.events.len() == self.capacity {
                self.events.pop_front();
                self.dropped += 1;
            }
            self.events.push_back(event);
        }
    }

    fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}

/// The ticking thread and the flag that tells it to exit
struct Worker {
    alive: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Worker {
    fn shutdown(self) {
        self.alive.store(false, Ordering::SeqCst);
        if self.handle.join().is_err() {
            warn!("Ticking thread panicked");
        }
    }
}

pub struct GameSession {
    board: Arc<Mutex<GameBoard>>,
    events: Arc<Mutex<EventLog>>,
    ticker: Ticker,
    worker: Option<Worker>,
}

impl GameSession {
    pub fn new(board: GameBoard, ticker: Ticker) -> Self {
        Self::with_event_capacity(board, ticker, DEFAULT_EVENT_CAPACITY)
    }

    /// A session keeping at most `capacity` undrained events
    pub fn with_event_capacity(board: GameBoard, ticker: Ticker, capacity: usize) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            events: Arc::new(Mutex::new(EventLog::new(capacity))),
            ticker,
            worker: None,
        }
    }

    /// Lock the board for reading or steering
    pub fn board(&self) -> MutexGuard<'_, GameBoard> {
        lock(&self.board)
    }

    pub fn is_running(&self) -> bool {
        self.board().is_running()
    }

    /// Start the game and the ticking thread. No-op while both are running.
    ///
    /// A board started directly through `board()` only gets its ticking
    /// thread here.
    pub fn start(&mut self) {
        let ticking = self
            .worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished());
        if ticking && self.is_running() {
            return;
        }

        if let Some(worker) = self.worker.take() {
            worker.shutdown();
        }

        lock(&self.board).start_game();

        let alive = Arc::new(AtomicBool::new(true));
        let board = Arc::clone(&self.board);
        let events = Arc::clone(&self.events);
        let ticker = self.ticker;
        let thread_alive = Arc::clone(&alive);

        let handle = std::thread::spawn(move || {
            let mut clock = SystemClock;
            let mut cadence = ticker.cadence(&clock);
            loop {
                cadence.wait(&mut clock);
                if !thread_alive.load(Ordering::SeqCst) {
                    break;
                }

                let mut guard = lock(&board);
                if !guard.is_running() {
                    break;
                }
                let tick_events = guard.update();
                if !tick_events.is_empty() {
                    lock(&events).extend(tick_events);
                }
            }
            debug!("Ticking thread exited");
        });

        self.worker = Some(Worker { alive, handle });
    }

    /// Stop the game and wait for the ticking thread. The board is left
    /// untouched when it is already stopped.
    pub fn stop(&mut self) {
        lock(&self.board).stop_game();

        if let Some(worker) = self.worker.take() {
            worker.shutdown();
        }
    }

    /// Take all events collected since the last call, oldest first
    pub fn drain_events(&self) -> Vec<GameEvent> {
        lock(&self.events).drain()
    }

    /// Events dropped because nobody drained them in time
    pub fn dropped_events(&self) -> u64 {
        lock(&self.events).dropped
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock<T>(mutex: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
