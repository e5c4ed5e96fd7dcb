//! Fixed-interval scheduling of board updates
//!
//! `GameBoard::update` is a pure step function. The ticker decides when to
//! call it, through a `Clock` so tests never wait on real time.

use std::time::{Duration, Instant};

use log::debug;

use super::board::{GameBoard, GameEvent};
use super::types::DEFAULT_TICKS_PER_SECOND;

/// Source of time for the ticker
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block until `deadline`; returns immediately if it already passed
    fn sleep_until(&mut self, deadline: Instant);
}

/// Wall clock that really sleeps
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Virtual clock that jumps forward instead of sleeping
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    now: Instant,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep_until(&mut self, deadline: Instant) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

/// Fixed-rate deadlines: a slow tick is followed by a shorter wait, not a
/// drift
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    period: Duration,
    next: Instant,
}

impl Cadence {
    /// First deadline one period after the clock's current time
    pub fn start<C: Clock>(period: Duration, clock: &C) -> Self {
        Self {
            period,
            next: clock.now() + period,
        }
    }

    /// Sleep until the next deadline and schedule the one after it
    pub fn wait<C: Clock>(&mut self, clock: &mut C) {
        clock.sleep_until(self.next);
        self.next += self.period;
    }
}

/// Calls `update` on a board at a fixed rate
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::from_rate(DEFAULT_TICKS_PER_SECOND)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// A ticker running `ticks_per_second` steps per second (at least one)
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn cadence<C: Clock>(&self, clock: &C) -> Cadence {
        Cadence::start(self.period, clock)
    }

    /// Run up to `ticks` updates, one per period, while the board is running.
    ///
    /// `on_tick` sees the board and the events of every tick. Returns the
    /// number of updates performed.
    pub fn run<C, F>(&self, board: &mut GameBoard, clock: &mut C, ticks: u64, mut on_tick: F) -> u64
    where
        C: Clock,
        F: FnMut(&GameBoard, &[GameEvent]),
    {
        let mut cadence = self.cadence(clock);
        let mut performed = 0;

        while performed < ticks && board.is_running() {
            cadence.wait(clock);
            let events = board.update();
            performed += 1;
            on_tick(board, &events);
        }

        debug!("Ticker finished after {} ticks", performed);
        performed
    }
}
