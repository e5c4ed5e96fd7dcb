//! Audio collaborator used by the game board
//!
//! The board only tells the audio side what happened. Actual playback lives
//! outside the simulation; the headless player just keeps track of state.

use log::debug;

/// Music and sound effects triggered by the game
pub trait AudioPlayer {
    /// Start the background music unless it is already playing
    fn play_background_music(&mut self);

    /// Stop the background music if it is playing
    fn stop_background_music(&mut self);

    fn is_playing_background_music(&self) -> bool;

    fn play_crash_sound(&mut self);
}

/// Audio player for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct HeadlessAudioPlayer {
    playing: bool,
    /// How often the music was started from silence
    pub music_starts: usize,
    pub crash_sounds: usize,
}

impl HeadlessAudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioPlayer for HeadlessAudioPlayer {
    fn play_background_music(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.music_starts += 1;
        debug!("Background music started");
    }

    fn stop_background_music(&mut self) {
        if self.playing {
            self.playing = false;
            debug!("Background music stopped");
        }
    }

    fn is_playing_background_music(&self) -> bool {
        self.playing
    }

    fn play_crash_sound(&mut self) {
        self.crash_sounds += 1;
        debug!("Crash sound played");
    }
}
