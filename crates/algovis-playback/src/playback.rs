//! Playback controls for step sequences.

use std::time::Duration;

use algovis_steps::StepRecord;
use serde::{Deserialize, Serialize};

/// Slowest supported speed multiplier.
pub const MIN_SPEED: f64 = 0.25;

/// Fastest supported speed multiplier.
pub const MAX_SPEED: f64 = 10.0;

/// Tick period at 1x speed, in milliseconds.
pub const BASE_TICK_MS: u64 = 1000;

/// Playback controller over a step sequence.
///
/// Pure state machine: the index is always clamped to the step list and
/// reaching the final step ends auto-advance intent without wrapping.
/// The timer driving auto-advance lives in the session, not here.
pub struct Playback {
    steps: Vec<StepRecord>,
    step_index: usize,
    playing: bool,
    speed: f64,
}

impl Playback {
    /// Create a new playback controller over a step sequence.
    pub fn new(steps: Vec<StepRecord>) -> Self {
        Self {
            steps,
            step_index: 0,
            playing: false,
            speed: 1.0,
        }
    }

    /// Current step index.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Total number of steps.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Whether auto-advance is intended.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the index sits on the final step.
    pub fn at_end(&self) -> bool {
        self.step_index + 1 >= self.steps.len()
    }

    /// The step the index is standing on.
    pub fn current_step(&self) -> Option<&StepRecord> {
        self.steps.get(self.step_index)
    }

    /// Jump directly to a step, clamped to the sequence bounds.
    pub fn seek(&mut self, index: usize) {
        self.step_index = index.min(self.steps.len().saturating_sub(1));
    }

    /// Request auto-advance. A sequence already at its final step has
    /// nothing to advance and stays idle.
    pub fn play(&mut self) {
        if !self.at_end() {
            self.playing = true;
        }
    }

    /// Stop auto-advance, keeping the current index.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Set the speed multiplier, clamped to the supported range.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.speed = if multiplier.is_finite() {
            multiplier.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
    }

    /// Period between auto-advance ticks at the current speed.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis((BASE_TICK_MS as f64 / self.speed) as u64)
    }

    /// Move one step forward. At the final step the index stays put and
    /// any auto-advance intent ends.
    pub fn step_forward(&mut self) {
        self.advance_tick();
    }

    /// Move one step back, stopping at the first step.
    pub fn step_backward(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    /// One auto-advance tick. Returns whether the index moved; reaching
    /// the final step (or already sitting on it) ends playback intent
    /// without wrapping.
    pub(crate) fn advance_tick(&mut self) -> bool {
        if self.step_index + 1 < self.steps.len() {
            self.step_index += 1;
            if self.at_end() {
                self.playing = false;
            }
            true
        } else {
            self.playing = false;
            false
        }
    }

    /// Progress through the sequence, 0.0 at the first step, 1.0 at the
    /// last.
    pub fn progress(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 1.0,
            n => self.step_index as f64 / (n - 1) as f64,
        }
    }
}

/// Playback status snapshot for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub step_index: usize,
    pub total_steps: usize,
    pub playing: bool,
    pub speed: f64,
    pub progress: f64,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            step_index: playback.step_index,
            total_steps: playback.total_steps(),
            playing: playback.playing,
            speed: playback.speed,
            progress: playback.progress(),
        }
    }
}
