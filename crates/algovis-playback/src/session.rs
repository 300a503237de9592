//! A visualizer session: one selected algorithm, its generated steps and
//! the timer driving auto-advance.
//!
//! The session owns the only timer handle. Every transition that ends
//! auto-advance (pause, boundary, reset, algorithm switch, teardown)
//! aborts the outstanding tick task before anything else, so a dangling
//! timer can never fire against stale state. At most one tick task
//! exists at a time: spawn always aborts first.

use std::sync::Arc;

use algovis_steps::{generate_steps, StepRecord};
use algovis_trace::AlgorithmId;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::playback::{Playback, PlaybackStatus};

/// An interactive playback session over one algorithm's steps.
pub struct Session {
    algorithm: AlgorithmId,
    epoch: u64,
    shared: Arc<RwLock<Playback>>,
    ticker: Option<JoinHandle<()>>,
}

impl Session {
    /// Create a session with a freshly generated step sequence.
    pub fn new(algorithm: AlgorithmId) -> Self {
        let steps = generate_steps(algorithm);
        Self {
            algorithm,
            epoch: 0,
            shared: Arc::new(RwLock::new(Playback::new(steps))),
            ticker: None,
        }
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// The current fixture/trace generation. Bumped on every reset or
    /// algorithm switch, each bump regenerating fixture, trace and steps
    /// from scratch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start auto-advance. A session already at its final step stays
    /// idle.
    pub async fn play(&mut self) {
        {
            let mut playback = self.shared.write().await;
            if playback.at_end() {
                return;
            }
            playback.play();
        }
        self.spawn_ticker();
        tracing::debug!(algorithm = %self.algorithm, "auto-advance started");
    }

    /// Stop auto-advance at the current index. No tick can fire after
    /// this returns.
    pub async fn pause(&mut self) {
        self.cancel_ticker();
        self.shared.write().await.pause();
        tracing::debug!(algorithm = %self.algorithm, "auto-advance paused");
    }

    /// Move one step forward; at the final step this stops any active
    /// auto-advance instead of wrapping.
    pub async fn step_forward(&mut self) {
        let playing = {
            let mut playback = self.shared.write().await;
            playback.step_forward();
            playback.is_playing()
        };
        if !playing {
            self.cancel_ticker();
        }
    }

    /// Move one step back.
    pub async fn step_backward(&mut self) {
        self.shared.write().await.step_backward();
    }

    /// Jump to a step, clamped to the sequence bounds.
    pub async fn seek(&mut self, index: usize) {
        self.shared.write().await.seek(index);
    }

    /// Change the speed multiplier. While auto-advancing, the timer is
    /// rescheduled at the new period without losing the current index.
    pub async fn set_speed(&mut self, multiplier: f64) {
        let playing = {
            let mut playback = self.shared.write().await;
            playback.set_speed(multiplier);
            playback.is_playing()
        };
        if playing {
            self.spawn_ticker();
        }
    }

    /// Rewind to the first step on a freshly generated trace.
    ///
    /// Bumps the epoch: the fixture and trace are rebuilt from scratch,
    /// so structures mutated by the previous run (a reversed list, a
    /// sorted array) come back fresh rather than replaying stale.
    pub async fn reset(&mut self) {
        self.cancel_ticker();
        self.rebuild().await;
        tracing::debug!(algorithm = %self.algorithm, epoch = self.epoch, "reset");
    }

    /// Switch to another algorithm, forcing idle-at-zero with a freshly
    /// generated trace.
    pub async fn select(&mut self, algorithm: AlgorithmId) {
        self.cancel_ticker();
        self.algorithm = algorithm;
        self.rebuild().await;
        tracing::debug!(algorithm = %self.algorithm, epoch = self.epoch, "algorithm selected");
    }

    /// Current transport status.
    pub async fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(&*self.shared.read().await)
    }

    /// The step record the session is standing on.
    pub async fn current_step(&self) -> Option<StepRecord> {
        self.shared.read().await.current_step().cloned()
    }

    async fn rebuild(&mut self) {
        self.epoch += 1;
        let speed = self.shared.read().await.speed();
        let mut playback = Playback::new(generate_steps(self.algorithm));
        playback.set_speed(speed);
        *self.shared.write().await = playback;
    }

    fn spawn_ticker(&mut self) {
        self.cancel_ticker();
        let shared = Arc::clone(&self.shared);
        self.ticker = Some(tokio::spawn(async move {
            loop {
                let period = { shared.read().await.tick_period() };
                tokio::time::sleep(period).await;
                let mut playback = shared.write().await;
                if !playback.is_playing() {
                    break;
                }
                playback.advance_tick();
                if !playback.is_playing() {
                    break;
                }
            }
        }));
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}
