//! Algovis Playback
//!
//! Time-indexed, steppable, speed-controlled playback over generated
//! step sequences.
//!
//! # Architecture
//!
//! - **Playback**: pure state machine over a step list (index, playing
//!   flag, speed), always clamped, never wrapping
//! - **Session**: owns the selected algorithm, the regeneration epoch
//!   and the single auto-advance timer task
//!
//! All trace generation is synchronous and completes before any step is
//! exposed; the timer is the only asynchronous element, and the session
//! guarantees at most one outstanding tick task.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = Session::new(AlgorithmId::BubbleSort);
//! session.play().await;
//! // ... transport commands from the UI ...
//! session.pause().await;
//! ```

mod playback;
mod session;

pub use playback::{Playback, PlaybackStatus, BASE_TICK_MS, MAX_SPEED, MIN_SPEED};
pub use session::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use algovis_steps::generate_steps;
    use algovis_trace::AlgorithmId;

    #[test]
    fn playback_over_generated_steps_respects_bounds() {
        let steps = generate_steps(AlgorithmId::BinarySearch);
        let total = steps.len();
        let mut playback = Playback::new(steps);

        playback.seek(total / 2);
        assert_eq!(playback.step_index(), total / 2);

        playback.seek(usize::MAX);
        assert_eq!(playback.step_index(), total - 1);
    }

    #[test]
    fn placeholder_sequences_still_play_back() {
        let steps = algovis_steps::generate_steps_by_name("Bogo Sort");
        let mut playback = Playback::new(steps);
        assert_eq!(playback.total_steps(), 1);

        // A single-record sequence is already at its end.
        playback.play();
        assert!(!playback.is_playing());
        playback.step_forward();
        assert_eq!(playback.step_index(), 0);
    }
}
