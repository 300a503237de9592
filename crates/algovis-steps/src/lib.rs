//! Algovis Step Expansion
//!
//! Turns algorithm traces into renderable step records for the UI layer.
//!
//! # Architecture
//!
//! - **Adapter**: replays a trace against a working copy of the fixture,
//!   one record per event, snapshots cumulative
//! - **Pseudocode**: static per-algorithm source lines plus event-kind →
//!   line-highlight maps
//!
//! # Usage
//!
//! ```
//! use algovis_steps::generate_steps;
//! use algovis_trace::AlgorithmId;
//!
//! let steps = generate_steps(AlgorithmId::BubbleSort);
//! assert!(!steps.is_empty());
//! ```

mod adapter;
mod pseudocode;
mod step;

pub use adapter::expand;
pub use pseudocode::{pseudocode, Pseudocode};
pub use step::StepRecord;

use algovis_trace::AlgorithmId;

/// Generate the full step sequence for a catalog algorithm.
///
/// Pure and deterministic: a fresh fixture is built, the algorithm runs
/// against its private copy and the trace is expanded, so repeated calls
/// yield identical records.
pub fn generate_steps(algorithm: AlgorithmId) -> Vec<StepRecord> {
    expand(&algovis_trace::run(algorithm))
}

/// Generate steps from a UI-supplied algorithm name.
///
/// An unsupported name never errors: it yields a single placeholder
/// record so downstream playback always has something to show.
pub fn generate_steps_by_name(name: &str) -> Vec<StepRecord> {
    match name.parse::<AlgorithmId>() {
        Ok(algorithm) => generate_steps(algorithm),
        Err(_) => {
            tracing::debug!(algorithm = name, "unknown algorithm requested");
            vec![StepRecord::placeholder(name)]
        }
    }
}
