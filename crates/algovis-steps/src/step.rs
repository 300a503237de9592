//! Renderable step records derived from algorithm traces.

use algovis_trace::NodeId;
use serde::{Deserialize, Serialize};

/// One renderable frame of a visualization.
///
/// Derived, never authoritative: records are produced by replaying a
/// trace against a working copy of the fixture, so `array` reflects the
/// cumulative effect of every mutating event up to this point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Human-readable description of the step
    pub description: String,
    /// Indices (or node ids) to highlight
    pub highlighted: Vec<usize>,
    /// Working array contents, for array-shaped fixtures
    pub array: Option<Vec<i64>>,
    /// Positions settled in their final place
    pub sorted: Vec<usize>,
    /// Current partition pivot
    pub pivot: Option<usize>,
    /// Lower search bound
    pub left: Option<usize>,
    /// Upper search bound
    pub right: Option<usize>,
    /// Most recently probed index
    pub mid: Option<usize>,
    /// Whether this step is a terminal success
    pub found: bool,
    /// Nodes visited so far, in visit order
    pub visited: Vec<NodeId>,
    /// Queue contents, for queue-driven algorithms
    pub queue: Option<Vec<NodeId>>,
    /// Stack contents, for stack-driven algorithms
    pub stack: Option<Vec<NodeId>>,
    /// The node the algorithm is standing on
    pub current: Option<NodeId>,
    /// Tentative distances per node (`None` = infinity)
    pub distances: Option<Vec<Option<u64>>>,
    /// Pseudocode lines to highlight for this step
    pub code_lines: Vec<usize>,
}

impl StepRecord {
    /// The placeholder record used when no steps could be generated,
    /// so playback never operates on an empty list.
    pub fn placeholder(name: &str) -> Self {
        Self {
            description: format!("No steps generated for \"{name}\""),
            ..Self::default()
        }
    }
}
