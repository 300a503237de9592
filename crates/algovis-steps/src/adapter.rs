//! Replays a trace against a working copy of the fixture, producing one
//! step record per event.
//!
//! Mutating events (swap, shift, insert) are applied to the working
//! array in emission order, so every record's snapshot reflects the
//! cumulative effect of all prior events. Annotating events decorate the
//! record without touching the working copy.

use algovis_trace::{AlgorithmRun, Cursor, Fixture, NodeId, TraceEvent};

use crate::pseudocode::{pseudocode, Pseudocode};
use crate::step::StepRecord;

/// Expand an algorithm run into renderable step records.
///
/// An intro record describing the fixture always comes first; if the
/// trace is empty it is the only record, so downstream playback never
/// sees an empty list.
pub fn expand(run: &AlgorithmRun) -> Vec<StepRecord> {
    let code = pseudocode(run.algorithm);
    let mut replay = Replay::new(&run.fixture);

    let mut steps = Vec::with_capacity(run.trace.len() + 1);
    steps.push(replay.intro(&run.fixture));
    for event in &run.trace {
        steps.push(replay.apply(event, code));
    }
    tracing::debug!(
        algorithm = %run.algorithm,
        steps = steps.len(),
        "expanded trace"
    );
    steps
}

/// Working state accumulated while replaying a trace.
struct Replay {
    array: Option<Vec<i64>>,
    sorted: Vec<usize>,
    visited: Vec<NodeId>,
    distances: Option<Vec<Option<u64>>>,
    queue: Option<Vec<NodeId>>,
    stack: Option<Vec<NodeId>>,
    pivot: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
    mid: Option<usize>,
    current: Option<NodeId>,
}

impl Replay {
    fn new(fixture: &Fixture) -> Self {
        let distances = match fixture {
            Fixture::WeightedGraph { edges, source } => {
                let mut dist = vec![None; edges.len()];
                if let Some(slot) = dist.get_mut(source.0) {
                    *slot = Some(0);
                }
                Some(dist)
            }
            _ => None,
        };
        Self {
            array: fixture.array_values().map(<[i64]>::to_vec),
            sorted: Vec::new(),
            visited: Vec::new(),
            distances,
            queue: None,
            stack: None,
            pivot: None,
            left: None,
            right: None,
            mid: None,
            current: None,
        }
    }

    fn intro(&self, fixture: &Fixture) -> StepRecord {
        let description = match fixture {
            Fixture::Array { values } => format!("Initial array {values:?}"),
            Fixture::SearchArray { values, target } => {
                format!("Searching for {target} in {values:?}")
            }
            Fixture::List(list) => format!("Linked list with {} nodes", list.len()),
            Fixture::Tree(tree) => format!("Binary tree with {} nodes", tree.len()),
            Fixture::Graph { adjacency, start } => format!(
                "Graph with {} nodes, starting at node {}",
                adjacency.len(),
                start.0
            ),
            Fixture::WeightedGraph { edges, source } => format!(
                "Weighted graph with {} nodes, source node {}",
                edges.len(),
                source.0
            ),
            Fixture::Numbers { values } => format!("Inputs {values:?}"),
        };
        self.record(description, Vec::new(), false, &[])
    }

    fn apply(&mut self, event: &TraceEvent, code: &Pseudocode) -> StepRecord {
        let code_lines = code.highlight(event.kind());
        match event {
            TraceEvent::Compare { i, j: Some(j) } => {
                let description = match self.values(*i, *j) {
                    Some((x, y)) => format!("Compare {x} and {y}"),
                    None => format!("Compare positions {i} and {j}"),
                };
                self.record(description, vec![*i, *j], false, code_lines)
            }
            TraceEvent::Compare { i, j: None } => {
                self.mid = Some(*i);
                let description = match self.value(*i) {
                    Some(x) => format!("Check {x} against the target"),
                    None => format!("Probe {i}"),
                };
                self.record(description, vec![*i], false, code_lines)
            }
            TraceEvent::Swap { i, j } => {
                let description = match self.values(*i, *j) {
                    Some((x, y)) => format!("Swap {x} and {y}"),
                    None => format!("Swap positions {i} and {j}"),
                };
                if let Some(array) = self.array.as_mut() {
                    if *i < array.len() && *j < array.len() {
                        array.swap(*i, *j);
                    }
                }
                self.record(description, vec![*i, *j], false, code_lines)
            }
            TraceEvent::Shift { from, to } => {
                let description = match self.value(*from) {
                    Some(x) => format!("Shift {x} from position {from} to {to}"),
                    None => format!("Shift position {from} to {to}"),
                };
                if let Some(array) = self.array.as_mut() {
                    if *from < array.len() && *to < array.len() {
                        array[*to] = array[*from];
                    }
                }
                self.record(description, vec![*from, *to], false, code_lines)
            }
            TraceEvent::Insert { index, value } => {
                let description = if let Some(array) = self.array.as_mut() {
                    if *index < array.len() {
                        array[*index] = *value;
                    }
                    format!("Write {value} into position {index}")
                } else {
                    format!("Update running value to {value}")
                };
                self.record(description, vec![*index], false, code_lines)
            }
            TraceEvent::MovePointer { name, index } => {
                let description = match index {
                    Some(i) => format!("Move {} to {i}", name.name()),
                    None => format!("Move {} off the end", name.name()),
                };
                match name {
                    Cursor::Left => self.left = *index,
                    Cursor::Right => self.right = *index,
                    Cursor::Pivot => self.pivot = *index,
                    Cursor::Sorted => {
                        if let Some(i) = index {
                            if !self.sorted.contains(i) {
                                self.sorted.push(*i);
                            }
                        }
                    }
                    Cursor::Curr | Cursor::Slow => self.current = index.map(NodeId),
                    _ => {}
                }
                let highlighted = index.map(|i| vec![i]).unwrap_or_default();
                self.record(description, highlighted, false, code_lines)
            }
            TraceEvent::Visit { node } => {
                if !self.visited.contains(node) {
                    self.visited.push(*node);
                }
                self.current = Some(*node);
                self.record(
                    format!("Visit node {}", node.0),
                    vec![node.0],
                    false,
                    code_lines,
                )
            }
            TraceEvent::QueueSnapshot { state } => {
                self.queue = Some(state.clone());
                self.record(
                    format!("Queue is now [{}]", fmt_nodes(state)),
                    Vec::new(),
                    false,
                    code_lines,
                )
            }
            TraceEvent::StackSnapshot { state } => {
                self.stack = Some(state.clone());
                self.record(
                    format!("Stack is now [{}]", fmt_nodes(state)),
                    Vec::new(),
                    false,
                    code_lines,
                )
            }
            TraceEvent::Relax { node, distance } => {
                if let Some(distances) = self.distances.as_mut() {
                    if let Some(slot) = distances.get_mut(node.0) {
                        *slot = Some(*distance);
                    }
                }
                self.record(
                    format!("Relax node {} to distance {distance}", node.0),
                    vec![node.0],
                    false,
                    code_lines,
                )
            }
            TraceEvent::Found { index, node } => {
                let (description, highlighted) = match (index, node) {
                    (Some(i), _) => (format!("Found at index {i}"), vec![*i]),
                    (None, Some(n)) => {
                        self.current = Some(*n);
                        (format!("Found node {}", n.0), vec![n.0])
                    }
                    (None, None) => ("Found nothing".to_string(), Vec::new()),
                };
                self.record(description, highlighted, true, code_lines)
            }
        }
    }

    fn record(
        &self,
        description: String,
        highlighted: Vec<usize>,
        found: bool,
        code_lines: &[usize],
    ) -> StepRecord {
        StepRecord {
            description,
            highlighted,
            array: self.array.clone(),
            sorted: self.sorted.clone(),
            pivot: self.pivot,
            left: self.left,
            right: self.right,
            mid: self.mid,
            found,
            visited: self.visited.clone(),
            queue: self.queue.clone(),
            stack: self.stack.clone(),
            current: self.current,
            distances: self.distances.clone(),
            code_lines: code_lines.to_vec(),
        }
    }

    fn value(&self, i: usize) -> Option<i64> {
        self.array.as_ref().and_then(|a| a.get(i).copied())
    }

    fn values(&self, i: usize, j: usize) -> Option<(i64, i64)> {
        Some((self.value(i)?, self.value(j)?))
    }
}

fn fmt_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.0.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use algovis_trace::{run, AlgorithmId, Outcome};

    #[test]
    fn intro_record_comes_first() {
        let steps = expand(&run(AlgorithmId::BubbleSort));
        assert!(steps[0].description.starts_with("Initial array"));
        assert_eq!(steps[0].array.as_deref(), Some(&[64, 34, 25, 12, 22, 11, 90][..]));
    }

    #[test]
    fn final_snapshot_is_the_sorted_array() {
        let run = run(AlgorithmId::BubbleSort);
        let steps = expand(&run);
        let last = steps.last().unwrap();
        let Outcome::Sorted(expected) = &run.outcome else {
            panic!("bubble sort must report a sorted outcome");
        };
        assert_eq!(last.array.as_ref(), Some(expected));
    }

    #[test]
    fn snapshots_accumulate_mutations_in_order() {
        let run = run(AlgorithmId::QuickSort);
        let steps = expand(&run);
        // Each record with an array differs from its predecessor only by
        // the effect of its own event.
        let mut previous = steps[0].array.clone().unwrap();
        for step in &steps[1..] {
            let current = step.array.clone().unwrap();
            let mut sorted_prev = previous.clone();
            let mut sorted_curr = current.clone();
            sorted_prev.sort_unstable();
            sorted_curr.sort_unstable();
            // Swaps permute, they never lose elements.
            assert_eq!(sorted_prev, sorted_curr);
            previous = current;
        }
    }

    #[test]
    fn binary_search_records_track_bounds_and_probe() {
        let steps = expand(&run(AlgorithmId::BinarySearch));
        // First probe lands at the canonical target's slot.
        let probe = &steps[1];
        assert_eq!(probe.mid, Some(3));
        assert!(probe.description.contains("25"));
        let last = steps.last().unwrap();
        assert!(last.found);
        assert_eq!(last.highlighted, vec![3]);
    }

    #[test]
    fn bfs_records_carry_queue_and_visit_order() {
        let steps = expand(&run(AlgorithmId::GraphBfs));
        assert!(steps[1].queue.is_some());
        let last = steps.last().unwrap();
        let visited: Vec<usize> = last.visited.iter().map(|n| n.0).collect();
        assert_eq!(visited, vec![0, 1, 3, 2, 4, 5, 6]);
    }

    #[test]
    fn dijkstra_records_accumulate_distances() {
        let steps = expand(&run(AlgorithmId::Dijkstra));
        let intro = &steps[0];
        assert_eq!(
            intro.distances,
            Some(vec![Some(0), None, None, None, None])
        );
        let last = steps.last().unwrap();
        assert_eq!(
            last.distances,
            Some(vec![Some(0), Some(3), Some(1), Some(4), Some(7)])
        );
    }

    #[test]
    fn selection_sort_settles_positions_left_to_right() {
        let steps = expand(&run(AlgorithmId::SelectionSort));
        let last = steps.last().unwrap();
        assert_eq!(last.sorted, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_record_highlights_only_known_code_lines() {
        for id in AlgorithmId::ALL {
            let code = pseudocode(id);
            for step in expand(&run(id)) {
                for &line in &step.code_lines {
                    assert!(line < code.lines.len(), "{id} step points past its code");
                }
            }
        }
    }

    #[test]
    fn empty_trace_still_yields_the_intro_record() {
        let run = AlgorithmRun {
            algorithm: AlgorithmId::BinarySearch,
            fixture: Fixture::SearchArray {
                values: Vec::new(),
                target: 5,
            },
            outcome: Outcome::FoundIndex(None),
            trace: Vec::new(),
        };
        let steps = expand(&run);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].description.contains("Searching for 5"));
    }
}
