//! Trace events emitted by instrumented algorithm runs.

use serde::{Deserialize, Serialize};

/// A unique node identifier within a fixture arena.
///
/// Lists, trees and graphs all expose their nodes by stable arena slot
/// index, never by address, so traces stay meaningful after the private
/// working copy has been mutated (e.g. a reversed list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A named cursor tracked by the visualizer.
///
/// Closed set: every algorithm in the catalog names its cursors from this
/// list. Array cursors carry an index, list cursors a node id, number
/// theory cursors the current value of their loop variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// Lower bound of a search window
    Left,
    /// Upper bound of a search window
    Right,
    /// Tortoise pointer (one step per iteration)
    Slow,
    /// Hare pointer (two steps per iteration)
    Fast,
    /// The element being inserted
    Key,
    /// Partition pivot
    Pivot,
    /// Current list node
    Curr,
    /// Previous list node
    Prev,
    /// Boundary of the settled prefix
    Sorted,
    /// First operand of a remainder loop
    A,
    /// Second operand of a remainder loop
    B,
    /// Current prime in a sieve
    P,
    /// Subset selection mask
    Mask,
    /// Exponent bit position
    Bit,
    /// Generic loop counter
    I,
}

impl Cursor {
    /// Lowercase display name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Cursor::Left => "left",
            Cursor::Right => "right",
            Cursor::Slow => "slow",
            Cursor::Fast => "fast",
            Cursor::Key => "key",
            Cursor::Pivot => "pivot",
            Cursor::Curr => "curr",
            Cursor::Prev => "prev",
            Cursor::Sorted => "sorted",
            Cursor::A => "a",
            Cursor::B => "b",
            Cursor::P => "p",
            Cursor::Mask => "mask",
            Cursor::Bit => "bit",
            Cursor::I => "i",
        }
    }
}

/// One atomic, order-significant operation performed by an algorithm.
///
/// Events are appended in the exact temporal order the algorithm performs
/// the corresponding logical operation; nothing is emitted speculatively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TraceEvent {
    /// Elements at `i` and `j` were compared. `j: None` means element `i`
    /// was compared against the search target.
    Compare { i: usize, j: Option<usize> },

    /// Elements at `i` and `j` were exchanged in place.
    Swap { i: usize, j: usize },

    /// An element moved without a swap (insertion-sort displacement).
    Shift { from: usize, to: usize },

    /// A value was written into a position.
    Insert { index: usize, value: i64 },

    /// A named cursor moved. `index: None` means the cursor fell off the
    /// structure (null pointer, exhausted window).
    MovePointer { name: Cursor, index: Option<usize> },

    /// A node was visited (order-significant, at most once per node for
    /// graph traversals).
    Visit { node: NodeId },

    /// Queue contents immediately after a mutation.
    QueueSnapshot { state: Vec<NodeId> },

    /// Stack contents immediately after a mutation.
    StackSnapshot { state: Vec<NodeId> },

    /// A tentative shortest-path distance improved.
    Relax { node: NodeId, distance: u64 },

    /// Terminal success signal.
    Found {
        index: Option<usize>,
        node: Option<NodeId>,
    },
}

/// Discriminant-only view of [`TraceEvent`], used to key the pseudocode
/// line-highlight tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Compare,
    Swap,
    Shift,
    Insert,
    MovePointer,
    Visit,
    QueueSnapshot,
    StackSnapshot,
    Relax,
    Found,
}

impl TraceEvent {
    /// Get the discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            TraceEvent::Compare { .. } => EventKind::Compare,
            TraceEvent::Swap { .. } => EventKind::Swap,
            TraceEvent::Shift { .. } => EventKind::Shift,
            TraceEvent::Insert { .. } => EventKind::Insert,
            TraceEvent::MovePointer { .. } => EventKind::MovePointer,
            TraceEvent::Visit { .. } => EventKind::Visit,
            TraceEvent::QueueSnapshot { .. } => EventKind::QueueSnapshot,
            TraceEvent::StackSnapshot { .. } => EventKind::StackSnapshot,
            TraceEvent::Relax { .. } => EventKind::Relax,
            TraceEvent::Found { .. } => EventKind::Found,
        }
    }

    /// Whether replaying this event mutates the working array.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            TraceEvent::Swap { .. } | TraceEvent::Shift { .. } | TraceEvent::Insert { .. }
        )
    }
}

/// An algorithm result paired with the ordered trace that produced it.
#[derive(Debug, Clone)]
pub struct Traced<T> {
    pub result: T,
    pub trace: Vec<TraceEvent>,
}

impl<T> Traced<T> {
    /// Wrap a result with its trace.
    pub fn new(result: T, trace: Vec<TraceEvent>) -> Self {
        Self { result, trace }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization() {
        let event = TraceEvent::Compare { i: 2, j: Some(3) };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Compare"));
        assert!(json.contains("\"type\""));

        let parsed: TraceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn pointer_serialization_uses_lowercase_names() {
        let event = TraceEvent::MovePointer {
            name: Cursor::Slow,
            index: None,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"slow\""));
        assert_eq!(Cursor::Slow.name(), "slow");
    }

    #[test]
    fn mutation_classification() {
        assert!(TraceEvent::Swap { i: 0, j: 1 }.is_mutation());
        assert!(TraceEvent::Insert { index: 0, value: 1 }.is_mutation());
        assert!(!TraceEvent::Visit { node: NodeId(0) }.is_mutation());
        assert!(!TraceEvent::Compare { i: 0, j: None }.is_mutation());
    }

    #[test]
    fn kind_matches_variant() {
        let event = TraceEvent::Relax {
            node: NodeId(3),
            distance: 7,
        };
        assert_eq!(event.kind(), EventKind::Relax);
    }
}
