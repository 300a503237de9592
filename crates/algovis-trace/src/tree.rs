//! Binary tree arena and its traversals.
//!
//! Trees are heap-shaped over a value array: the children of slot `i`
//! are slots `2i + 1` and `2i + 2`. Ids are arena indices, so traversal
//! traces refer to stable slots rather than node addresses.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::events::{NodeId, TraceEvent, Traced};

/// An arena-backed binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeArena {
    values: Vec<i64>,
}

impl TreeArena {
    /// Build a heap-shaped tree from a value array.
    pub fn from_values(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Root slot, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        if self.values.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value stored at a node.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.values.get(id.0).copied()
    }

    /// Left child of a node.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        let child = 2 * id.0 + 1;
        (child < self.values.len()).then_some(NodeId(child))
    }

    /// Right child of a node.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        let child = 2 * id.0 + 2;
        (child < self.values.len()).then_some(NodeId(child))
    }
}

/// In-order DFS: left subtree, node, right subtree. The `Visit` order is
/// exactly the standard in-order sequence.
pub fn inorder_traversal(tree: &TreeArena) -> Traced<Vec<i64>> {
    let mut trace = Vec::new();
    let mut result = Vec::new();
    inorder_visit(tree, tree.root(), &mut result, &mut trace);
    Traced::new(result, trace)
}

fn inorder_visit(
    tree: &TreeArena,
    node: Option<NodeId>,
    result: &mut Vec<i64>,
    trace: &mut Vec<TraceEvent>,
) {
    let Some(n) = node else { return };
    inorder_visit(tree, tree.left(n), result, trace);
    trace.push(TraceEvent::Visit { node: n });
    if let Some(value) = tree.value(n) {
        result.push(value);
    }
    inorder_visit(tree, tree.right(n), result, trace);
}

/// Level-order BFS over the tree. A queue snapshot is emitted after
/// every enqueue (the seed included) and a `Visit` after every dequeue,
/// preserving FIFO order.
pub fn level_order(tree: &TreeArena) -> Traced<Vec<i64>> {
    let mut trace = Vec::new();
    let mut result = Vec::new();

    let Some(root) = tree.root() else {
        return Traced::new(result, trace);
    };

    let mut queue = VecDeque::from([root]);
    trace.push(TraceEvent::QueueSnapshot { state: vec![root] });
    while let Some(node) = queue.pop_front() {
        trace.push(TraceEvent::Visit { node });
        if let Some(value) = tree.value(node) {
            result.push(value);
        }
        if let Some(left) = tree.left(node) {
            queue.push_back(left);
            trace.push(TraceEvent::QueueSnapshot {
                state: queue.iter().copied().collect(),
            });
        }
        if let Some(right) = tree.right(node) {
            queue.push_back(right);
            trace.push(TraceEvent::QueueSnapshot {
                state: queue.iter().copied().collect(),
            });
        }
    }

    Traced::new(result, trace)
}
