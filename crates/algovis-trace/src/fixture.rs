//! Canonical input fixtures, one per catalog algorithm.
//!
//! Each invocation builds a fresh structure: fixtures are never shared
//! between runs, since several algorithms mutate their private copy's
//! links or contents in place and a stale structure must never leak into
//! the next run.

use serde::{Deserialize, Serialize};

use crate::catalog::AlgorithmId;
use crate::events::NodeId;
use crate::graph::WeightedEdge;
use crate::list::ListArena;
use crate::tree::TreeArena;

/// The unsorted array driving every sort and the linear search.
pub const SORT_INPUT: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// The sorted array driving binary search.
pub const SEARCH_INPUT: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

/// Binary search target (found at index 3).
pub const BINARY_TARGET: i64 = 25;

/// Linear search target (found at index 4 of the unsorted array).
pub const LINEAR_TARGET: i64 = 22;

/// Values of the linked-list fixtures.
pub const LIST_VALUES: [i64; 5] = [1, 2, 3, 4, 5];

/// Slot the cyclic fixture's tail links back to.
pub const CYCLE_ENTRY: usize = 2;

/// Values of the heap-shaped tree fixture.
pub const TREE_VALUES: [i64; 7] = [1, 2, 3, 4, 5, 6, 7];

/// An input structure owned by exactly one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fixture {
    /// A flat number sequence.
    Array { values: Vec<i64> },
    /// A number sequence searched for a target value.
    SearchArray { values: Vec<i64>, target: i64 },
    /// An arena-backed singly linked list.
    List(ListArena),
    /// An arena-backed binary tree.
    Tree(TreeArena),
    /// A directed graph as adjacency lists, traversed from `start`.
    Graph {
        adjacency: Vec<Vec<NodeId>>,
        start: NodeId,
    },
    /// A weighted directed graph, relaxed from `source`.
    WeightedGraph {
        edges: Vec<Vec<WeightedEdge>>,
        source: NodeId,
    },
    /// Arguments for a number-theory routine.
    Numbers { values: Vec<u64> },
}

impl Fixture {
    /// Build the canonical fixture for an algorithm. Every call returns
    /// a fresh structure.
    pub fn for_algorithm(algorithm: AlgorithmId) -> Fixture {
        match algorithm {
            AlgorithmId::BubbleSort
            | AlgorithmId::SelectionSort
            | AlgorithmId::InsertionSort
            | AlgorithmId::MergeSort
            | AlgorithmId::QuickSort => Fixture::Array {
                values: SORT_INPUT.to_vec(),
            },
            AlgorithmId::LinearSearch => Fixture::SearchArray {
                values: SORT_INPUT.to_vec(),
                target: LINEAR_TARGET,
            },
            AlgorithmId::BinarySearch => Fixture::SearchArray {
                values: SEARCH_INPUT.to_vec(),
                target: BINARY_TARGET,
            },
            AlgorithmId::GraphBfs | AlgorithmId::GraphDfs => Fixture::Graph {
                adjacency: traversal_adjacency(),
                start: NodeId(0),
            },
            AlgorithmId::Dijkstra => Fixture::WeightedGraph {
                edges: weighted_edges(),
                source: NodeId(0),
            },
            AlgorithmId::TopologicalSort => Fixture::Graph {
                adjacency: dag_adjacency(),
                start: NodeId(0),
            },
            AlgorithmId::ReverseList | AlgorithmId::FindMiddle => {
                Fixture::List(ListArena::from_values(&LIST_VALUES))
            }
            AlgorithmId::DetectCycle => {
                Fixture::List(ListArena::cyclic(&LIST_VALUES, CYCLE_ENTRY))
            }
            AlgorithmId::InorderTraversal | AlgorithmId::LevelOrder => {
                Fixture::Tree(TreeArena::from_values(&TREE_VALUES))
            }
            AlgorithmId::Gcd => Fixture::Numbers {
                values: vec![48, 18],
            },
            AlgorithmId::Lcm => Fixture::Numbers {
                values: vec![12, 18],
            },
            AlgorithmId::FastPower => Fixture::Numbers {
                values: vec![3, 13, 1_000_000_007],
            },
            AlgorithmId::PrimeCheck => Fixture::Numbers { values: vec![97] },
            AlgorithmId::Sieve => Fixture::Numbers { values: vec![30] },
            AlgorithmId::Binomial => Fixture::Numbers {
                values: vec![10, 3],
            },
            AlgorithmId::CountSetBits => Fixture::Numbers { values: vec![29] },
            AlgorithmId::PowerOfTwo => Fixture::Numbers { values: vec![64] },
            AlgorithmId::XorUnique => Fixture::Array {
                values: vec![4, 1, 2, 1, 2],
            },
            AlgorithmId::Subsets => Fixture::Array {
                values: vec![1, 2, 3],
            },
        }
    }

    /// The array this fixture renders as, if it is array-shaped.
    pub fn array_values(&self) -> Option<&[i64]> {
        match self {
            Fixture::Array { values } | Fixture::SearchArray { values, .. } => Some(values),
            _ => None,
        }
    }

    /// Number of nodes, for node-addressed fixtures.
    pub fn node_count(&self) -> Option<usize> {
        match self {
            Fixture::List(list) => Some(list.len()),
            Fixture::Tree(tree) => Some(tree.len()),
            Fixture::Graph { adjacency, .. } => Some(adjacency.len()),
            Fixture::WeightedGraph { edges, .. } => Some(edges.len()),
            _ => None,
        }
    }
}

/// The seven-node traversal graph:
///
/// ```text
/// 0 -> 1, 3      4 -> 5, 6
/// 1 -> 2, 4      2, 5, 6 -> (none)
/// 3 -> 4
/// ```
fn traversal_adjacency() -> Vec<Vec<NodeId>> {
    vec![
        vec![NodeId(1), NodeId(3)],
        vec![NodeId(2), NodeId(4)],
        vec![],
        vec![NodeId(4)],
        vec![NodeId(5), NodeId(6)],
        vec![],
        vec![],
    ]
}

/// Five-node weighted digraph whose shortest-path tree from 0 exercises
/// repeated relaxation (node 1 improves via 2, node 3 via 1).
fn weighted_edges() -> Vec<Vec<WeightedEdge>> {
    vec![
        vec![
            WeightedEdge {
                to: NodeId(1),
                weight: 4,
            },
            WeightedEdge {
                to: NodeId(2),
                weight: 1,
            },
        ],
        vec![WeightedEdge {
            to: NodeId(3),
            weight: 1,
        }],
        vec![
            WeightedEdge {
                to: NodeId(1),
                weight: 2,
            },
            WeightedEdge {
                to: NodeId(3),
                weight: 5,
            },
        ],
        vec![WeightedEdge {
            to: NodeId(4),
            weight: 3,
        }],
        vec![],
    ]
}

/// Five-node DAG for Kahn's algorithm: a diamond over 0..3 with a tail.
fn dag_adjacency() -> Vec<Vec<NodeId>> {
    vec![
        vec![NodeId(1), NodeId(2)],
        vec![NodeId(3)],
        vec![NodeId(3)],
        vec![NodeId(4)],
        vec![],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_has_a_fixture() {
        for id in AlgorithmId::ALL {
            let fixture = Fixture::for_algorithm(id);
            // Array-shaped or node-addressed or numeric, never hollow.
            let populated = fixture.array_values().map_or(false, |v| !v.is_empty())
                || fixture.node_count().map_or(false, |n| n > 0)
                || matches!(&fixture, Fixture::Numbers { values } if !values.is_empty());
            assert!(populated, "{id} has an empty fixture");
        }
    }

    #[test]
    fn fixtures_are_fresh_per_invocation() {
        let a = Fixture::for_algorithm(AlgorithmId::ReverseList);
        let b = Fixture::for_algorithm(AlgorithmId::ReverseList);
        assert_eq!(a, b);
    }

    #[test]
    fn cycle_fixture_is_cyclic() {
        let Fixture::List(list) = Fixture::for_algorithm(AlgorithmId::DetectCycle) else {
            panic!("cycle fixture must be a list");
        };
        let tail = NodeId(LIST_VALUES.len() - 1);
        assert_eq!(list.next(tail), Some(NodeId(CYCLE_ENTRY)));
    }

    #[test]
    fn binary_target_sits_at_index_three() {
        let Fixture::SearchArray { values, target } =
            Fixture::for_algorithm(AlgorithmId::BinarySearch)
        else {
            panic!("binary search fixture must carry a target");
        };
        assert_eq!(values[3], target);
    }
}
