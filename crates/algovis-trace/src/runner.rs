//! Runs a catalog algorithm against its canonical fixture.

use serde::{Deserialize, Serialize};

use crate::catalog::AlgorithmId;
use crate::events::{NodeId, TraceEvent};
use crate::fixture::Fixture;
use crate::{graph, list, numeric, searching, sorting, tree};

/// The typed result of an algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A sorted array
    Sorted(Vec<i64>),
    /// The index a search landed on, if any
    FoundIndex(Option<usize>),
    /// The new head after a list rewrite
    NewHead(Option<NodeId>),
    /// Whether a cycle was detected
    CycleDetected(bool),
    /// The middle node of a list
    Middle(Option<NodeId>),
    /// A traversal's value sequence
    Values(Vec<i64>),
    /// A traversal's node order
    Order(Vec<NodeId>),
    /// Tentative distances per node (`None` = unreachable)
    Distances(Vec<Option<u64>>),
    /// A topological order, or `None` when the graph has a cycle
    Topological(Option<Vec<NodeId>>),
    /// A single computed number
    Number(u64),
    /// A yes/no answer
    Flag(bool),
    /// A computed number sequence
    Numbers(Vec<u64>),
    /// The value appearing an odd number of times, if any
    Unique(Option<i64>),
    /// All generated subsets
    Subsets(Vec<Vec<i64>>),
    /// The run degraded to a no-op
    Nothing,
}

/// One complete algorithm run: the fixture it consumed, the outcome it
/// produced and the ordered trace in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    pub algorithm: AlgorithmId,
    pub fixture: Fixture,
    pub outcome: Outcome,
    pub trace: Vec<TraceEvent>,
}

/// Build a fresh canonical fixture for `algorithm` and run it.
///
/// Deterministic: two calls with the same algorithm produce identical
/// runs, since fixtures are rebuilt from constants and nothing is shared
/// between invocations.
pub fn run(algorithm: AlgorithmId) -> AlgorithmRun {
    let fixture = Fixture::for_algorithm(algorithm);
    let (outcome, trace) = dispatch(algorithm, &fixture);
    tracing::debug!(
        algorithm = %algorithm,
        events = trace.len(),
        "generated trace"
    );
    AlgorithmRun {
        algorithm,
        fixture,
        outcome,
        trace,
    }
}

fn dispatch(algorithm: AlgorithmId, fixture: &Fixture) -> (Outcome, Vec<TraceEvent>) {
    match (algorithm, fixture) {
        (AlgorithmId::BubbleSort, Fixture::Array { values }) => {
            let run = sorting::bubble_sort(values);
            (Outcome::Sorted(run.result), run.trace)
        }
        (AlgorithmId::SelectionSort, Fixture::Array { values }) => {
            let run = sorting::selection_sort(values);
            (Outcome::Sorted(run.result), run.trace)
        }
        (AlgorithmId::InsertionSort, Fixture::Array { values }) => {
            let run = sorting::insertion_sort(values);
            (Outcome::Sorted(run.result), run.trace)
        }
        (AlgorithmId::MergeSort, Fixture::Array { values }) => {
            let run = sorting::merge_sort(values);
            (Outcome::Sorted(run.result), run.trace)
        }
        (AlgorithmId::QuickSort, Fixture::Array { values }) => {
            let run = sorting::quick_sort(values);
            (Outcome::Sorted(run.result), run.trace)
        }
        (AlgorithmId::LinearSearch, Fixture::SearchArray { values, target }) => {
            let run = searching::linear_search(values, *target);
            (Outcome::FoundIndex(run.result), run.trace)
        }
        (AlgorithmId::BinarySearch, Fixture::SearchArray { values, target }) => {
            let run = searching::binary_search(values, *target);
            (Outcome::FoundIndex(run.result), run.trace)
        }
        (AlgorithmId::GraphBfs, Fixture::Graph { adjacency, start }) => {
            let run = graph::bfs(adjacency, *start);
            (Outcome::Order(run.result), run.trace)
        }
        (AlgorithmId::GraphDfs, Fixture::Graph { adjacency, start }) => {
            let run = graph::dfs(adjacency, *start);
            (Outcome::Order(run.result), run.trace)
        }
        (AlgorithmId::Dijkstra, Fixture::WeightedGraph { edges, source }) => {
            let run = graph::dijkstra(edges, *source);
            (Outcome::Distances(run.result), run.trace)
        }
        (AlgorithmId::TopologicalSort, Fixture::Graph { adjacency, .. }) => {
            let run = graph::topological_sort(adjacency);
            (Outcome::Topological(run.result), run.trace)
        }
        (AlgorithmId::ReverseList, Fixture::List(arena)) => {
            let run = list::reverse_list(arena);
            (Outcome::NewHead(run.result), run.trace)
        }
        (AlgorithmId::DetectCycle, Fixture::List(arena)) => {
            let run = list::detect_cycle(arena);
            (Outcome::CycleDetected(run.result), run.trace)
        }
        (AlgorithmId::FindMiddle, Fixture::List(arena)) => {
            let run = list::find_middle(arena);
            (Outcome::Middle(run.result), run.trace)
        }
        (AlgorithmId::InorderTraversal, Fixture::Tree(arena)) => {
            let run = tree::inorder_traversal(arena);
            (Outcome::Values(run.result), run.trace)
        }
        (AlgorithmId::LevelOrder, Fixture::Tree(arena)) => {
            let run = tree::level_order(arena);
            (Outcome::Values(run.result), run.trace)
        }
        (AlgorithmId::Gcd, Fixture::Numbers { values }) => {
            let (a, b) = pair(values);
            let run = numeric::gcd(a, b);
            (Outcome::Number(run.result), run.trace)
        }
        (AlgorithmId::Lcm, Fixture::Numbers { values }) => {
            let (a, b) = pair(values);
            let run = numeric::lcm(a, b);
            (Outcome::Number(run.result), run.trace)
        }
        (AlgorithmId::FastPower, Fixture::Numbers { values }) => {
            let base = values.first().copied().unwrap_or(0);
            let exp = values.get(1).copied().unwrap_or(0);
            let modulus = values.get(2).copied().unwrap_or(0);
            let run = numeric::fast_power(base, exp, modulus);
            (Outcome::Number(run.result), run.trace)
        }
        (AlgorithmId::PrimeCheck, Fixture::Numbers { values }) => {
            let run = numeric::is_prime(values.first().copied().unwrap_or(0));
            (Outcome::Flag(run.result), run.trace)
        }
        (AlgorithmId::Sieve, Fixture::Numbers { values }) => {
            let run = numeric::sieve(values.first().copied().unwrap_or(0));
            (Outcome::Numbers(run.result), run.trace)
        }
        (AlgorithmId::Binomial, Fixture::Numbers { values }) => {
            let (n, r) = pair(values);
            let run = numeric::binomial(n, r);
            (Outcome::Number(run.result), run.trace)
        }
        (AlgorithmId::CountSetBits, Fixture::Numbers { values }) => {
            let run = numeric::count_set_bits(values.first().copied().unwrap_or(0));
            (Outcome::Number(run.result as u64), run.trace)
        }
        (AlgorithmId::PowerOfTwo, Fixture::Numbers { values }) => {
            let run = numeric::is_power_of_two(values.first().copied().unwrap_or(0));
            (Outcome::Flag(run.result), run.trace)
        }
        (AlgorithmId::XorUnique, Fixture::Array { values }) => {
            let run = numeric::xor_unique(values);
            (Outcome::Unique(run.result), run.trace)
        }
        (AlgorithmId::Subsets, Fixture::Array { values }) => {
            let run = numeric::subsets(values);
            (Outcome::Subsets(run.result), run.trace)
        }
        // Fixture shape mismatches cannot arise from `Fixture::for_algorithm`;
        // degrade to a no-op rather than panic.
        _ => (Outcome::Nothing, Vec::new()),
    }
}

fn pair(values: &[u64]) -> (u64, u64) {
    (
        values.first().copied().unwrap_or(0),
        values.get(1).copied().unwrap_or(0),
    )
}
