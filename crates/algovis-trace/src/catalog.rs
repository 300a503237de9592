//! The fixed, closed catalog of supported algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur resolving catalog entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The name does not match any supported algorithm
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Algorithm family, used to group the catalog for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Sorting,
    Searching,
    Graphs,
    LinkedList,
    Tree,
    NumberTheory,
}

impl Family {
    /// All families in catalog order.
    pub const ALL: [Family; 6] = [
        Family::Sorting,
        Family::Searching,
        Family::Graphs,
        Family::LinkedList,
        Family::Tree,
        Family::NumberTheory,
    ];

    /// Human-readable family title.
    pub fn title(&self) -> &'static str {
        match self {
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
            Family::Graphs => "Graphs",
            Family::LinkedList => "Linked List",
            Family::Tree => "Tree",
            Family::NumberTheory => "Number Theory",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One supported algorithm. The catalog is closed: the visualizer runs
/// these and nothing else, each against its own canonical fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    GraphBfs,
    GraphDfs,
    Dijkstra,
    TopologicalSort,
    ReverseList,
    DetectCycle,
    FindMiddle,
    InorderTraversal,
    LevelOrder,
    Gcd,
    Lcm,
    FastPower,
    PrimeCheck,
    Sieve,
    Binomial,
    CountSetBits,
    PowerOfTwo,
    XorUnique,
    Subsets,
}

impl AlgorithmId {
    /// Every supported algorithm, grouped by family in menu order.
    pub const ALL: [AlgorithmId; 26] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::GraphBfs,
        AlgorithmId::GraphDfs,
        AlgorithmId::Dijkstra,
        AlgorithmId::TopologicalSort,
        AlgorithmId::ReverseList,
        AlgorithmId::DetectCycle,
        AlgorithmId::FindMiddle,
        AlgorithmId::InorderTraversal,
        AlgorithmId::LevelOrder,
        AlgorithmId::Gcd,
        AlgorithmId::Lcm,
        AlgorithmId::FastPower,
        AlgorithmId::PrimeCheck,
        AlgorithmId::Sieve,
        AlgorithmId::Binomial,
        AlgorithmId::CountSetBits,
        AlgorithmId::PowerOfTwo,
        AlgorithmId::XorUnique,
        AlgorithmId::Subsets,
    ];

    /// Display name, matching the titles shown in the UI menu.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "Bubble Sort",
            AlgorithmId::SelectionSort => "Selection Sort",
            AlgorithmId::InsertionSort => "Insertion Sort",
            AlgorithmId::MergeSort => "Merge Sort",
            AlgorithmId::QuickSort => "Quick Sort",
            AlgorithmId::LinearSearch => "Linear Search",
            AlgorithmId::BinarySearch => "Binary Search",
            AlgorithmId::GraphBfs => "BFS",
            AlgorithmId::GraphDfs => "DFS",
            AlgorithmId::Dijkstra => "Dijkstra",
            AlgorithmId::TopologicalSort => "Topological Sort",
            AlgorithmId::ReverseList => "Reverse Linked List",
            AlgorithmId::DetectCycle => "Cycle Detection",
            AlgorithmId::FindMiddle => "Find Middle",
            AlgorithmId::InorderTraversal => "In-order Traversal",
            AlgorithmId::LevelOrder => "Level-order Traversal",
            AlgorithmId::Gcd => "Euclid GCD",
            AlgorithmId::Lcm => "LCM using GCD",
            AlgorithmId::FastPower => "Fast Power",
            AlgorithmId::PrimeCheck => "Prime Check",
            AlgorithmId::Sieve => "Sieve of Eratosthenes",
            AlgorithmId::Binomial => "Combinations (nCr)",
            AlgorithmId::CountSetBits => "Count Set Bits",
            AlgorithmId::PowerOfTwo => "Power of Two",
            AlgorithmId::XorUnique => "Single Number (XOR)",
            AlgorithmId::Subsets => "Subset Generation",
        }
    }

    /// The family this algorithm is grouped under.
    pub fn family(&self) -> Family {
        match self {
            AlgorithmId::BubbleSort
            | AlgorithmId::SelectionSort
            | AlgorithmId::InsertionSort
            | AlgorithmId::MergeSort
            | AlgorithmId::QuickSort => Family::Sorting,
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch => Family::Searching,
            AlgorithmId::GraphBfs
            | AlgorithmId::GraphDfs
            | AlgorithmId::Dijkstra
            | AlgorithmId::TopologicalSort => Family::Graphs,
            AlgorithmId::ReverseList
            | AlgorithmId::DetectCycle
            | AlgorithmId::FindMiddle => Family::LinkedList,
            AlgorithmId::InorderTraversal | AlgorithmId::LevelOrder => Family::Tree,
            AlgorithmId::Gcd
            | AlgorithmId::Lcm
            | AlgorithmId::FastPower
            | AlgorithmId::PrimeCheck
            | AlgorithmId::Sieve
            | AlgorithmId::Binomial
            | AlgorithmId::CountSetBits
            | AlgorithmId::PowerOfTwo
            | AlgorithmId::XorUnique
            | AlgorithmId::Subsets => Family::NumberTheory,
        }
    }

    /// Members of a family, in catalog order.
    pub fn in_family(family: Family) -> impl Iterator<Item = AlgorithmId> {
        Self::ALL.into_iter().filter(move |id| id.family() == family)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownAlgorithm(s.to_string()))
    }
}

/// Ordered names of every supported algorithm, grouped by family.
pub fn supported_algorithms() -> Vec<&'static str> {
    AlgorithmId::ALL.iter().map(|id| id.name()).collect()
}
