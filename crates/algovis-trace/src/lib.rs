//! Algovis Trace Generation
//!
//! Deterministic, replayable traces for the visualizer's fixed algorithm
//! catalog.
//!
//! # Architecture
//!
//! - **Catalog**: the closed set of supported algorithms, grouped by family
//! - **Fixtures**: canonical inputs, rebuilt fresh for every run
//! - **Algorithms**: instrumented textbook implementations emitting an
//!   ordered [`TraceEvent`] list alongside their result
//! - **Runner**: one entry point dispatching an [`AlgorithmId`] to its
//!   fixture and implementation
//!
//! Every algorithm operates on a private copy of its fixture, so a run
//! can never observe mutations (a reversed list, a sorted array) left
//! behind by a previous one.
//!
//! # Usage
//!
//! ```
//! use algovis_trace::{run, AlgorithmId, Outcome};
//!
//! let run = run(AlgorithmId::BubbleSort);
//! assert!(matches!(run.outcome, Outcome::Sorted(_)));
//! assert!(!run.trace.is_empty());
//! ```

mod catalog;
mod events;
mod fixture;
pub mod graph;
pub mod list;
pub mod numeric;
mod runner;
pub mod searching;
pub mod sorting;
pub mod tree;

pub use catalog::{supported_algorithms, AlgorithmId, CatalogError, Family};
pub use events::{Cursor, EventKind, NodeId, TraceEvent, Traced};
pub use fixture::Fixture;
pub use graph::WeightedEdge;
pub use list::{ListArena, ListSlot};
pub use runner::{run, AlgorithmRun, Outcome};
pub use tree::TreeArena;
