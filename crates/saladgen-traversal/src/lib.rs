//! # saladgen-traversal
//!
//! The incremental selection engine. A [`Traverser`] walks a
//! [`WeightedGraph`](saladgen_graph::WeightedGraph) one round at a time:
//! it ranks the eligible candidates by recency-weighted aggregate
//! strength, the driver picks one, and the engine enforces the per-kind
//! composition limits until every quota is satisfied.
//!
//! The engine is a pure, synchronously-stepped state machine: no
//! internal loop, no I/O, no blocking. Presentation (rendering candidate
//! lists, reading a choice) lives entirely outside this crate.

pub mod scoring;
pub mod traverser;

pub use traverser::{RankedCandidate, Traverser};
