//! # saladgen-graph
//!
//! The flavor-similarity graph: ingredients as nodes, shared-molecule
//! counts as symmetric integer edge weights. Built once from the
//! mappings produced by ingestion, immutable thereafter, and safe to
//! share read-only across any number of traversal sessions.

pub mod weighted;

pub use weighted::WeightedGraph;
