//! # ringzip-core
//!
//! Core prediction structures for ringzip's hit/miss byte compression.
//!
//! This crate defines:
//! - [`Predictor`]: guess the next byte from its predecessor, learn from what was actually seen
//! - [`PartitionTree`]: binary trie over angular half-open intervals of the circle,
//!   one node per observed byte, with a greedy single-branch nearest search
//!
//! The tree is rebuilt from scratch on every run. Encoder and decoder replay the
//! same insertions in the same order, so it never has to be stored.

pub mod predictor;
pub mod tree;

pub use predictor::Predictor;
pub use tree::{NodeId, PartitionNode, PartitionTree};
