//! Search module
//!
//! Contains:
//! - Exhaustive minimax with alpha-beta pruning
//! - Depth-limited minimax with heuristic evaluation at the horizon

pub mod alphabeta;

pub use alphabeta::{SearchDepth, SearchResult, Searcher};
