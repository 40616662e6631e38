//! Position evaluation
//!
//! The depth-limited search scores its horizon nodes with a fixed
//! geometric weighting of every run-length window on the board.

pub mod heuristic;
pub mod weights;

pub use heuristic::Heuristic;
pub use weights::{HeuristicTable, MAX_RUN};
