//! Game rules for m,n,k games
//!
//! The only rule beyond "place on an empty cell" is the win condition:
//! `run` consecutive marks on a row, column or diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_won, has_won_at};
