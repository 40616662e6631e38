//! m,n,k game engine
//!
//! Two players, X and O, alternately mark empty cells of an N×N board.
//! The first to get K of their marks in a horizontal, vertical or diagonal
//! line wins; a full board without such a line is a draw. Tic-tac-toe is
//! the 3×3, K=3 case.
//!
//! # Architecture
//!
//! - [`board`]: Board storage and the dancing-links list of empty cells
//! - [`rules`]: Win detection, incremental and full scan
//! - [`eval`]: Sliding-window position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: The façade tying the pieces together
//! - [`config`]: Start-screen presets
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use mnk::{GameEngine, Mark, Outcome, Pos, SearchDepth};
//!
//! let mut engine = GameEngine::new(3, 3, Mark::O, Mark::X).unwrap();
//! engine.apply_move(Pos::new(1, 1), Mark::X);
//!
//! let reply = engine.next_move(SearchDepth::Unbounded).unwrap();
//! engine.apply_move(reply, Mark::O);
//! assert_eq!(engine.outcome(), Outcome::NotOver);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, MAX_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{GameEngine, Outcome};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use search::{SearchDepth, SearchResult};
