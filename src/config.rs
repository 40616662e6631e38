//! Game settings chosen on the start screen
//!
//! The board size picks the required run and the search depth:
//!
//! | size | run | depth      |
//! |------|-----|------------|
//! | 3    | 3   | unbounded  |
//! | 4    | 4   | 5 plies    |
//! | other| 5   | 2 plies    |
//!
//! Whoever moves first plays X.

use crate::board::{Mark, MAX_BOARD_SIZE};
use crate::error::{ConfigError, ConfigResult};
use crate::search::SearchDepth;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side
    pub size: usize,
    /// Marks in a row needed to win
    pub run: usize,
    /// Engine look-ahead
    pub depth: SearchDepth,
    /// Human plays X and moves first
    pub human_first: bool,
}

impl GameConfig {
    /// Preset settings for a board of side `size`
    pub fn for_size(size: usize, human_first: bool) -> Self {
        let (run, depth) = match size {
            3 => (3, SearchDepth::Unbounded),
            4 => (4, SearchDepth::Limited(5)),
            _ => (5, SearchDepth::Limited(2)),
        };
        Self {
            size,
            run,
            depth,
            human_first,
        }
    }

    /// Parse the start-screen size field
    pub fn parse_size(input: &str) -> ConfigResult<usize> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingSize);
        }
        let size: usize = trimmed.parse().map_err(|_| ConfigError::NotANumber {
            input: trimmed.to_string(),
        })?;
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::SizeOutOfRange { size });
        }
        Ok(size)
    }

    /// Parse the size field and apply the presets
    pub fn from_input(size: &str, human_first: bool) -> ConfigResult<Self> {
        Ok(Self::for_size(Self::parse_size(size)?, human_first))
    }

    #[inline]
    pub fn human_mark(&self) -> Mark {
        if self.human_first {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[inline]
    pub fn engine_mark(&self) -> Mark {
        self.human_mark().opponent()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_size(3, true)
    }
}
