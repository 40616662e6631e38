//! Minimax search with alpha-beta pruning
//!
//! This module implements the move search for the engine. One recursive
//! routine covers both modes:
//!
//! - **Exhaustive**: recurses to the end of the game. Leaves score `+1`
//!   for a win by the searching side, `-1` for a loss and `0` for a draw.
//! - **Depth-limited**: stops after a fixed number of plies and scores the
//!   horizon with the window heuristic. Wins and losses score the extreme
//!   table entries so they dominate heuristic comparisons.
//!
//! The board is mutated in place and restored on the way back up. The
//! last-move record used by the incremental win check is restored from
//! the parent ply, not from a snapshot taken deeper in the tree.
//!
//! # Example
//!
//! ```
//! use mnk::board::{Board, Mark, Pos};
//! use mnk::eval::Heuristic;
//! use mnk::search::{SearchDepth, Searcher};
//!
//! let mut board = Board::new(3);
//! board.place(Pos::new(1, 1), Mark::X);
//! let heuristic = Heuristic::new(3, 3);
//!
//! let result = Searcher::new(&mut board, &heuristic, Mark::O).search(SearchDepth::Unbounded);
//! assert_eq!(result.best_move, Some(Pos::new(0, 0)));
//! assert_eq!(result.score, 0);
//! ```

use crate::board::{Board, Mark, Pos};
use crate::eval::Heuristic;
use crate::rules::has_won_at;

/// How far the search looks ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDepth {
    /// Search every line to the end of the game
    Unbounded,
    /// Search this many plies, then evaluate
    Limited(u32),
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDepth::Unbounded => f.write_str("unbounded"),
            SearchDepth::Limited(d) => write!(f, "{d} plies"),
        }
    }
}

/// Search result containing the best move found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the root is terminal
    /// or the search stopped at the root
    pub best_move: Option<Pos>,
    /// Minimax value of the root from the searching side's view
    pub score: i64,
    /// Total nodes visited
    pub nodes: u64,
}

/// One search over a borrowed board.
///
/// Holds the board mutably for its whole lifetime, so nothing else can
/// observe the intermediate positions.
pub struct Searcher<'a> {
    board: &'a mut Board,
    heuristic: &'a Heuristic,
    mine: Mark,
    run: usize,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    /// `mine` is the side to move at the root
    pub fn new(board: &'a mut Board, heuristic: &'a Heuristic, mine: Mark) -> Self {
        Self {
            board,
            heuristic,
            mine,
            run: heuristic.table().run(),
            nodes: 0,
        }
    }

    /// Run the search to completion.
    #[must_use]
    pub fn search(mut self, depth: SearchDepth) -> SearchResult {
        let limit = match depth {
            SearchDepth::Unbounded => None,
            SearchDepth::Limited(d) => Some(d),
        };
        let (score, best_move) = self.alpha_beta(limit, self.mine, i64::MIN, i64::MAX);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Leaf value when `winner` has completed a run
    #[inline]
    fn win_score(&self, winner: Mark, limited: bool) -> i64 {
        let table = self.heuristic.table();
        match (winner == self.mine, limited) {
            (true, false) => 1,
            (false, false) => -1,
            (true, true) => table.win(),
            (false, true) => table.loss(),
        }
    }

    fn alpha_beta(
        &mut self,
        depth: Option<u32>,
        to_move: Mark,
        mut alpha: i64,
        mut beta: i64,
    ) -> (i64, Option<Pos>) {
        self.nodes += 1;

        // Only the side that just moved can have completed a run
        let parent = self.board.last_move();
        if let Some(last) = parent {
            if has_won_at(self.board, last.pos, last.mark, self.run) {
                return (self.win_score(last.mark, depth.is_some()), None);
            }
        }

        if self.board.is_full() {
            return (0, None);
        }

        if depth == Some(0) {
            return (self.heuristic.evaluate(self.board, self.mine), None);
        }

        let child_depth = depth.map(|d| d - 1);
        let maximizing = to_move == self.mine;
        let size = self.board.size();
        let mut best = None;

        // Walk the move list by index; each cell is relinked before we
        // step past it, so the cursor stays valid across make/unmake.
        let mut cursor = self.board.move_list().first();
        while let Some(idx) = cursor {
            let pos = Pos::from_index(idx, size);

            self.board.place(pos, to_move);
            let (score, _) = self.alpha_beta(child_depth, to_move.opponent(), alpha, beta);
            self.board.undo(pos, parent);

            // Strict comparison keeps the first of equally good moves
            if maximizing {
                if score > alpha {
                    alpha = score;
                    best = Some(pos);
                }
            } else if score < beta {
                beta = score;
                best = Some(pos);
            }

            if alpha >= beta {
                break;
            }
            cursor = self.board.move_list().after(idx);
        }

        (if maximizing { alpha } else { beta }, best)
    }
}
