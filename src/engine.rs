//! Game engine integrating board, rules, evaluation and search
//!
//! [`GameEngine`] is the single owner of the game state. A front-end
//! drives it through a small contract:
//!
//! 1. **Apply** every move, the human's and the engine's, with
//!    [`GameEngine::apply_move`] (or [`GameEngine::try_apply_move`] for
//!    unchecked input)
//! 2. **Query** [`GameEngine::outcome`] after each move
//! 3. **Request** the engine's reply with [`GameEngine::next_move`]; the
//!    engine does not play it, the caller applies it like any other move
//!
//! # Example
//!
//! ```
//! use mnk::{GameEngine, Mark, Outcome, Pos, SearchDepth};
//!
//! // Human plays X, engine plays O on a 3x3 board
//! let mut engine = GameEngine::new(3, 3, Mark::O, Mark::X).unwrap();
//!
//! engine.apply_move(Pos::new(1, 1), Mark::X);
//! let reply = engine.next_move(SearchDepth::Unbounded).unwrap();
//! engine.apply_move(reply, Mark::O);
//!
//! assert_eq!(engine.outcome(), Outcome::NotOver);
//! assert_eq!(engine.legal_moves().count(), 7);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Mark, Moves, Pos, MAX_BOARD_SIZE};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::eval::{Heuristic, MAX_RUN};
use crate::rules::{find_winning_line, has_won, has_won_at};
use crate::search::{SearchDepth, SearchResult, Searcher};

/// Terminal status of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    NotOver,
}

impl Outcome {
    /// Winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Draw | Outcome::NotOver => None,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::NotOver
    }

    fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
            Mark::Empty => Outcome::NotOver,
        }
    }
}

/// m,n,k game engine.
///
/// Owns the board, the move list, the heuristic weights and the
/// last-move record. Search mutates the board in place and restores it
/// before returning, so callers only ever see positions they created.
///
/// Not meant for concurrent use: finish one call before issuing the
/// next. A front-end that searches off its UI thread should search on a
/// clone and apply the resulting move to its own engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    heuristic: Heuristic,
    run: usize,
    /// Engine's mark
    mine: Mark,
    /// Opponent's mark
    theirs: Mark,
}

impl GameEngine {
    /// Create an engine for a `size`×`size` board where `run` marks in a
    /// row win.
    ///
    /// `run > size` is accepted; such a game can only end in a draw.
    /// `run` is capped at [`MAX_RUN`] so win scores stay above every
    /// heuristic window score.
    pub fn new(size: usize, run: usize, engine: Mark, opponent: Mark) -> EngineResult<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        if run == 0 || run > MAX_RUN {
            return Err(EngineError::InvalidRun { run });
        }
        if engine == Mark::Empty || opponent == Mark::Empty || engine == opponent {
            return Err(EngineError::InvalidMarks { engine, opponent });
        }

        info!(size, run, engine = %engine, "engine created");

        Ok(Self {
            board: Board::new(size),
            heuristic: Heuristic::new(size, run),
            run,
            mine: engine,
            theirs: opponent,
        })
    }

    /// Create an engine for the engine's side of `config`
    pub fn from_config(config: &GameConfig) -> EngineResult<Self> {
        Self::new(config.size, config.run, config.engine_mark(), config.human_mark())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn run(&self) -> usize {
        self.run
    }

    #[inline]
    pub fn engine_mark(&self) -> Mark {
        self.mine
    }

    #[inline]
    pub fn opponent_mark(&self) -> Mark {
        self.theirs
    }

    /// Read-only view of the board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.board.get(pos)
    }

    /// Place `mark` at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is off the board, the cell is occupied, or `mark` is
    /// `Empty`. These are caller bugs; use [`Self::try_apply_move`] for
    /// input that has not been validated.
    pub fn apply_move(&mut self, pos: Pos, mark: Mark) {
        assert!(self.board.in_bounds(pos), "position {pos} outside {0}x{0} board", self.size());
        assert!(self.board.is_empty(pos), "cell {pos} already occupied");
        assert!(mark != Mark::Empty, "cannot place an empty mark");
        self.board.place(pos, mark);
    }

    /// Checked variant of [`Self::apply_move`]
    pub fn try_apply_move(&mut self, pos: Pos, mark: Mark) -> EngineResult<()> {
        if !self.board.in_bounds(pos) {
            return Err(EngineError::OutOfBounds { pos, size: self.size() });
        }
        if !self.board.is_empty(pos) {
            return Err(EngineError::Occupied { pos });
        }
        if mark == Mark::Empty {
            return Err(EngineError::EmptyMark);
        }
        self.board.place(pos, mark);
        Ok(())
    }

    /// Empty cells in row-major order
    #[inline]
    pub fn legal_moves(&self) -> Moves<'_> {
        self.board.legal_moves()
    }

    /// Game status after the most recent move.
    ///
    /// Only the last mover is checked for a win, so call this after every
    /// move. Use [`Self::has_won`] to test a side at any other time.
    pub fn outcome(&self) -> Outcome {
        if let Some(last) = self.board.last_move() {
            if has_won_at(&self.board, last.pos, last.mark, self.run) {
                return Outcome::win_for(last.mark);
            }
        }
        if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::NotOver
        }
    }

    /// Full-board win test for `mark`, independent of move history
    pub fn has_won(&self, mark: Mark) -> bool {
        has_won(&self.board, mark, self.run)
    }

    /// Win test through a single cell
    pub fn has_won_at(&self, pos: Pos, mark: Mark) -> bool {
        has_won_at(&self.board, pos, mark, self.run)
    }

    /// Cells of the first completed run for `mark`, for highlighting
    pub fn winning_line(&self, mark: Mark) -> Option<Vec<Pos>> {
        find_winning_line(&self.board, mark, self.run)
    }

    /// Heuristic value of the current position for the engine's side
    #[must_use]
    pub fn evaluate(&self) -> i64 {
        self.heuristic.evaluate(&self.board, self.mine)
    }

    /// Heuristic weights in use
    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    /// Search for the engine's best move with full statistics.
    ///
    /// The engine is assumed to be the side to move. The board is left
    /// exactly as it was.
    pub fn search(&mut self, depth: SearchDepth) -> SearchResult {
        let start = Instant::now();
        let result = Searcher::new(&mut self.board, &self.heuristic, self.mine).search(depth);

        debug!(
            %depth,
            score = result.score,
            best_move = ?result.best_move,
            nodes = result.nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        result
    }

    /// Engine's reply, or `None` when the game is already over.
    ///
    /// Does not apply the move.
    pub fn next_move(&mut self, depth: SearchDepth) -> Option<Pos> {
        self.search(depth).best_move
    }
}
