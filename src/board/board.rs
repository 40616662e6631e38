//! Board structure with incremental move tracking

use super::bitboard::Bitboard;
use super::moves::{MoveList, Moves};
use super::{Mark, Pos};

/// The most recent placement, read by the incremental win check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub pos: Pos,
    pub mark: Mark,
}

/// N×N game board.
///
/// Keeps the list of empty cells in step with the occupancy bitboards:
/// `legal_moves().count() + stone_count() == size * size` at all times.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// X marks bitboard
    x: Bitboard,
    /// O marks bitboard
    o: Bitboard,
    /// Empty cells in row-major order
    moves: MoveList,
    last_move: Option<LastMove>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            x: Bitboard::new(size),
            o: Bitboard::new(size),
            moves: MoveList::new(size),
            last_move: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.x.get(pos) {
            Mark::X
        } else if self.o.get(pos) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a mark on an empty cell and record it as the last move.
    ///
    /// Panics on an out-of-range position; occupying a taken cell is
    /// checked in debug builds only.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        assert!(self.in_bounds(pos), "position {pos} outside {0}x{0} board", self.size);
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        debug_assert!(mark != Mark::Empty, "cannot place an empty mark");

        match mark {
            Mark::X => self.x.set(pos),
            Mark::O => self.o.set(pos),
            Mark::Empty => return,
        }
        self.moves.remove(pos.to_index(self.size));
        self.last_move = Some(LastMove { pos, mark });
    }

    /// Retract the most recent placement still on the board and restore
    /// the last move that preceded it.
    #[inline]
    pub fn undo(&mut self, pos: Pos, previous: Option<LastMove>) {
        debug_assert!(!self.is_empty(pos), "cell {pos} is not occupied");
        self.x.clear(pos);
        self.o.clear(pos);
        self.moves.restore(pos.to_index(self.size));
        self.last_move = previous;
    }

    /// Empty cells, lazily, in row-major order
    #[inline]
    pub fn legal_moves(&self) -> Moves<'_> {
        self.moves.iter()
    }

    #[inline]
    pub fn move_list(&self) -> &MoveList {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves.is_empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
