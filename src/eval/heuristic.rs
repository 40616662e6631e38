//! Heuristic evaluation for depth-limited search
//!
//! Every window of `run` consecutive cells on every row, column and
//! diagonal is scored from the [`HeuristicTable`] and the scores are
//! summed. Windows that hold only one side's marks count for that side;
//! windows holding both count for nobody.

use crate::board::{lines, Board, Line, Mark, Pos};

use super::weights::HeuristicTable;

/// Window table plus the lines long enough to hold a window
#[derive(Debug, Clone)]
pub struct Heuristic {
    table: HeuristicTable,
    lines: Vec<Line>,
}

impl Heuristic {
    pub fn new(size: usize, run: usize) -> Self {
        Self {
            table: HeuristicTable::new(run),
            lines: if run == 0 { Vec::new() } else { lines::lines(size, run) },
        }
    }

    #[inline]
    pub fn table(&self) -> &HeuristicTable {
        &self.table
    }

    /// Evaluate the board from the perspective of `mine`.
    ///
    /// Positive values favour `mine`. Swapping the perspective negates
    /// the result.
    #[must_use]
    pub fn evaluate(&self, board: &Board, mine: Mark) -> i64 {
        let theirs = mine.opponent();
        let run = self.table.run();
        let mut score = 0i64;

        for line in &self.lines {
            // Sliding window counts along the line
            let (mut m, mut o) = (0usize, 0usize);
            for i in 0..line.len {
                match board.get(line.cell(i)) {
                    x if x == mine => m += 1,
                    x if x == theirs => o += 1,
                    _ => {}
                }
                if i + 1 > run {
                    match board.get(line.cell(i - run)) {
                        x if x == mine => m -= 1,
                        x if x == theirs => o -= 1,
                        _ => {}
                    }
                }
                if i + 1 >= run {
                    score = score.saturating_add(self.table.get(m, o));
                }
            }
        }

        score
    }

    /// Score of the single window of `run` cells starting at `start` and
    /// stepping `dir`, or `None` if it does not fit on the board.
    pub fn score_window(
        &self,
        board: &Board,
        start: Pos,
        dir: (i32, i32),
        mine: Mark,
    ) -> Option<i64> {
        let theirs = mine.opponent();
        let (mut m, mut o) = (0usize, 0usize);
        for n in 0..self.table.run() as i32 {
            let pos = start.offset(dir.0, dir.1, n, board.size())?;
            match board.get(pos) {
                x if x == mine => m += 1,
                x if x == theirs => o += 1,
                _ => {}
            }
        }
        Some(self.table.get(m, o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(size: usize, cells: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, mark) in cells {
            board.place(Pos::new(r, c), mark);
        }
        board
    }

    /// Reference sum: every start cell, every direction, every full window
    fn brute_force_eval(board: &Board, heuristic: &Heuristic, mine: Mark) -> i64 {
        let size = board.size();
        let mut total = 0;
        for idx in 0..size * size {
            let start = Pos::from_index(idx, size);
            for dir in crate::board::DIRECTIONS {
                if let Some(s) = heuristic.score_window(board, start, dir, mine) {
                    total += s;
                }
            }
        }
        total
    }

    #[test]
    fn test_empty_board_is_zero() {
        let heuristic = Heuristic::new(5, 4);
        assert_eq!(heuristic.evaluate(&Board::new(5), Mark::X), 0);
    }

    #[test]
    fn test_three_in_window_scores_hundred() {
        // 5x5, run 4: X X X _ _ on row 2
        let heuristic = Heuristic::new(5, 4);
        let board = board_with(5, &[(2, 0, Mark::X), (2, 1, Mark::X), (2, 2, Mark::X)]);
        assert_eq!(heuristic.score_window(&board, Pos::new(2, 0), (0, 1), Mark::X), Some(100));
        assert_eq!(heuristic.score_window(&board, Pos::new(2, 1), (0, 1), Mark::X), Some(10));
        assert_eq!(heuristic.score_window(&board, Pos::new(2, 2), (0, 1), Mark::X), None);
    }

    #[test]
    fn test_single_center_mark_3x3() {
        // Center sits in row, column and both diagonals: 4 windows of one mark
        let heuristic = Heuristic::new(3, 3);
        let board = board_with(3, &[(1, 1, Mark::X)]);
        assert_eq!(heuristic.evaluate(&board, Mark::X), 4);
        assert_eq!(heuristic.evaluate(&board, Mark::O), -4);
    }

    #[test]
    fn test_blocked_window_is_zero() {
        let heuristic = Heuristic::new(3, 3);
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::O)]);
        // Row 0 blocked; X keeps column 0 and the main diagonal, O keeps column 1
        assert_eq!(heuristic.evaluate(&board, Mark::X), 1 + 1 - 1);
    }

    #[test]
    fn test_off_main_diagonals_counted() {
        // 5x5, run 4: one mark at (0, 1) lies on the SE diagonal from (0, 1)
        // and no SW diagonal of length >= 4
        let heuristic = Heuristic::new(5, 4);
        let board = board_with(5, &[(0, 1, Mark::O)]);
        // Row 0: windows at cols 0 and 1 contain it (2); column 1: one window (1);
        // SE diagonal from (0, 1) has one window (1)
        assert_eq!(heuristic.evaluate(&board, Mark::O), 4);
    }

    #[test]
    fn test_run_longer_than_board_scores_nothing() {
        let heuristic = Heuristic::new(2, 3);
        let board = board_with(2, &[(0, 0, Mark::X), (1, 1, Mark::X)]);
        assert_eq!(heuristic.evaluate(&board, Mark::X), 0);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force_and_negates(
            size in 1usize..=6,
            run_seed in 0usize..6,
            cells in prop::collection::vec(0u8..3, 36),
        ) {
            let run = run_seed % size + 1;
            let heuristic = Heuristic::new(size, run);
            let mut board = Board::new(size);
            for idx in 0..size * size {
                let mark = match cells[idx] {
                    1 => Mark::X,
                    2 => Mark::O,
                    _ => continue,
                };
                board.place(Pos::from_index(idx, size), mark);
            }
            let x = heuristic.evaluate(&board, Mark::X);
            prop_assert_eq!(x, -heuristic.evaluate(&board, Mark::O));
            prop_assert_eq!(x, brute_force_eval(&board, &heuristic, Mark::X));
        }
    }
}
