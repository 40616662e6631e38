//! Win condition checking
//!
//! A player wins with `run` or more of their marks in a row, column or
//! diagonal. Two detectors are provided:
//! - [`has_won`] scans every line and works on any board
//! - [`has_won_at`] only looks through the cell just played, and is what
//!   search uses at every node

use crate::board::{lines, Board, Mark, Pos, DIRECTIONS};

/// Full-board check for `run` consecutive `mark` cells.
///
/// Does not depend on which move was played last.
pub fn has_won(board: &Board, mark: Mark, run: usize) -> bool {
    find_winning_line(board, mark, run).is_some()
}

/// Fast check through a specific position.
///
/// Walks outward from `pos` in both directions along each of the four
/// axes and sums the consecutive matches. No allocation.
#[inline]
pub fn has_won_at(board: &Board, pos: Pos, mark: Mark, run: usize) -> bool {
    if run == 0 || mark == Mark::Empty || board.get(pos) != mark {
        return false;
    }
    let size = board.size();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_dir(board, pos, dr, dc, mark, size)
            + count_dir(board, pos, -dr, -dc, mark, size);
        count >= run
    })
}

/// Consecutive `mark` cells strictly beyond `pos` along `(dr, dc)`
#[inline]
fn count_dir(board: &Board, pos: Pos, dr: i32, dc: i32, mark: Mark, size: usize) -> usize {
    let mut count = 0;
    let mut n = 1;
    while let Some(next) = pos.offset(dr, dc, n, size) {
        if board.get(next) != mark {
            break;
        }
        count += 1;
        n += 1;
    }
    count
}

/// Find the first run of `run` consecutive `mark` cells.
///
/// Returns exactly `run` positions in line order, scanning rows, then
/// columns, then both diagonal families.
pub fn find_winning_line(board: &Board, mark: Mark, run: usize) -> Option<Vec<Pos>> {
    if run == 0 || mark == Mark::Empty {
        return None;
    }
    for line in lines::lines(board.size(), run) {
        let mut streak = 0;
        for i in 0..line.len {
            if board.get(line.cell(i)) == mark {
                streak += 1;
                if streak == run {
                    let first = i + 1 - run;
                    return Some((first..=i).map(|j| line.cell(j)).collect());
                }
            } else {
                streak = 0;
            }
        }
    }
    None
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

    /// Reference check: try every start cell and direction
    fn brute_force_won(board: &Board, mark: Mark, run: usize) -> bool {
        let size = board.size();
        for idx in 0..size * size {
            let start = Pos::from_index(idx, size);
            for &(dr, dc) in &DIRECTIONS {
                let all = (0..run as i32).all(|n| {
                    start
                        .offset(dr, dc, n, size)
                        .is_some_and(|p| board.get(p) == mark)
                });
                if all {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_row_win() {
        let board = board_with(3, &[(1, 0, Mark::X), (1, 1, Mark::X), (1, 2, Mark::X)]);
        assert!(has_won(&board, Mark::X, 3));
        assert!(!has_won(&board, Mark::O, 3));
        assert!(has_won_at(&board, Pos::new(1, 2), Mark::X, 3));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(4, &[(0, 3, Mark::O), (1, 3, Mark::O), (2, 3, Mark::O)]);
        assert!(has_won(&board, Mark::O, 3));
        assert!(!has_won(&board, Mark::O, 4));
        assert!(has_won_at(&board, Pos::new(1, 3), Mark::O, 3));
    }

    #[test]
    fn test_short_diagonal_win() {
        // SE diagonal starting at (1, 0) on 5x5, not a main diagonal
        let board =
            board_with(5, &[(1, 0, Mark::X), (2, 1, Mark::X), (3, 2, Mark::X), (4, 3, Mark::X)]);
        assert!(has_won(&board, Mark::X, 4));
        assert!(has_won_at(&board, Pos::new(3, 2), Mark::X, 4));
    }

    #[test]
    fn test_short_anti_diagonal_win() {
        // SW diagonal starting at (0, 3) on 5x5
        let board =
            board_with(5, &[(0, 3, Mark::O), (1, 2, Mark::O), (2, 1, Mark::O), (3, 0, Mark::O)]);
        assert!(has_won(&board, Mark::O, 4));
        assert!(has_won_at(&board, Pos::new(0, 3), Mark::O, 4));
        assert_eq!(
            find_winning_line(&board, Mark::O, 4),
            Some(vec![Pos::new(0, 3), Pos::new(1, 2), Pos::new(2, 1), Pos::new(3, 0)])
        );
    }

    #[test]
    fn test_broken_run_not_win() {
        let board = board_with(
            5,
            &[(2, 0, Mark::X), (2, 1, Mark::X), (2, 2, Mark::O), (2, 3, Mark::X), (2, 4, Mark::X)],
        );
        assert!(!has_won(&board, Mark::X, 3));
        assert!(!has_won_at(&board, Pos::new(2, 4), Mark::X, 3));
    }

    #[test]
    fn test_longer_run_also_wins() {
        let board = board_with(
            5,
            &[(4, 0, Mark::X), (4, 1, Mark::X), (4, 2, Mark::X), (4, 3, Mark::X), (4, 4, Mark::X)],
        );
        assert!(has_won(&board, Mark::X, 3));
        assert_eq!(find_winning_line(&board, Mark::X, 3).map(|l| l.len()), Some(3));
    }

    #[test]
    fn test_incremental_needs_mark_at_pos() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert!(!has_won_at(&board, Pos::new(1, 1), Mark::X, 3));
        assert!(!has_won_at(&board, Pos::new(0, 0), Mark::O, 3));
    }

    #[test]
    fn test_run_longer_than_board_never_wins() {
        let board = board_with(2, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert!(!has_won(&board, Mark::X, 3));
        assert!(!has_won_at(&board, Pos::new(0, 1), Mark::X, 3));
    }

    #[test]
    fn test_run_of_one() {
        let board = board_with(3, &[(2, 2, Mark::O)]);
        assert!(has_won(&board, Mark::O, 1));
        assert!(has_won_at(&board, Pos::new(2, 2), Mark::O, 1));
        assert!(!has_won(&board, Mark::X, 1));
    }

    #[test]
    fn test_empty_board_no_winner() {
        let board = Board::new(4);
        assert!(!has_won(&board, Mark::X, 3));
        assert!(!has_won(&board, Mark::O, 3));
        assert!(find_winning_line(&board, Mark::Empty, 3).is_none());
    }

    /// Random size, run and (size*size) cell contents
    fn arbitrary_board() -> impl Strategy<Value = (Board, usize)> {
        (1usize..=7)
            .prop_flat_map(|size| {
                (
                    Just(size),
                    1usize..=size + 1,
                    prop::collection::vec(0u8..3, size * size),
                )
            })
            .prop_map(|(size, run, cells)| {
                let mut board = Board::new(size);
                for (idx, cell) in cells.into_iter().enumerate() {
                    let mark = match cell {
                        1 => Mark::X,
                        2 => Mark::O,
                        _ => continue,
                    };
                    board.place(Pos::from_index(idx, size), mark);
                }
                (board, run)
            })
    }

    /// Random size and run plus a shuffled play order, stopped at the first win
    fn arbitrary_game() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
        (1usize..=7).prop_flat_map(|size| {
            (
                Just(size),
                1usize..=size,
                Just((0..size * size).collect::<Vec<_>>()).prop_shuffle(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_full_scan_matches_brute_force((board, run) in arbitrary_board()) {
            for mark in [Mark::X, Mark::O] {
                prop_assert_eq!(has_won(&board, mark, run), brute_force_won(&board, mark, run));
            }
        }

        #[test]
        fn prop_incremental_matches_full_scan((size, run, order) in arbitrary_game()) {
            let mut board = Board::new(size);
            let mut mark = Mark::X;
            for idx in order {
                let pos = Pos::from_index(idx, size);
                board.place(pos, mark);
                let incremental = has_won_at(&board, pos, mark, run);
                prop_assert_eq!(incremental, has_won(&board, mark, run));
                if incremental {
                    break;
                }
                mark = mark.opponent();
            }
        }
    }
}
