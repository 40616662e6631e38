//! Enumeration of board lines
//!
//! A line is a maximal straight segment of cells: a full row, a full
//! column, or one diagonal in either direction. Both the full-scan win
//! check and the heuristic walk lines, so every line long enough to hold
//! a run must be produced exactly once.

use super::Pos;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// A maximal segment starting at `start` and stepping `dir` for `len` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub dir: (i32, i32),
    pub len: usize,
}

impl Line {
    /// The `i`-th cell of the line
    #[inline]
    pub fn cell(&self, i: usize) -> Pos {
        let i = i as i32;
        Pos::new(
            (self.start.row as i32 + self.dir.0 * i) as u8,
            (self.start.col as i32 + self.dir.1 * i) as u8,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len).map(move |i| self.cell(i))
    }
}

/// All lines of a `size`×`size` board with at least `min_len` cells.
///
/// Rows and columns each have length `size`. SE diagonals start on the
/// top row or the left column; SW diagonals start on the top row or the
/// right column.
pub fn lines(size: usize, min_len: usize) -> Vec<Line> {
    let mut out = Vec::with_capacity(6 * size);
    if size == 0 || min_len > size {
        return out;
    }

    for i in 0..size {
        let idx = i as u8;
        out.push(Line { start: Pos::new(idx, 0), dir: (0, 1), len: size });
        out.push(Line { start: Pos::new(0, idx), dir: (1, 0), len: size });
    }

    // SE: from (0, c) length size - c, from (r, 0) length size - r
    for c in 0..size {
        push_if_long(&mut out, Pos::new(0, c as u8), (1, 1), size - c, min_len);
    }
    for r in 1..size {
        push_if_long(&mut out, Pos::new(r as u8, 0), (1, 1), size - r, min_len);
    }

    // SW: from (0, c) length c + 1, from (r, size - 1) length size - r
    for c in 0..size {
        push_if_long(&mut out, Pos::new(0, c as u8), (1, -1), c + 1, min_len);
    }
    for r in 1..size {
        push_if_long(
            &mut out,
            Pos::new(r as u8, (size - 1) as u8),
            (1, -1),
            size - r,
            min_len,
        );
    }

    out
}

#[inline]
fn push_if_long(out: &mut Vec<Line>, start: Pos, dir: (i32, i32), len: usize, min_len: usize) {
    if len >= min_len {
        out.push(Line { start, dir, len });
    }
}
