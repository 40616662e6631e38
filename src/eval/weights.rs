//! Window weights for the positional heuristic
//!
//! A window is `run` consecutive cells on one line. Its value depends only
//! on how many of my marks and opponent marks it holds.

/// Longest run whose win weight `10^(run-1)` fits in an `i64`.
/// Longer runs would clamp a near-win window to the same value as a win.
pub const MAX_RUN: usize = 19;

/// Immutable `(run + 1) × (run + 1)` table indexed by `(mine, theirs)`.
///
/// `table[i][0] = 10^(i-1)` and `table[0][i] = -10^(i-1)` for `i` in
/// `1..=run`; every other entry, including any window holding both marks,
/// is zero. Entries saturate at `i64::MAX` for `run > MAX_RUN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicTable {
    run: usize,
    weights: Vec<i64>,
}

impl HeuristicTable {
    pub fn new(run: usize) -> Self {
        let dim = run + 1;
        let mut weights = vec![0i64; dim * dim];
        for i in 1..dim {
            let w = 10i64.saturating_pow((i - 1) as u32);
            weights[i * dim] = w;
            weights[i] = -w;
        }
        Self { run, weights }
    }

    #[inline]
    pub fn run(&self) -> usize {
        self.run
    }

    /// Score of a window holding `mine` and `theirs` marks
    #[inline]
    pub fn get(&self, mine: usize, theirs: usize) -> i64 {
        self.weights[mine * (self.run + 1) + theirs]
    }

    /// Leaf value for a win by the searching side
    #[inline]
    pub fn win(&self) -> i64 {
        self.get(self.run, 0)
    }

    /// Leaf value for a win by the opponent
    #[inline]
    pub fn loss(&self) -> i64 {
        self.get(0, self.run)
    }
}
