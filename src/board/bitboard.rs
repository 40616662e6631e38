//! Variable-size bitboard, one bit per cell

use super::Pos;

/// Occupancy set over the cells of an N×N board.
/// Bits are addressed by row-major cell index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    size: usize,
}

impl Bitboard {
    /// Create an empty bitboard for a `size`×`size` board
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            bits: vec![0; cells.div_ceil(64)],
            size,
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.size);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new(9);
        let pos = Pos::new(8, 8);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(!bb.get(pos));
        assert_eq!(bb.count(), 0);
    }

    #[test]
    fn test_word_count_rounds_up() {
        // 9 cells fit in one word; 100 cells need two
        assert_eq!(Bitboard::new(3).bits.len(), 1);
        assert_eq!(Bitboard::new(10).bits.len(), 2);
    }
}
