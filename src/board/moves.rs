//! Ordered set of empty cells
//!
//! A doubly linked free list threaded through a fixed array of cell
//! indices, with one sentinel slot at the end. Removing a cell unlinks it
//! but leaves its own links intact, so restoring cells in reverse removal
//! order relinks each one at exactly the place it came from. Iteration is
//! therefore always row-major, which keeps search tie-breaks deterministic.

use super::Pos;

#[derive(Debug, Clone)]
pub struct MoveList {
    next: Vec<u16>,
    prev: Vec<u16>,
    len: usize,
    size: usize,
}

impl MoveList {
    /// Full list for an empty `size`×`size` board
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        // Slot `cells` is the sentinel; the list is circular through it.
        let next = (0..=cells).map(|i| ((i + 1) % (cells + 1)) as u16).collect();
        let prev = (0..=cells).map(|i| ((i + cells) % (cells + 1)) as u16).collect();
        Self {
            next,
            prev,
            len: cells,
            size,
        }
    }

    #[inline]
    fn head(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unlink a cell. The caller guarantees it is currently linked.
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        let (p, n) = (self.prev[idx] as usize, self.next[idx] as usize);
        self.next[p] = n as u16;
        self.prev[n] = p as u16;
        self.len -= 1;
    }

    /// Relink a cell removed by the most recent still-outstanding `remove`.
    #[inline]
    pub fn restore(&mut self, idx: usize) {
        let (p, n) = (self.prev[idx] as usize, self.next[idx] as usize);
        self.next[p] = idx as u16;
        self.prev[n] = idx as u16;
        self.len += 1;
    }

    /// First linked cell index
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.after(self.head())
    }

    /// Linked cell following `idx`. Valid while `idx` is linked, or right
    /// after `idx` has been restored.
    #[inline]
    pub fn after(&self, idx: usize) -> Option<usize> {
        let n = self.next[idx] as usize;
        (n != self.head()).then_some(n)
    }

    /// Lazy row-major iterator over the empty cells
    pub fn iter(&self) -> Moves<'_> {
        Moves {
            list: self,
            cursor: self.first(),
        }
    }
}

/// Restartable iterator over legal moves (clone it to iterate again)
#[derive(Debug, Clone)]
pub struct Moves<'a> {
    list: &'a MoveList,
    cursor: Option<usize>,
}

impl Iterator for Moves<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        self.cursor = self.list.after(idx);
        Some(Pos::from_index(idx, self.list.size))
    }
}

impl std::iter::FusedIterator for Moves<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_row_major() {
        let list = MoveList::new(3);
        let idx: Vec<usize> = list.iter().map(|p| p.to_index(3)).collect();
        assert_eq!(idx, (0..9).collect::<Vec<_>>());
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn test_remove_skips_cell() {
        let mut list = MoveList::new(2);
        list.remove(1);
        let idx: Vec<usize> = list.iter().map(|p| p.to_index(2)).collect();
        assert_eq!(idx, vec![0, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_lifo_restore_preserves_order() {
        let mut list = MoveList::new(3);
        list.remove(4);
        list.remove(0);
        list.remove(8);
        list.restore(8);
        list.restore(0);
        let idx: Vec<usize> = list.iter().map(|p| p.to_index(3)).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 5, 6, 7, 8]);
        list.restore(4);
        let idx: Vec<usize> = list.iter().map(|p| p.to_index(3)).collect();
        assert_eq!(idx, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_list() {
        let mut list = MoveList::new(1);
        list.remove(0);
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let list = MoveList::new(2);
        let moves = list.iter();
        let again = moves.clone();
        assert_eq!(moves.count(), 4);
        assert_eq!(again.count(), 4);
    }
}
