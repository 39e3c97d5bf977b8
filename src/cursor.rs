use crate::{value::Summable, IndexedSumTree};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A position in an [`IndexedSumTree`] whose value is the prefix sum up to that position.
///
/// [`get`](SumCursor::get) at position `i` returns `tree.sum(i)`, not the element at `i`. Since
/// prefix sums of non-negative elements never decrease, a cursor range can be binary searched
/// for the first position whose prefix sum reaches a threshold, see [`crate::search`].
///
/// Positions may be moved anywhere with the arithmetic operators, nothing is clamped. Reading is
/// only defined for positions in `0..=tree.len()`.
///
/// Equality and ordering look at the position only. Two cursors into *different* trees at the
/// same position compare equal.
pub struct SumCursor<'a, T> {
    tree: &'a IndexedSumTree<T>,
    idx: usize,
}

impl<'a, T> SumCursor<'a, T> {
    #[inline]
    pub(crate) fn new(tree: &'a IndexedSumTree<T>, idx: usize) -> Self {
        Self { tree, idx }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    #[inline]
    pub fn tree(&self) -> &'a IndexedSumTree<T> {
        self.tree
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.idx = self.idx.wrapping_add(1);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.idx = self.idx.wrapping_sub(1);
    }
}

impl<'a, T: Summable> SumCursor<'a, T> {
    /// Prefix sum of the elements before this position. Recomputed on every call.
    ///
    /// O(log n)
    #[inline]
    pub fn get(&self) -> T {
        self.tree.sum(self.idx)
    }
}

impl<'a, T> Clone for SumCursor<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SumCursor<'a, T> {}

impl<'a, T> fmt::Debug for SumCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SumCursor").field("idx", &self.idx).finish()
    }
}

impl<'a, T> Add<isize> for SumCursor<'a, T> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        Self::new(self.tree, self.idx.wrapping_add(n as usize))
    }
}

impl<'a, T> Sub<isize> for SumCursor<'a, T> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        Self::new(self.tree, self.idx.wrapping_sub(n as usize))
    }
}

impl<'a, T> AddAssign<isize> for SumCursor<'a, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.idx = self.idx.wrapping_add(n as usize);
    }
}

impl<'a, T> SubAssign<isize> for SumCursor<'a, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.idx = self.idx.wrapping_sub(n as usize);
    }
}

/// Signed distance between two positions.
impl<'a, 'b, T> Sub<SumCursor<'b, T>> for SumCursor<'a, T> {
    type Output = isize;

    #[inline]
    fn sub(self, other: SumCursor<'b, T>) -> isize {
        self.idx.wrapping_sub(other.idx) as isize
    }
}

impl<'a, 'b, T> PartialEq<SumCursor<'b, T>> for SumCursor<'a, T> {
    #[inline]
    fn eq(&self, other: &SumCursor<'b, T>) -> bool {
        self.idx == other.idx
    }
}

impl<'a, T> Eq for SumCursor<'a, T> {}

impl<'a, 'b, T> PartialOrd<SumCursor<'b, T>> for SumCursor<'a, T> {
    #[inline]
    fn partial_cmp(&self, other: &SumCursor<'b, T>) -> Option<Ordering> {
        Some(self.idx.cmp(&other.idx))
    }
}

impl<'a, T> Ord for SumCursor<'a, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.idx.cmp(&other.idx)
    }
}

impl<'a, T> Hash for SumCursor<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.idx.hash(state);
    }
}

/// Iterator over the prefix sums of a half-open cursor range `[front, back)`.
///
/// Created by [`IndexedSumTree::prefix_sums`]. Each item costs one O(log n) query.
pub struct PrefixSums<'a, T> {
    front: SumCursor<'a, T>,
    back: SumCursor<'a, T>,
}

impl<'a, T> PrefixSums<'a, T> {
    #[inline]
    pub(crate) fn new(front: SumCursor<'a, T>, back: SumCursor<'a, T>) -> Self {
        Self { front, back }
    }
}

impl<'a, T> Clone for PrefixSums<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.front, self.back)
    }
}

impl<'a, T> fmt::Debug for PrefixSums<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixSums")
            .field("front", &self.front.idx)
            .field("back", &self.back.idx)
            .finish()
    }
}

impl<'a, T: Summable> Iterator for PrefixSums<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let ps = self.front.get();
        self.front.move_next();
        Some(ps)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.idx.saturating_sub(self.front.idx);
        (len, Some(len))
    }
}

impl<'a, T: Summable> DoubleEndedIterator for PrefixSums<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back.move_prev();
        Some(self.back.get())
    }
}

impl<'a, T: Summable> ExactSizeIterator for PrefixSums<'a, T> {}

impl<'a, T: Summable> FusedIterator for PrefixSums<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::IndexedSumTree;

    #[test]
    fn get_is_prefix_sum() {
        let t = IndexedSumTree::from_vec(vec![4i64, 1, 3, 2]);
        let mut c = t.begin();
        let mut seen = Vec::new();
        while c <= t.end() {
            seen.push((c.index(), c.get()));
            c.move_next();
        }
        assert_eq!(seen, vec![(0, 0), (1, 4), (2, 5), (3, 8), (4, 10)]);
    }

    #[test]
    fn arithmetic() {
        let t = IndexedSumTree::from_vec(vec![1i64; 10]);
        let mut c = t.begin() + 7;
        assert_eq!(c.index(), 7);
        let back: isize = 3;
        assert_eq!((c - back).index(), 4);
        c -= 2;
        assert_eq!(c.index(), 5);
        c += 4;
        assert_eq!(c.index(), 9);
        c.move_prev();
        assert_eq!(c.get(), 8);
        assert_eq!(t.end() - c, 2);
        assert_eq!(c - t.end(), -2);
        assert_eq!(c + (-8), t.begin());
    }

    #[test]
    fn ordering_by_position() {
        let a = IndexedSumTree::from_vec(vec![1i64, 2, 3]);
        let b = IndexedSumTree::from_vec(vec![100i64, 200]);
        assert!(a.cursor(1) < a.cursor(2));
        assert!(a.end() > a.begin());
        assert_eq!(a.cursor(2).max(a.cursor(1)).index(), 2);
        // Only the position is compared.
        assert_eq!(a.cursor(2), b.end());
        assert_ne!(a.cursor(2).get(), b.end().get());
    }

    #[test]
    fn cursor_is_copy() {
        let t = IndexedSumTree::from_vec(vec![2i64, 2]);
        let a = t.cursor(1);
        let mut b = a;
        b.move_next();
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 2);
    }

    #[test]
    fn prefix_sums_half_open() {
        let t = IndexedSumTree::from_vec(vec![5i64, 1, 2]);
        let sums: Vec<_> = t.prefix_sums().collect();
        assert_eq!(sums, vec![0, 5, 6]);
        assert_eq!(t.prefix_sums().len(), 3);
        let rev: Vec<_> = t.prefix_sums().rev().collect();
        assert_eq!(rev, vec![6, 5, 0]);

        let mut it = t.prefix_sums();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(6));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);

        assert_eq!(IndexedSumTree::<i64>::new().prefix_sums().count(), 0);
    }
}
