use crate::{
    cursor::{PrefixSums, SumCursor},
    error::IndexError,
    search,
    value::{lsb, Summable},
};
use std::{fmt, iter::FromIterator, mem, ops::Index};

/// A sequence of values with O(log n) point updates and prefix sums, and O(1) element access.
///
/// Two parallel vectors are kept: `values` is the plain sequence, `tree` is its implicit
/// binary indexed tree. `tree` is 1-indexed, `tree[0]` is never read, and for `i >= 1`
/// `tree[i]` holds the sum of `values[i - lsb(i)..i]`. Every prefix sum `sum(i)` is then the
/// sum of `tree[i]`, `tree[i - lsb(i)]`, ... down to `tree[0]` exclusive.
///
/// Index arguments are preconditions, exactly like slice indexing: passing an out of range
/// index is a caller bug and panics. Debug builds additionally report which precondition was
/// broken. The `try_*` methods check their arguments and return an [`IndexError`] instead.
#[derive(Clone, Debug)]
pub struct IndexedSumTree<T> {
    tree: Vec<T>,
    values: Vec<T>,
}

impl<T: Summable> IndexedSumTree<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            tree: vec![T::zero()],
            values: Vec::new(),
        }
    }

    /// Takes ownership of `values` and builds the tree over them.
    ///
    /// O(n log n)
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut this = Self {
            tree: Vec::with_capacity(values.len() + 1),
            values,
        };
        this.rebuild();
        this
    }

    /// Copies `values` and builds the tree over the copy.
    ///
    /// O(n log n)
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    /// Moves the contents out, leaving `self` empty as if freshly created with [`new`].
    ///
    /// [`new`]: IndexedSumTree::new
    pub fn take(&mut self) -> Self {
        ttrace!(len = self.len(), "taking contents");
        mem::take(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The plain sequence, in index order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// O(1)
    #[inline]
    pub fn get(&self, index: usize) -> T {
        debug_assert!(
            index < self.len(),
            "get: index {} out of bounds for length {}",
            index,
            self.len()
        );
        self.values[index].clone()
    }

    /// Adds `delta` to the element at `index`.
    ///
    /// O(log n)
    pub fn add(&mut self, index: usize, delta: T) {
        debug_assert!(
            index < self.len(),
            "add: index {} out of bounds for length {}",
            index,
            self.len()
        );
        self.values[index] = self.values[index].clone() + delta.clone();
        self.propagate(index, delta);
    }

    /// Sets the element at `index` to `value`, by adding the difference to the current value.
    ///
    /// O(log n)
    pub fn update(&mut self, index: usize, value: T) {
        let delta = value - self.get(index);
        self.add(index, delta);
    }

    /// Sum of the first `index` elements, `values[..index]`. `sum(0)` is zero and
    /// `sum(self.len())` is the total.
    ///
    /// O(log n)
    pub fn sum(&self, mut index: usize) -> T {
        debug_assert!(
            index <= self.len(),
            "sum: index {} out of bounds for length {}",
            index,
            self.len()
        );
        let mut ps = T::zero();
        while index != 0 {
            ps = ps + self.tree[index].clone();
            index &= index - 1;
        }
        ps
    }

    /// Sum of `values[left..right]`, computed as `sum(right) - sum(left)`.
    ///
    /// When `left > right` this is the negation of `range_sum(right, left)`, not an error.
    ///
    /// O(log n)
    #[inline]
    pub fn range_sum(&self, left: usize, right: usize) -> T {
        self.sum(right) - self.sum(left)
    }

    /// Truncates, or extends with zeros, to `new_len` elements, then rebuilds the whole tree.
    ///
    /// O(n log n)
    pub fn resize(&mut self, new_len: usize) {
        if new_len == self.len() {
            return;
        }

        tdebug!(from = self.len(), to = new_len, "resizing");
        self.values.resize(new_len, T::zero());
        self.rebuild();
    }

    /// Appends `x`, filling in its tree node from the nodes to its left.
    ///
    /// Avg: O(1), Worst case: O(log n)
    pub fn push(&mut self, x: T) {
        let pos = self.tree.len();
        let bottom = pos - lsb(pos);

        let mut node = x.clone();
        let mut i = pos - 1;
        while bottom < i {
            node = self.tree[i].clone() + node;
            i -= lsb(i); // i is going to the left of `node`
        }

        self.tree.push(node);
        self.values.push(x);
    }

    /// Removes the last element. No other node covers it, so nothing else changes.
    ///
    /// O(1)
    pub fn pop(&mut self) -> Option<T> {
        let x = self.values.pop()?;
        self.tree.pop();
        Some(x)
    }

    /// Reserves capacity for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.tree.reserve(additional);
    }

    /// Cursor at position 0, where the prefix sum is zero.
    #[inline]
    pub fn begin(&self) -> SumCursor<'_, T> {
        SumCursor::new(self, 0)
    }

    /// Cursor at position `self.len()`, where the prefix sum is the total.
    #[inline]
    pub fn end(&self) -> SumCursor<'_, T> {
        SumCursor::new(self, self.len())
    }

    #[inline]
    pub fn cursor(&self, index: usize) -> SumCursor<'_, T> {
        SumCursor::new(self, index)
    }

    /// Prefix sums `sum(0), sum(1), ..., sum(len - 1)`, i.e. the cursor range `[begin, end)`.
    #[inline]
    pub fn prefix_sums(&self) -> PrefixSums<'_, T> {
        PrefixSums::new(self.begin(), self.end())
    }

    /// First cursor in `[begin, end)` whose prefix sum is not less than `value`, or `end`.
    ///
    /// Only meaningful when the prefix sums are non-decreasing, e.g. with no negative elements.
    pub fn lower_bound<Q: ?Sized>(&self, value: &Q) -> SumCursor<'_, T>
    where
        T: PartialOrd<Q>,
    {
        search::lower_bound(self.begin(), self.end(), value)
    }

    /// First cursor in `[begin, end)` whose prefix sum is greater than `value`, or `end`.
    pub fn upper_bound<Q: ?Sized>(&self, value: &Q) -> SumCursor<'_, T>
    where
        T: PartialOrd<Q>,
    {
        search::upper_bound(self.begin(), self.end(), value)
    }

    pub fn try_get(&self, index: usize) -> Result<T, IndexError> {
        self.check_element(index)?;
        Ok(self.get(index))
    }

    pub fn try_add(&mut self, index: usize, delta: T) -> Result<(), IndexError> {
        self.check_element(index)?;
        self.add(index, delta);
        Ok(())
    }

    pub fn try_update(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        self.check_element(index)?;
        self.update(index, value);
        Ok(())
    }

    pub fn try_sum(&self, index: usize) -> Result<T, IndexError> {
        if index > self.len() {
            return Err(IndexError::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.sum(index))
    }

    pub fn try_range_sum(&self, left: usize, right: usize) -> Result<T, IndexError> {
        if left > self.len() || right > self.len() {
            return Err(IndexError::RangeOutOfBounds {
                left,
                right,
                len: self.len(),
            });
        }
        Ok(self.range_sum(left, right))
    }

    fn check_element(&self, index: usize) -> Result<(), IndexError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexError::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Clears the tree and folds every element back in, in index order.
    ///
    /// O(n log n)
    fn rebuild(&mut self) {
        self.tree.clear();
        self.tree.resize(self.values.len() + 1, T::zero());
        for i in 0..self.values.len() {
            let x = self.values[i].clone();
            self.propagate(i, x);
        }
        tdebug!(len = self.values.len(), "rebuilt tree");
    }

    /// Adds `dx` to every node covering element `i`.
    ///
    /// O(log n)
    fn propagate(&mut self, i: usize, dx: T) {
        let mut pos = i + 1;
        while pos < self.tree.len() {
            // TODO: Require `AddAssign` on `Summable` to drop this clone.
            self.tree[pos] = self.tree[pos].clone() + dx.clone();
            pos += lsb(pos);
        }
    }
}

impl<T: Summable> Default for IndexedSumTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Summable> From<Vec<T>> for IndexedSumTree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Summable> From<&[T]> for IndexedSumTree<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Summable> FromIterator<T> for IndexedSumTree<T> {
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Summable> Extend<T> for IndexedSumTree<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        match iter.size_hint() {
            (_, Some(len)) => self.reserve(len),
            (len, None) => self.reserve(len),
        }

        for x in iter {
            self.push(x);
        }
    }
}

impl<T> Index<usize> for IndexedSumTree<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> AsRef<[T]> for IndexedSumTree<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

/// Renders the values as `[v0,v1,...]`, with no spaces.
impl<T: fmt::Display> fmt::Display for IndexedSumTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.values.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}
