//! Binary search over cursor ranges.
//!
//! The prefix sums behind a cursor range `[first, last)` must be partitioned with respect to the
//! searched predicate, which holds whenever no element is negative. Each probe is an O(log n)
//! prefix sum query, so a search costs O(log² n).

use crate::{cursor::SumCursor, value::Summable};

/// First cursor in `[first, last)` for whose prefix sum `pred` is false, or `last`.
///
/// `pred` must be true for a (possibly empty) leading part of the range and false after it.
pub fn partition_point<'a, T, P>(
    mut first: SumCursor<'a, T>,
    last: SumCursor<'a, T>,
    mut pred: P,
) -> SumCursor<'a, T>
where
    T: Summable,
    P: FnMut(&T) -> bool,
{
    let mut count = last - first;
    while count > 0 {
        let step = count / 2;
        let mid = first + step;
        if pred(&mid.get()) {
            first = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

/// First cursor in `[first, last)` whose prefix sum is not less than `value`, or `last`.
pub fn lower_bound<'a, T, Q>(
    first: SumCursor<'a, T>,
    last: SumCursor<'a, T>,
    value: &Q,
) -> SumCursor<'a, T>
where
    T: Summable + PartialOrd<Q>,
    Q: ?Sized,
{
    partition_point(first, last, |ps| ps < value)
}

/// First cursor in `[first, last)` whose prefix sum is greater than `value`, or `last`.
pub fn upper_bound<'a, T, Q>(
    first: SumCursor<'a, T>,
    last: SumCursor<'a, T>,
    value: &Q,
) -> SumCursor<'a, T>
where
    T: Summable + PartialOrd<Q>,
    Q: ?Sized,
{
    partition_point(first, last, |ps| ps <= value)
}
