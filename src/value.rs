use std::ops::Sub;

/// Element type of an [`IndexedSumTree`](crate::IndexedSumTree).
///
/// Anything with a zero, addition and subtraction qualifies; the trait is implemented for every
/// such type automatically.
pub trait Summable: Clone + num::Zero + Sub<Output = Self> {}
impl<T: Clone + num::Zero + Sub<Output = T>> Summable for T {}

/// Lowest set bit, `n & -n` in two's complement. `n` must be non-zero.
#[inline]
pub(crate) fn lsb<I: num::PrimInt>(n: I) -> I {
    debug_assert!(n != I::zero(), "lsb of zero");
    n & (!n + I::one())
}

#[cfg(test)]
mod tests {
    use super::lsb;

    #[test]
    fn lsb_isolates_lowest_bit() {
        assert_eq!(lsb(44usize), 4);
        assert_eq!(lsb(0b101101usize), 1);
        assert_eq!(lsb(64usize), 64);
        assert_eq!(lsb(1usize), 1);
        assert_eq!(lsb(usize::MAX), 1);
        assert_eq!(lsb(12u8), 4);
        assert_eq!(lsb(128u8), 128);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lsb of zero")]
    fn lsb_of_zero_is_rejected() {
        lsb(0usize);
    }
}
