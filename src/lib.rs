//! A binary indexed (Fenwick) tree that also keeps the plain values.
//!
//! [`IndexedSumTree`] answers prefix and range sums and applies point updates in O(log n), and
//! returns single elements in O(1). [`SumCursor`] walks positions of a tree and yields prefix
//! sums, so the [`search`] functions can find where a running total crosses a threshold.
//!
//! ```
//! use bitree::IndexedSumTree;
//!
//! let mut t = IndexedSumTree::from_vec(vec![3, 1, 4, 1, 5]);
//! assert_eq!(t.sum(3), 8);
//! t.add(1, 10);
//! assert_eq!(t.range_sum(1, 3), 15);
//! assert_eq!(t.lower_bound(&14).index(), 2);
//! assert_eq!(t.to_string(), "[3,11,4,1,5]");
//! ```

#[macro_use]
mod macros;

mod cursor;
mod error;
mod indexed_sum_tree;
pub mod search;
mod value;

pub use cursor::{PrefixSums, SumCursor};
pub use error::IndexError;
pub use indexed_sum_tree::IndexedSumTree;
pub use value::Summable;
