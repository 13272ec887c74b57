//! sortkit - a stable merge sort for any random-access sequence.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::VecDeque;
//! use sortkit::ordering::Descending;
//!
//! let mut v = vec![5, 3, 1, 4, 2];
//! sortkit::sort_ascending(&mut v);
//! assert_eq!(v, vec![1, 2, 3, 4, 5]);
//!
//! let mut d: VecDeque<i32> = VecDeque::from(vec![5, 3, 1, 4, 2]);
//! sortkit::sort(&mut d, Descending);
//! assert_eq!(d, VecDeque::from(vec![5, 4, 3, 2, 1]));
//! ```
//!
//! # Pieces
//!
//! | Module | Role |
//! |--------|------|
//! | `sequence` | `RandomAccess`, the only capability the sort asks for |
//! | `ordering` | `Precedes` predicates: closures, `Ascending`, `ByKey`, ... |
//! | `sort` | the engine: `sort`, `sort_range`, `merge`, `MergeSort` |
//! | `verify` | order, permutation and stability checks |
//!
//! # Guarantees
//!
//! - **Permutation**: the output holds exactly the input elements.
//! - **Order**: no adjacent pair `(a, b)` has `ordering(b, a)`.
//! - **Stability**: equal elements keep their input order.
//!
//! A predicate that is not a strict weak ordering voids the last two but
//! never the first, and never causes out-of-bounds access.

pub mod error;
pub mod ordering;
pub mod sequence;
pub mod sort;
pub mod verify;

pub use error::ParseStrategyError;
pub use error::SortError;
pub use ordering::Precedes;
pub use sequence::RandomAccess;
pub use sort::MergeSort;
pub use sort::Strategy;
pub use sort::merge;
pub use sort::sort;
pub use sort::sort_ascending;
pub use sort::sort_by;
pub use sort::sort_by_key;
pub use sort::sort_range;
