//! Small generic-programming building blocks.
//!
//! Each module stands on its own and shows one way of letting the type
//! system do the checking:
//!
//! | Module | Building block | Checked at compile time |
//! |--------|----------------|-------------------------|
//! | `stack` | `Stack<T, C>`, `CharStack` | backing container has a growable back |
//! | `product` | `cartesian!` | output tuple shape follows the inputs |
//! | `recurrence` | `evaluate` | coefficient and seed counts agree (`K`) |
//! | `visit` | `ForEachField` | every field is a `Field` |
//! | `capability` | `Indexed`, `exchange_sort` | container has size and indexing |
//!
//! # Example
//!
//! ```
//! use pedagogy::stack::Stack;
//! use pedagogy::visit::{ForEachField, Increment, render};
//!
//! let mut s: Stack<i32> = Stack::new();
//! s.push(1);
//! s.push(2);
//! assert_eq!(s.pop(), Ok(2));
//!
//! let mut record = (5, 10.5, 20);
//! record.for_each_field_mut(&mut Increment);
//! assert_eq!(render(&record), "6 11.5 21");
//! ```

pub mod capability;
pub mod error;
pub mod product;
pub mod recurrence;
pub mod stack;
pub mod visit;

pub use error::RecurrenceError;
pub use error::StackError;
