//! Error types for the pedagogy building blocks.

use thiserror::Error;

/// Errors from stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("Cannot {operation} an empty stack")]
    Empty { operation: &'static str },
}

/// Errors from evaluating a linear recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    #[error("Arithmetic overflow while computing term {index}")]
    Overflow { index: usize },
}
