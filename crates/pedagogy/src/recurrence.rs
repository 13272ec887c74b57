//! Order-K linear recurrences.
//!
//! Given coefficients `c[0..K]` and initial terms `a[0..K]`:
//!
//! ```text
//! a[n] = c[0] * a[n-1] + c[1] * a[n-2] + ... + c[K-1] * a[n-K]    for n >= K
//! ```
//!
//! Terms below K are the initial values, returned as given.
//!
//! Complexity:
//! - evaluate: O(n * K) time, O(K) space

use num_traits::CheckedAdd;
use num_traits::CheckedMul;
use num_traits::Zero;

use crate::error::RecurrenceError;

/// Compute term `index` of the recurrence.
///
/// ```
/// use pedagogy::recurrence::evaluate;
///
/// let fib = evaluate(&[1i64, 1], &[0, 1], 10).unwrap();
/// assert_eq!(fib, 55);
/// ```
pub fn evaluate<T, const K: usize>(
    coefficients: &[T; K],
    initial: &[T; K],
    index: usize,
) -> Result<T, RecurrenceError>
where
    T: Copy + Zero + CheckedAdd + CheckedMul,
{
    if index < K {
        return Ok(initial[index]);
    }

    // window[j] holds a[n - K + j] for the next term n.
    let mut window = *initial;
    let mut next = T::zero();
    for n in K..=index {
        next = T::zero();
        for i in 0..K {
            let term = coefficients[i]
                .checked_mul(&window[K - 1 - i])
                .ok_or(RecurrenceError::Overflow { index: n })?;
            next = next
                .checked_add(&term)
                .ok_or(RecurrenceError::Overflow { index: n })?;
        }
        if K > 0 {
            window.rotate_left(1);
            window[K - 1] = next;
        }
    }
    return Ok(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_terms_are_returned_verbatim() {
        let init = [4i32, -2, 9];
        for (i, expected) in init.iter().enumerate() {
            assert_eq!(evaluate(&[0, 0, 0], &init, i), Ok(*expected));
        }
    }

    #[test]
    fn fibonacci() {
        assert_eq!(evaluate(&[1u64, 1], &[0, 1], 10), Ok(55));
        assert_eq!(evaluate(&[1u64, 1], &[0, 1], 2), Ok(1));
    }

    #[test]
    fn order_three_all_ones() {
        // 0, 1, 2, 3, 6, 11, 20, 37
        assert_eq!(evaluate(&[1i32, 1, 1], &[0, 1, 2], 7), Ok(37));
    }

    #[test]
    fn first_coefficient_weights_latest_term() {
        // a[n] = 2 * a[n-1] + a[n-2]: 1, 1, 3, 7, 17
        assert_eq!(evaluate(&[2i32, 1], &[1, 1], 4), Ok(17));
    }

    #[test]
    fn overflow_is_reported_with_index() {
        // Fibonacci passes u8::MAX between terms 13 (233) and 14 (377).
        assert_eq!(
            evaluate(&[1u8, 1], &[0, 1], 20),
            Err(RecurrenceError::Overflow { index: 14 })
        );
    }

    #[test]
    fn zero_order_is_always_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(evaluate(&empty, &empty, 5), Ok(0));
    }
}
