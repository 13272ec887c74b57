//! Cartesian products of fixed-size sequences.
//!
//! `cartesian!` takes any number of named inputs and yields every
//! combination as a flat tuple, in lexicographic order over the inputs: the
//! last input varies fastest. Each input only needs `.iter()` over `Clone`
//! items, so arrays, slices and vectors all work, and the element types may
//! differ between inputs.
//!
//! ```
//! use pedagogy::cartesian;
//!
//! let a = [1, 2];
//! let b = [3.5, 4.5];
//! let c = ['a', 'b'];
//! let all = cartesian!(x in a, y in b, z in c);
//! assert_eq!(all.len(), 8);
//! assert_eq!(all[0], (1, 3.5, 'a'));
//! assert_eq!(all[1], (1, 3.5, 'b'));
//! assert_eq!(all[7], (2, 4.5, 'b'));
//! ```

/// Every combination of the inputs as flat tuples, last input fastest.
#[macro_export]
macro_rules! cartesian {
    ($($name:ident in $seq:expr),+ $(,)?) => {{
        let mut out = ::std::vec::Vec::new();
        $crate::cartesian!(@nest out; (); $($name in $seq),+);
        out
    }};
    (@nest $out:ident; ($($bound:ident),*); $name:ident in $seq:expr $(, $rest_name:ident in $rest:expr)*) => {
        for $name in $seq.iter() {
            $crate::cartesian!(@nest $out; ($($bound,)* $name); $($rest_name in $rest),*);
        }
    };
    (@nest $out:ident; ($($bound:ident),*);) => {
        $out.push(($(::std::clone::Clone::clone($bound),)*));
    };
}

/// Number of combinations `cartesian!` yields for inputs of these lengths.
///
/// Returns `None` on overflow. The empty product has one combination.
pub const fn product_len(lens: &[usize]) -> Option<usize> {
    let mut total: usize = 1;
    let mut i = 0;
    while i < lens.len() {
        total = match total.checked_mul(lens[i]) {
            Some(t) => t,
            None => return None,
        };
        i += 1;
    }
    return Some(total);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_input_wraps_in_one_tuples() {
        let xs = [7, 8, 9];
        let out = cartesian!(x in xs);
        assert_eq!(out, vec![(7,), (8,), (9,)]);
    }

    #[test]
    fn lexicographic_order_over_inputs() {
        let nums = vec![1, 2];
        let words = ["x", "y", "z"];
        let out = cartesian!(n in nums, w in words);
        assert_eq!(
            out,
            vec![(1, "x"), (1, "y"), (1, "z"), (2, "x"), (2, "y"), (2, "z")]
        );
    }

    #[test]
    fn length_is_product_of_lengths() {
        let a = [1u8, 2];
        let b = [0.5f32, 1.5];
        let c = ['p', 'q', 'r'];
        let d = [true];
        let out = cartesian!(w in a, x in b, y in c, z in d);
        assert_eq!(Some(out.len()), product_len(&[2, 2, 3, 1]));
        assert_eq!(out[5], (1, 1.5, 'r', true));
    }

    #[test]
    fn empty_input_gives_no_combinations() {
        let a = [1, 2];
        let b: [char; 0] = [];
        let out = cartesian!(x in a, y in b);
        assert!(out.is_empty());
        assert_eq!(product_len(&[2, 0]), Some(0));
    }

    #[test]
    fn product_len_overflow() {
        assert_eq!(product_len(&[]), Some(1));
        assert_eq!(product_len(&[usize::MAX, 2]), None);
    }
}
