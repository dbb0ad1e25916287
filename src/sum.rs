//! Arithmetic over integer sequences.

/// Sums a slice of integers.
///
/// The slice carries its own length, so there is no separate count argument
/// to fall out of sync with the allocation. `sum(&[])` is 0. Arithmetic is
/// plain `i32` addition; callers provide data whose sum is in range
/// (overflow panics in debug builds and wraps in release builds, as usual
/// for `i32`).
///
/// The full default-filled stream of length `n` sums to `n * (n - 1) / 2`:
///
/// ```rust
/// use seqstream::{sum, SequenceStream};
///
/// let mut stream = SequenceStream::new(10);
/// let mut values = [0i32; 10];
/// stream.read(&mut values);
/// assert_eq!(sum(&values), 45);
/// ```
pub fn sum(values: &[i32]) -> i32 {
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_sum_single_element() {
        assert_eq!(sum(&[42]), 42);
        assert_eq!(sum(&[-7]), -7);
    }

    #[test]
    fn test_sum_mixed_signs() {
        assert_eq!(sum(&[3, -3, 10, -5]), 5);
    }

    #[test]
    fn test_sum_of_default_sequence() {
        let values: Vec<i32> = (0..100).collect();
        assert_eq!(sum(&values), 100 * 99 / 2);
    }
}
