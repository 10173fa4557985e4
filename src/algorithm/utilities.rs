//! # Utilities
//!
//! Helper functions for algorithms.

/// Index of the largest value.
///
/// # Arguments
///
/// * `values`: Values to search through.
///
/// # Return value
///
/// The lowest index amongst the maximal values, or `None` if `values` is empty.
pub(crate) fn index_of_max<T: Ord>(values: &[T]) -> Option<usize> {
    index_of_extreme(values, |candidate, best| candidate > best)
}

/// Index of the smallest value.
///
/// # Return value
///
/// The lowest index amongst the minimal values, or `None` if `values` is empty.
pub(crate) fn index_of_min<T: Ord>(values: &[T]) -> Option<usize> {
    index_of_extreme(values, |candidate, best| candidate < best)
}

/// Index of the first value that is strictly better than all values before it, according to
/// `improves`.
fn index_of_extreme<T>(values: &[T], improves: impl Fn(&T, &T) -> bool) -> Option<usize> {
    values.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, &T)>, (i, value)| match best {
            Some((_, best_value)) if !improves(value, best_value) => best,
            _ => Some((i, value)),
        })
        .map(|(i, _)| i)
}
