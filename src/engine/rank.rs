//! Distance ordering and truncation shared by the ranked search modes.
//!
//! All sorts here are stable: equal keys keep the order the store returned
//! them in, which is the documented tie-break for every mode.

use crate::util::numeric::within;

/// Sort `items` ascending by `key` and keep the first `limit`.
pub fn rank_and_cap<T, F>(mut items: Vec<T>, limit: usize, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| key(a).total_cmp(&key(b)));
    items.truncate(limit);
    items
}

/// `values` ordered by absolute distance to `target`.
pub fn by_distance(values: &[f64], target: f64) -> Vec<f64> {
    rank_and_cap(values.to_vec(), values.len(), |v| (v - target).abs())
}

/// The `n` values closest to `target`.
pub fn nearest_n(values: &[f64], target: f64, n: usize) -> Vec<f64> {
    rank_and_cap(values.to_vec(), n, |v| (v - target).abs())
}

/// The single value closest to `target`; the first one wins a tie.
///
/// There is no distance cutoff: any non-empty input yields a value.
pub fn nearest(values: &[f64], target: f64) -> Option<f64> {
    values
        .iter()
        .copied()
        .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
}

/// Values within `fraction * target` of `target`, closest first.
pub fn within_fraction(values: &[f64], target: f64, fraction: f64) -> Vec<f64> {
    let tolerance = target * fraction;
    by_distance(values, target)
        .into_iter()
        .filter(|v| within(*v, target, tolerance))
        .collect()
}
