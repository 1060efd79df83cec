//! Gini index of a distribution of non-negative values.
//!
//! For values sorted ascending `x_1 ≤ … ≤ x_n` with sum `S`:
//!
//! ```text
//! G = Σ_i (2i - n - 1) · x_i / ((n - 1) · S)
//! ```
//!
//! `0.0` means a perfectly even distribution, `1.0` means everything is
//! concentrated in one item. Distributions with fewer than two items or a
//! zero sum are treated as even.

/// Gini index of `values`.
#[must_use]
pub fn gini_index(values: &[f64]) -> f64 {
    gini_index_with(values, values.len(), values.iter().sum())
}

/// Gini index of `num_items` items whose non-zero values are `values` and
/// whose total is `sum`.
///
/// Items beyond `values.len()` are taken to be zero, which lets sparse
/// callers skip them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gini_index_with(values: &[f64], num_items: usize, sum: f64) -> f64 {
    if num_items <= 1 || sum <= 0.0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = num_items as f64;
    let offset = num_items.saturating_sub(sorted.len());
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (2.0 * (offset + i + 1) as f64 - n - 1.0) * x)
        .sum();

    weighted / ((n - 1.0) * sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_distribution_is_zero() {
        assert!(gini_index(&[3.0, 3.0, 3.0, 3.0]).abs() < 1e-10);
    }

    #[test]
    fn full_concentration_is_one() {
        assert!((gini_index(&[0.0, 0.0, 0.0, 5.0]) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_inputs_are_even() {
        assert!(gini_index(&[]).abs() < 1e-10);
        assert!(gini_index(&[7.0]).abs() < 1e-10);
        assert!(gini_index(&[0.0, 0.0]).abs() < 1e-10);
    }

    #[test]
    fn order_does_not_matter() {
        let a = gini_index(&[1.0, 4.0, 2.0, 0.0, 3.0]);
        let b = gini_index(&[4.0, 3.0, 2.0, 1.0, 0.0]);
        assert!((a - b).abs() < 1e-12);
        // (-4*0 - 2*1 + 0*2 + 2*3 + 4*4) / (4 * 10)
        assert!((a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn omitted_items_count_as_zero() {
        let sparse = gini_index_with(&[5.0], 4, 5.0);
        let dense = gini_index(&[0.0, 0.0, 0.0, 5.0]);
        assert!((sparse - dense).abs() < 1e-12);
    }
}
