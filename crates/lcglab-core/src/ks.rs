//! One-sample Kolmogorov-Smirnov test against the uniform distribution.

use serde::Serialize;

/// The D+, D−, and combined D statistics for one sorted sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KsStatistic {
    /// max over i of (i/n − value_i).
    pub d_plus: f64,
    /// max over i of (value_i − (i−1)/n).
    pub d_minus: f64,
    /// max(d_plus, d_minus).
    pub d: f64,
}

/// Compute the KS statistic for uniformity over [0, 1).
///
/// `sample` must already be sorted ascending (see
/// [`sample::sort_ascending`](crate::sample::sort_ascending)); sorting is
/// not redone here. The formula stays computable for any ordering, but on
/// an unsorted sample the result is meaningless rather than an error.
pub fn compute_d(sample: &[f64]) -> KsStatistic {
    let n = sample.len() as f64;
    let mut d_plus = 0.0f64;
    let mut d_minus = 0.0f64;
    for (i, &value) in sample.iter().enumerate() {
        let rank = (i + 1) as f64;
        d_plus = d_plus.max(rank / n - value);
        d_minus = d_minus.max(value - (rank - 1.0) / n);
    }
    KsStatistic {
        d_plus,
        d_minus,
        d: d_plus.max(d_minus),
    }
}

/// Asymptotic p-value for a KS statistic (Kolmogorov distribution series).
///
/// Companion information for reports; accept/reject decisions use the
/// critical-value table in [`significance`](crate::significance).
pub fn asymptotic_p_value(d: f64, n: usize) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    let mut p = 0.0;
    for k in 1..=100i32 {
        let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
        p += sign * (-2.0 * (k as f64 * lambda).powi(2)).exp();
    }
    (2.0 * p).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sort_ascending;

    #[test]
    fn uniform_grid_has_minimal_deviation() {
        // For the grid {1/n, ..., n/n} the empirical CDF hugs the uniform
        // CDF from above: d_plus is exactly 0 and d collapses to 1/n.
        let n = 100;
        let grid: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
        let stat = compute_d(&grid);
        assert!(stat.d_plus.abs() < 1e-12);
        assert!((stat.d - 1.0 / n as f64).abs() < 1e-12);
    }

    #[test]
    fn clustered_sample_has_large_deviation() {
        let sample = sort_ascending(&[0.91, 0.92, 0.93, 0.94, 0.95]);
        let stat = compute_d(&sample);
        // All mass near 1.0: D− dominates and is close to 0.91.
        assert!(stat.d_minus > 0.9);
        assert!((stat.d - stat.d_minus).abs() < 1e-12);
    }

    #[test]
    fn statistic_is_order_independent_after_sorting() {
        let values = [0.62, 0.05, 0.33, 0.91, 0.47, 0.18];
        let mut reversed = values;
        reversed.reverse();
        let a = compute_d(&sort_ascending(&values));
        let b = compute_d(&sort_ascending(&reversed));
        assert!((a.d - b.d).abs() < 1e-15);
        assert!((a.d_plus - b.d_plus).abs() < 1e-15);
        assert!((a.d_minus - b.d_minus).abs() < 1e-15);
    }

    #[test]
    fn components_never_go_negative() {
        let stat = compute_d(&sort_ascending(&[0.1, 0.5, 0.9]));
        assert!(stat.d_plus >= 0.0);
        assert!(stat.d_minus >= 0.0);
        assert!(stat.d >= stat.d_plus.max(stat.d_minus) - 1e-15);
    }

    #[test]
    fn empty_sample_yields_zero_statistic() {
        let stat = compute_d(&[]);
        assert_eq!(stat.d, 0.0);
    }

    #[test]
    fn p_value_shrinks_with_deviation() {
        let near = asymptotic_p_value(0.05, 100);
        let far = asymptotic_p_value(0.30, 100);
        assert!(near > far);
        assert!((0.0..=1.0).contains(&near));
        assert!((0.0..=1.0).contains(&far));
    }
}
