//! Descriptive statistics used by the section renderers.
//!
//! Conventions follow the usual data-analysis defaults: quantiles use linear
//! interpolation between order statistics, standard deviations are sample
//! (n - 1) deviations, and histogram bins are equal-width with the last bin
//! closed on the right.

use std::f64::consts::PI;

/// z-score for a two-sided 95% interval.
const Z_95: f64 = 1.959_963_984_540_054;

// ---------------------------------------------------------------------------
// Basic moments
// ---------------------------------------------------------------------------

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Sample standard deviation; needs at least two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// 95% confidence interval of the mean (normal approximation).
pub fn mean_confidence_interval(values: &[f64]) -> Option<(f64, f64)> {
    let m = mean(values)?;
    let half = Z_95 * sample_std(values)? / (values.len() as f64).sqrt();
    Some((m - half, m + half))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Quantiles and box statistics
// ---------------------------------------------------------------------------

/// Quantile `q` in `[0, 1]` of an ascending, non-empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Five-number summary plus outliers, Tukey style (whiskers at 1.5 × IQR).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        // Whiskers reach the most extreme data points still inside the fences.
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Number of values per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }
}

/// Equal-width histogram over `[min, max]`.
///
/// A constant sample gets the range `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let (mut lo, mut hi) = (min(values)?, max(values)?);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Gaussian KDE with Scott's bandwidth, evaluated on `grid` evenly spaced
/// points spanning the data. Returns `(x, density)` pairs.
///
/// Empty when the sample has fewer than two values or no spread.
pub fn gaussian_kde(values: &[f64], grid: usize) -> Vec<[f64; 2]> {
    let Some(std) = sample_std(values) else {
        return Vec::new();
    };
    if std <= 0.0 || grid < 2 {
        return Vec::new();
    }
    let (Some(lo), Some(hi)) = (min(values), max(values)) else {
        return Vec::new();
    };

    let n = values.len() as f64;
    let bandwidth = std * n.powf(-0.2);
    let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
    let step = (hi - lo) / (grid - 1) as f64;

    (0..grid)
        .map(|i| {
            let x = lo + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum();
            [x, density * norm]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group values by category, categories in order of first appearance.
///
/// Rows with a missing category are dropped; rows with a missing value still
/// register their category, so a category whose values are all missing keeps
/// its slot with an empty group.
pub fn group_by_first_appearance(
    categories: &[Option<String>],
    values: &[Option<f64>],
) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (category, value) in categories.iter().zip(values) {
        let Some(category) = category else {
            continue;
        };
        let slot = match groups.iter().position(|(c, _)| c == category) {
            Some(i) => i,
            None => {
                groups.push((category.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(v) = value {
            groups[slot].1.push(*v);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean(&v), Some(2.5));
        assert_eq!(max(&v), Some(4.0));
        assert_eq!(min(&v), Some(1.0));
        let std = sample_std(&v).unwrap();
        assert!((std - 1.290_994_448_735_805_6).abs() < 1e-12);
        assert_eq!(mean(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(sample_std(&[3.0]), None);
    }

    #[test]
    fn confidence_interval_is_centred_on_mean() {
        let (lo, hi) = mean_confidence_interval(&[10.0, 12.0, 14.0]).unwrap();
        assert!(((lo + hi) / 2.0 - 12.0).abs() < 1e-12);
        // std = 2, n = 3 → half width = 1.96 * 2 / sqrt(3)
        assert!((hi - 12.0 - Z_95 * 2.0 / 3f64.sqrt()).abs() < 1e-12);
        assert!(mean_confidence_interval(&[5.0]).is_none());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(2.5, 4), 2.5);
        assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
        assert_eq!(round_to(2.718_28, 4), 2.7183);
        assert_eq!(round_to(-2.718_28, 4), -2.7183);
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn box_stats_flag_outliers() {
        let stats = BoxStats::from_values(&[100.0, 3.0, 1.0, 4.0, 2.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 4.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn histogram_spreads_values_over_equal_bins() {
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        let h = histogram(&values, 20).unwrap();
        assert_eq!(h.edges.len(), 21);
        assert_eq!(h.edges[0], 0.0);
        assert!((h.edges[20] - 19.0).abs() < 1e-9);
        assert_eq!(h.counts, vec![1; 20]);
        assert!((h.bin_width() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn histogram_of_constant_sample_is_widened() {
        let h = histogram(&[2.0, 2.0, 2.0], 20).unwrap();
        assert_eq!(h.edges[0], 1.5);
        assert_eq!(h.edges[20], 2.5);
        assert_eq!(h.counts.iter().sum::<usize>(), 3);
        assert!(histogram(&[], 20).is_none());
    }

    #[test]
    fn kde_is_symmetric_for_symmetric_data() {
        let curve = gaussian_kde(&[1.0, 2.0, 3.0, 4.0], 200);
        assert_eq!(curve.len(), 200);
        assert_eq!(curve[0][0], 1.0);
        assert!((curve[199][0] - 4.0).abs() < 1e-12);
        assert!(curve.iter().all(|p| p[1] > 0.0));
        assert!((curve[0][1] - curve[199][1]).abs() < 1e-12);
        assert!(gaussian_kde(&[1.0], 200).is_empty());
        assert!(gaussian_kde(&[1.0, 1.0], 200).is_empty());
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let categories = vec![
            Some("Master's".to_string()),
            Some("Bachelor's".to_string()),
            None,
            Some("Master's".to_string()),
            Some("PhD".to_string()),
        ];
        let values = vec![Some(60.0), Some(40.0), Some(99.0), Some(70.0), None];
        let groups = group_by_first_appearance(&categories, &values);
        assert_eq!(
            groups,
            vec![
                ("Master's".to_string(), vec![60.0, 70.0]),
                ("Bachelor's".to_string(), vec![40.0]),
                ("PhD".to_string(), vec![]),
            ]
        );
    }
}
