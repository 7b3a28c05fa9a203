//! Gaussian kernel density estimation over weekly point samples.

use serde::{Deserialize, Serialize};

/// One evaluation point of a density estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub value: f64,
    pub density: f64,
}

/// Estimate the density of `samples` on an even grid of `points` values
/// over `extent`.
///
/// Bandwidth follows Scott's rule. A degenerate sample (all values equal)
/// falls back to unit bandwidth so the estimate stays finite.
pub fn gaussian_kde(samples: &[f64], extent: (f64, f64), points: usize) -> Vec<DensityPoint> {
    if samples.is_empty() || points < 2 {
        return Vec::new();
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();
    let bandwidth = if sigma > 0.0 { sigma * n.powf(-0.2) } else { 1.0 };

    let (lo, hi) = extent;
    let step = (hi - lo) / (points - 1) as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = norm
                * samples
                    .iter()
                    .map(|s| (-0.5 * ((x - s) / bandwidth).powi(2)).exp())
                    .sum::<f64>();
            DensityPoint { value: x, density }
        })
        .collect()
}

/// Extent used by the weekly density view: zero through the sample maximum
/// plus one.
pub fn density_extent(samples: &[f64]) -> (f64, f64) {
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() {
        (0.0, max + 1.0)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trapezoid-rule integral of a density series.
    fn integrate(points: &[DensityPoint]) -> f64 {
        points
            .windows(2)
            .map(|w| (w[1].value - w[0].value) * (w[0].density + w[1].density) / 2.0)
            .sum()
    }

    #[test]
    fn test_kde_is_nonnegative_everywhere() {
        let samples = [3.0, 7.5, 12.0, 18.4, 25.2];
        let series = gaussian_kde(&samples, (0.0, 30.0), 100);

        assert_eq!(series.len(), 100);
        assert!(series.iter().all(|p| p.density >= 0.0));
    }

    #[test]
    fn test_kde_integrates_to_about_one_over_a_wide_extent() {
        let samples = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
        // Wide extent so essentially all mass lies inside it.
        let series = gaussian_kde(&samples, (-40.0, 70.0), 800);

        let integral = integrate(&series);
        assert!(
            (integral - 1.0).abs() < 0.02,
            "integral was {integral}"
        );
    }

    #[test]
    fn test_kde_peaks_near_the_sample_mass() {
        let samples = [10.0, 10.5, 9.5, 10.2, 9.8];
        let series = gaussian_kde(&samples, (0.0, 20.0), 200);

        let peak = series
            .iter()
            .max_by(|a, b| a.density.total_cmp(&b.density))
            .unwrap();
        assert!((peak.value - 10.0).abs() < 1.0);
    }

    #[test]
    fn test_kde_grid_spans_the_extent() {
        let samples = [5.0];
        let series = gaussian_kde(&samples, (0.0, 10.0), 11);

        assert_eq!(series.first().unwrap().value, 0.0);
        assert_eq!(series.last().unwrap().value, 10.0);
    }

    #[test]
    fn test_kde_degenerate_sample_stays_finite() {
        let samples = [7.0, 7.0, 7.0];
        let series = gaussian_kde(&samples, (0.0, 14.0), 50);

        assert!(series.iter().all(|p| p.density.is_finite()));
        assert!(series.iter().any(|p| p.density > 0.0));
    }

    #[test]
    fn test_kde_empty_inputs() {
        assert!(gaussian_kde(&[], (0.0, 10.0), 100).is_empty());
        assert!(gaussian_kde(&[1.0], (0.0, 10.0), 1).is_empty());
    }

    #[test]
    fn test_density_extent_runs_to_max_plus_one() {
        assert_eq!(density_extent(&[3.0, 27.4, 11.0]), (0.0, 28.4));
        assert_eq!(density_extent(&[]), (0.0, 1.0));
    }
}
