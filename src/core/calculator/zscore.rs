//! Per-annotator z-score normalization of quality metrics.
//!
//! Each annotator is normalized against their own mean and spread, which
//! controls for systematically harsh or lenient scorers and isolates the
//! relative discrimination between target and control items.

/// Lower bound applied to the sample stdev before dividing. The historical
/// rule clamps whenever the stdev truncates to integer zero, not only on
/// exact zero; near-constant metrics would otherwise blow the z-scores up.
pub const STDEV_CLAMP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreScale {
    pub mean: f64,
    pub stdev: f64,
}

impl ScoreScale {
    /// Fit the scale over all raw metric values of one annotator.
    ///
    /// `distinct_annotations` is the deduplicated annotation count, which is
    /// what both the mean divisor and the corrected sample size are based
    /// on, not the raw row count.
    pub fn fit(metrics: &[f64], distinct_annotations: usize) -> Self {
        let n = distinct_annotations.max(1) as f64;
        let mean = metrics.iter().sum::<f64>() / n;

        let corrected = distinct_annotations as i64 - 1;
        let mut stdev = STDEV_CLAMP;
        if corrected > 0 {
            stdev = metrics
                .iter()
                .map(|m| (m - mean).powi(2) / corrected as f64)
                .sum::<f64>()
                .sqrt();
        }

        if stdev.trunc() == 0.0 {
            stdev = STDEV_CLAMP;
        }

        Self { mean, stdev }
    }

    pub fn z_score(&self, metric: f64) -> f64 {
        (metric - self.mean) / self.stdev
    }
}
