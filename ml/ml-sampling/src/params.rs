//! Parameters for sample-size estimation.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// Parameters for a sample-size estimation run.
///
/// # Example
///
/// ```
/// use ml_sampling::EstimationParams;
///
/// // Defaults: +/-5% margin at 95% confidence, conservative base rate
/// let params = EstimationParams::default();
/// assert!((params.confidence - 0.95).abs() < 1e-10);
/// assert!((params.margin - 0.05).abs() < 1e-10);
/// assert!((params.base_rate - 0.5).abs() < 1e-10);
///
/// // Ask for the margin achievable with 100 already-labeled images
/// let params = EstimationParams::default().with_current_images(100);
/// assert_eq!(params.current_images, Some(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationParams {
    /// Two-sided confidence level. Values of 1 or more are treated as
    /// percentages and divided by 100 during normalization.
    pub confidence: f64,

    /// Desired margin of error as a fraction (0.05 == +/-5%).
    pub margin: f64,

    /// Assumed per-class detection rate; 0.5 gives the largest
    /// (most conservative) sample size.
    pub base_rate: f64,

    /// Optional count of already-labeled images; when set, the result
    /// reports the worst-case margin those images achieve per class.
    pub current_images: Option<u64>,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            margin: 0.05,
            base_rate: 0.5,
            current_images: None,
        }
    }
}

impl EstimationParams {
    /// Creates parameters with explicit confidence, margin, and base rate.
    #[must_use]
    pub const fn new(confidence: f64, margin: f64, base_rate: f64) -> Self {
        Self {
            confidence,
            margin,
            base_rate,
            current_images: None,
        }
    }

    /// Sets the confidence level.
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the margin of error.
    #[must_use]
    pub const fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the assumed base detection rate.
    #[must_use]
    pub const fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Sets the already-labeled image count.
    #[must_use]
    pub const fn with_current_images(mut self, count: u64) -> Self {
        self.current_images = Some(count);
        self
    }

    /// Returns the confidence level normalized into `(0, 1)`.
    ///
    /// A confidence of 1 or more is read as a percentage and divided
    /// by 100, so `95` means the same as `0.95`.
    ///
    /// # Errors
    ///
    /// Returns a range error when the percentage form is 100 or more.
    /// Values at or below zero are rejected later by the z-score
    /// computation, which owns the `(0, 1)` check.
    pub fn normalized_confidence(&self) -> Result<f64> {
        if self.confidence >= 1.0 {
            if self.confidence >= 100.0 {
                return Err(EstimateError::ConfidencePercentTooLarge(self.confidence));
            }
            return Ok(self.confidence / 100.0);
        }
        Ok(self.confidence)
    }
}
