//! Labeled-image requirement estimation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::class_spec::ClassSpec;
use crate::error::{EstimateError, Result};
use crate::params::EstimationParams;
use crate::stats::{margin_from_boxes, required_boxes, z_score};

/// Worst-case margin achievable for one class with the labeled images
/// already on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMargin {
    /// Class name.
    pub class: String,

    /// Worst-case margin of error as a fraction.
    pub margin: f64,

    /// Labeled boxes those images yield for this class.
    pub boxes: f64,
}

/// Result of a sample-size estimation run.
///
/// Produced by [`estimate`]; immutable, and fully determined by the
/// inputs. `images_per_class` preserves the class order of the input
/// specification.
///
/// # Example
///
/// ```
/// use ml_sampling::{estimate, ClassSpec, EstimationParams};
///
/// let classes = ClassSpec::parse("header:1,body:2").unwrap();
/// let result = estimate(&classes, &EstimationParams::default()).unwrap();
///
/// assert_eq!(result.recommended_images, 385);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Two-sided z-score used by the formulas.
    pub z: f64,

    /// Required labeled boxes, unrounded. Shared across classes; the
    /// formula only depends on per-class rates at division time.
    pub required_boxes: f64,

    /// Recommended labeled images per class, in input order.
    pub images_per_class: Vec<(String, u64)>,

    /// Overall recommendation: the maximum per-class count, since the
    /// scarcest class is the binding constraint.
    pub recommended_images: u64,

    /// Confidence level after percentage normalization.
    pub confidence: f64,

    /// Target margin of error.
    pub margin: f64,

    /// Assumed base detection rate.
    pub base_rate: f64,

    /// Already-labeled image count, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_images: Option<u64>,

    /// Worst-case margins for the already-labeled images, per class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_margins: Vec<CurrentMargin>,
}

impl EstimationResult {
    /// Renders the result as a human-readable report.
    #[must_use]
    #[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
    pub fn to_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        let _ = writeln!(
            report,
            "Target margin \u{b1}{:.1}% at {:.1}% confidence (z={:.2}) with base rate {:.2}",
            self.margin * 100.0,
            self.confidence * 100.0,
            self.z,
            self.base_rate
        );
        let _ = writeln!(
            report,
            "Required boxes per class: {:.0}",
            self.required_boxes.ceil()
        );
        let _ = writeln!(report, "Images needed per class:");
        for (name, count) in &self.images_per_class {
            let _ = writeln!(report, "  - {name}: {count}");
        }
        let _ = writeln!(
            report,
            "Recommended labeled images: {}",
            self.recommended_images
        );

        if let Some(current) = self.current_images {
            let _ = writeln!(report);
            let _ = writeln!(report, "With {current} labeled images:");
            for entry in &self.current_margins {
                let _ = writeln!(
                    report,
                    "  - {}: worst-case margin \u{b1}{:.1}% ({} labeled boxes)",
                    entry.class,
                    entry.margin * 100.0,
                    entry.boxes
                );
            }
        }

        report
    }
}

/// Estimates how many labeled images are needed per class to reach the
/// requested statistical precision.
///
/// Applies the proportion sample-size equation once (it is
/// class-agnostic), then divides by each class's boxes-per-image rate
/// with ceiling rounding. The overall recommendation is the maximum
/// across classes. When `params.current_images` is set, the result also
/// carries the worst-case margin those images achieve per class.
///
/// Pure function of its inputs; any invalid input fails the whole call
/// with no partial result.
///
/// # Errors
///
/// Returns a range error when confidence, margin, or base rate is
/// outside `(0, 1)` after normalization, when a class's boxes-per-image
/// is not positive, or when a supplied current-image count is zero.
/// Returns a parse error when the class specification is empty.
pub fn estimate(classes: &ClassSpec, params: &EstimationParams) -> Result<EstimationResult> {
    if classes.is_empty() {
        return Err(EstimateError::EmptyClassSpec);
    }

    debug!(
        classes = classes.len(),
        confidence = params.confidence,
        margin = params.margin,
        base_rate = params.base_rate,
        "Estimating labeled-image requirement"
    );

    let confidence = params.normalized_confidence()?;
    let z = z_score(confidence)?;
    let boxes_needed = required_boxes(z, params.margin, params.base_rate)?;

    let mut images_per_class = Vec::with_capacity(classes.len());
    for (name, boxes_per_image) in classes.iter() {
        if boxes_per_image <= 0.0 {
            return Err(EstimateError::non_positive_boxes(name, boxes_per_image));
        }
        // Both operands are positive, so the ceiling fits in u64 for
        // any realistic precision target.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (boxes_needed / boxes_per_image).ceil() as u64;
        images_per_class.push((name.to_string(), count));
    }

    let recommended_images = images_per_class
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);

    let mut current_margins = Vec::new();
    if let Some(current) = params.current_images {
        if current == 0 {
            return Err(EstimateError::NonPositiveImageCount);
        }
        #[allow(clippy::cast_precision_loss)]
        let current_f = current as f64;
        for (name, boxes_per_image) in classes.iter() {
            let boxes = current_f * boxes_per_image;
            let margin = margin_from_boxes(z, params.base_rate, boxes)?;
            current_margins.push(CurrentMargin {
                class: name.to_string(),
                margin,
                boxes,
            });
        }
    }

    info!(
        z = format!("{z:.3}"),
        required_boxes = format!("{boxes_needed:.1}"),
        recommended = recommended_images,
        "Estimation complete"
    );

    Ok(EstimationResult {
        z,
        required_boxes: boxes_needed,
        images_per_class,
        recommended_images,
        confidence,
        margin: params.margin,
        base_rate: params.base_rate,
        current_images: params.current_images,
        current_margins,
    })
}
