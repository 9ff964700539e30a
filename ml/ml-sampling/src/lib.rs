//! Labeled-sample requirement estimation for detector fine-tuning.
//!
//! Given the classes a detector must learn and how many bounding-box
//! annotations of each appear per document image, this crate answers:
//! how many labeled images does fine-tuning need to pin each class's
//! detection rate down to a target margin of error?
//!
//! # Estimation
//!
//! - [`estimate`] - Full per-class recommendation from a [`ClassSpec`]
//!   and [`EstimationParams`]
//! - [`EstimationResult`] - Structured result with a plain-text report
//!
//! # Statistics
//!
//! - [`z_score`] - Two-sided standard-normal critical value
//! - [`required_boxes`] - Proportion sample-size equation
//! - [`margin_from_boxes`] - Inverse: margin achievable with n boxes
//!
//! # Example
//!
//! ```
//! use ml_sampling::{estimate, ClassSpec, EstimationParams};
//!
//! let classes = ClassSpec::parse("header:1,body:1,footer:1").unwrap();
//! let result = estimate(&classes, &EstimationParams::default()).unwrap();
//!
//! // ~385 boxes for +/-5% at 95% confidence, one box per image
//! assert_eq!(result.recommended_images, 385);
//! ```
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, no partial results on error.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod class_spec;
mod error;
mod estimate;
mod params;
mod stats;

// Re-export class specification
pub use class_spec::ClassSpec;

// Re-export estimation
pub use estimate::{estimate, CurrentMargin, EstimationResult};

// Re-export parameters
pub use params::EstimationParams;

// Re-export statistics
pub use stats::{margin_from_boxes, required_boxes, z_score};

// Re-export error types
pub use error::{EstimateError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        estimate, margin_from_boxes, required_boxes, z_score, ClassSpec, CurrentMargin,
        EstimateError, EstimationParams, EstimationResult, Result,
    };
}
