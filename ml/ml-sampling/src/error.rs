//! Error types for ml-sampling crate.

use thiserror::Error;

/// Errors that can occur during sample-size estimation.
///
/// Variants fall into two families: parse errors from a malformed
/// class specification string, and range errors from numeric inputs
/// outside their valid domain. Every estimation call either fully
/// succeeds or fails with one of these; there is no partial result.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Class-spec chunk without a `name:value` shape.
    #[error("expected name:value pair, got '{0}'")]
    MalformedPair(String),

    /// Class name empty after trimming.
    #[error("empty class name in '{0}'")]
    EmptyClassName(String),

    /// Boxes-per-image value failed to parse as a number.
    #[error("invalid boxes-per-image value for '{name}': '{value}'")]
    InvalidBoxValue {
        /// Class name the value belongs to.
        name: String,
        /// The unparseable text.
        value: String,
    },

    /// No class:value pairs at all.
    #[error("at least one class:value pair is required")]
    EmptyClassSpec,

    /// A rate parameter outside the open interval (0, 1).
    #[error("{name} must be in (0, 1), got {value}")]
    OutOfRange {
        /// Parameter name (confidence, margin, base_rate).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Confidence given as a percentage of 100 or more.
    #[error("confidence percentage must be less than 100, got {0}")]
    ConfidencePercentTooLarge(f64),

    /// A class declared zero or negative boxes per image.
    #[error("boxes per image for '{name}' must be positive, got {value}")]
    NonPositiveBoxesPerImage {
        /// Offending class name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A labeled-box count of zero or less.
    #[error("labeled box count must be positive, got {0}")]
    NonPositiveBoxCount(f64),

    /// A current-image count of zero.
    #[error("current image count must be positive")]
    NonPositiveImageCount,
}

impl EstimateError {
    /// Creates a malformed pair error.
    #[must_use]
    pub fn malformed_pair(chunk: impl Into<String>) -> Self {
        Self::MalformedPair(chunk.into())
    }

    /// Creates an empty class name error.
    #[must_use]
    pub fn empty_class_name(chunk: impl Into<String>) -> Self {
        Self::EmptyClassName(chunk.into())
    }

    /// Creates an invalid box value error.
    #[must_use]
    pub fn invalid_box_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBoxValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an out-of-range parameter error.
    #[must_use]
    pub const fn out_of_range(name: &'static str, value: f64) -> Self {
        Self::OutOfRange { name, value }
    }

    /// Creates a non-positive boxes-per-image error.
    #[must_use]
    pub fn non_positive_boxes(name: impl Into<String>, value: f64) -> Self {
        Self::NonPositiveBoxesPerImage {
            name: name.into(),
            value,
        }
    }

    /// Returns true for errors raised while parsing a class-spec string.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPair(_)
                | Self::EmptyClassName(_)
                | Self::InvalidBoxValue { .. }
                | Self::EmptyClassSpec
        )
    }

    /// Returns true for errors raised by numeric domain validation.
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        !self.is_parse_error()
    }
}

/// Result type for ml-sampling operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_malformed_pair() {
        let err = EstimateError::malformed_pair("bad");
        assert!(err.to_string().contains("bad"));
        assert!(err.is_parse_error());
        assert!(!err.is_range_error());
    }

    #[test]
    fn error_empty_class_name() {
        let err = EstimateError::empty_class_name(":1");
        assert!(err.to_string().contains(":1"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn error_invalid_box_value() {
        let err = EstimateError::invalid_box_value("header", "abc");
        assert!(err.to_string().contains("header"));
        assert!(err.to_string().contains("abc"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn error_empty_class_spec() {
        let err = EstimateError::EmptyClassSpec;
        assert!(err.to_string().contains("at least one"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn error_out_of_range() {
        let err = EstimateError::out_of_range("margin", 1.5);
        assert!(err.to_string().contains("margin"));
        assert!(err.to_string().contains("1.5"));
        assert!(err.is_range_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn error_confidence_percent() {
        let err = EstimateError::ConfidencePercentTooLarge(100.0);
        assert!(err.to_string().contains("less than 100"));
        assert!(err.is_range_error());
    }

    #[test]
    fn error_non_positive_boxes() {
        let err = EstimateError::non_positive_boxes("footer", 0.0);
        assert!(err.to_string().contains("footer"));
        assert!(err.is_range_error());
    }

    #[test]
    fn error_non_positive_box_count() {
        let err = EstimateError::NonPositiveBoxCount(-3.0);
        assert!(err.to_string().contains("-3"));
        assert!(err.is_range_error());
    }

    #[test]
    fn error_non_positive_image_count() {
        let err = EstimateError::NonPositiveImageCount;
        assert!(err.to_string().contains("positive"));
        assert!(err.is_range_error());
    }
}
