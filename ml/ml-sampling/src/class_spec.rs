//! Class specifications: expected box annotations per image, by class.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// Expected bounding-box instances per image, keyed by class name.
///
/// Preserves insertion order so reports list classes the way the user
/// wrote them. Inserting an existing name overwrites its value.
///
/// # Example
///
/// ```
/// use ml_sampling::ClassSpec;
///
/// let spec = ClassSpec::parse("header:1,body:1.5").unwrap();
/// assert_eq!(spec.len(), 2);
/// assert_eq!(spec.get("body"), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    entries: Vec<(String, f64)>,
}

impl ClassSpec {
    /// Creates an empty class specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses comma-separated `name:boxes_per_image` pairs.
    ///
    /// Whitespace around pairs, names, and values is ignored, and empty
    /// chunks (e.g. a trailing comma) are skipped. A repeated name
    /// overwrites the earlier value.
    ///
    /// # Errors
    ///
    /// Returns a parse error when a chunk lacks a colon, a name is
    /// empty after trimming, a value is not a number, or no pairs
    /// remain at all.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut spec = Self::new();
        for chunk in raw.split(',') {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            let Some((name, value)) = chunk.split_once(':') else {
                return Err(EstimateError::malformed_pair(chunk));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(EstimateError::empty_class_name(chunk));
            }
            let boxes_per_image = value
                .trim()
                .parse::<f64>()
                .map_err(|_| EstimateError::invalid_box_value(name, value.trim()))?;
            spec.insert(name, boxes_per_image);
        }
        if spec.is_empty() {
            return Err(EstimateError::EmptyClassSpec);
        }
        Ok(spec)
    }

    /// Inserts a class, overwriting any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, boxes_per_image: f64) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = boxes_per_image;
        } else {
            self.entries.push((name, boxes_per_image));
        }
    }

    /// Returns the boxes-per-image value for a class, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no classes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl Default for ClassSpec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let spec = ClassSpec::parse("header:1,body:1.5").unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("header"), Some(1.0));
        assert_eq!(spec.get("body"), Some(1.5));
    }

    #[test]
    fn parse_preserves_order() {
        let spec = ClassSpec::parse("footer:1,header:2,body:3").unwrap();
        let names: Vec<&str> = spec.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["footer", "header", "body"]);
    }

    #[test]
    fn parse_trims_whitespace() {
        let spec = ClassSpec::parse(" header : 1 , body : 2 ").unwrap();
        assert_eq!(spec.get("header"), Some(1.0));
        assert_eq!(spec.get("body"), Some(2.0));
    }

    #[test]
    fn parse_skips_empty_chunks() {
        let spec = ClassSpec::parse("header:1,,body:2,").unwrap();
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn parse_last_write_wins() {
        let spec = ClassSpec::parse("header:1,header:2").unwrap();
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("header"), Some(2.0));
    }

    #[test]
    fn parse_splits_on_first_colon() {
        // The value side keeps everything after the first colon, so a
        // second colon makes the value unparseable rather than renaming.
        let err = ClassSpec::parse("a:1:2").unwrap_err();
        assert!(matches!(err, EstimateError::InvalidBoxValue { .. }));
    }

    #[test]
    fn parse_missing_colon() {
        let err = ClassSpec::parse("bad").unwrap_err();
        assert!(matches!(err, EstimateError::MalformedPair(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn parse_empty_name() {
        let err = ClassSpec::parse(":1").unwrap_err();
        assert!(matches!(err, EstimateError::EmptyClassName(_)));
    }

    #[test]
    fn parse_bad_value() {
        let err = ClassSpec::parse("header:abc").unwrap_err();
        assert!(matches!(err, EstimateError::InvalidBoxValue { .. }));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn parse_empty_string() {
        let err = ClassSpec::parse("").unwrap_err();
        assert!(matches!(err, EstimateError::EmptyClassSpec));
    }

    #[test]
    fn parse_only_commas() {
        let err = ClassSpec::parse(",,,").unwrap_err();
        assert!(matches!(err, EstimateError::EmptyClassSpec));
    }

    #[test]
    fn parse_negative_value_accepted() {
        // Positivity is enforced at estimation time, not by the parser.
        let spec = ClassSpec::parse("header:-1").unwrap();
        assert_eq!(spec.get("header"), Some(-1.0));
    }

    #[test]
    fn insert_overwrites() {
        let mut spec = ClassSpec::new();
        spec.insert("header", 1.0);
        spec.insert("header", 3.0);
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("header"), Some(3.0));
    }

    #[test]
    fn spec_serialization() {
        let spec = ClassSpec::parse("header:1,body:2").unwrap();
        let json = serde_json::to_string(&spec);
        assert!(json.is_ok());

        let roundtrip: std::result::Result<ClassSpec, _> =
            serde_json::from_str(&json.unwrap_or_default());
        assert!(roundtrip.is_ok());
        assert_eq!(roundtrip.unwrap_or_default(), spec);
    }
}
