//! Ordered attribute lists.
//!
//! [`Attributes`] collects key/value pairs in insertion order and normalizes
//! every value to a string before it reaches the tree. Numbers are formatted
//! with a caller-chosen precision so output is stable across runs.
//! Duplicate keys are only detected when the list is attached to an element,
//! which keeps the builder chainable.

use indexmap::{IndexMap, map::Entry};

use super::error::{InvalidElementReason, MarkupError};

/// Ordered attribute builder.
///
/// # Examples
///
/// ```
/// use paddock_core::markup::Attributes;
///
/// let attrs = Attributes::new()
///     .number("x1", 80.0, 1)
///     .text("stroke", "#E0E0E0")
///     .number("stroke-width", 2.0, 0);
///
/// let pairs: Vec<_> = attrs.iter().collect();
/// assert_eq!(pairs[0], ("x1", "80.0"));
/// assert_eq!(pairs[2], ("stroke-width", "2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a string-valued attribute.
    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Appends a numeric attribute formatted with `precision` decimals.
    pub fn number(self, key: impl Into<String>, value: f64, precision: usize) -> Self {
        self.text(key, format_number(value, precision))
    }

    /// Appends an integer attribute.
    pub fn integer(self, key: impl Into<String>, value: i64) -> Self {
        self.text(key, value.to_string())
    }

    /// Appends a string-valued attribute only when `value` is present.
    pub fn optional(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(key, value),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts into the map stored on an element, rejecting duplicate keys.
    pub(crate) fn into_map(self, tag: &str) -> Result<IndexMap<String, String>, MarkupError> {
        let mut map = IndexMap::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            match map.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(MarkupError::invalid(
                        tag,
                        InvalidElementReason::DuplicateAttribute(entry.key().clone()),
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(map)
    }
}

/// Formats `value` with exactly `precision` decimals.
///
/// Negative zero is written without its sign so that `-0.04` rounded to one
/// decimal reads `0.0`.
///
/// ```
/// use paddock_core::markup::format_number;
///
/// assert_eq!(format_number(919.96, 1), "920.0");
/// assert_eq!(format_number(-0.04, 1), "0.0");
/// assert_eq!(format_number(12.4, 0), "12");
/// ```
pub fn format_number(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    match formatted.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let attrs = Attributes::new()
            .text("width", "10")
            .text("height", "20")
            .text("fill", "none");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["width", "height", "fill"]);
    }

    #[test]
    fn test_hyphenated_keys_are_accepted() {
        let map = Attributes::new()
            .text("font-family", "Trebuchet MS")
            .integer("font-size", 12)
            .into_map("text")
            .unwrap();

        assert_eq!(map["font-family"], "Trebuchet MS");
        assert_eq!(map["font-size"], "12");
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let err = Attributes::new()
            .text("x", "1")
            .text("x", "2")
            .into_map("rect")
            .unwrap_err();

        assert_eq!(
            err.reason(),
            &InvalidElementReason::DuplicateAttribute("x".to_string())
        );
        assert_eq!(err.to_string(), "invalid element `<rect>`: duplicate attribute `x`");
    }

    #[test]
    fn test_optional_skips_missing_values() {
        let attrs = Attributes::new()
            .optional("style", None)
            .optional("class", Some("active"));

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.iter().next(), Some(("class", "active")));
    }

    #[test]
    fn test_format_number_rounding() {
        assert_eq!(format_number(300.0, 1), "300.0");
        assert_eq!(format_number(0.25, 2), "0.25");
        assert_eq!(format_number(-3.14159, 2), "-3.14");
        assert_eq!(format_number(-0.0, 0), "0");
    }
}
