//! Field paths.
//!
//! A path is a `/`-separated list of element names with an optional final
//! attribute step: `coordenadasOrigen/altitudGeo`, `longitud/@unidades` or
//! just `@posicion`. Namespace prefixes are not part of the syntax; names are
//! matched against local element names.

use std::{fmt, str::FromStr};

use crate::error::SourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
    attribute: Option<String>,
}

impl FieldPath {
    /// Element name steps, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Trailing `@name` step.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

impl FromStr for FieldPath {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| SourceError::InvalidPath {
            path: s.to_string(),
            reason,
        };

        if s.trim().is_empty() {
            return Err(invalid("path is empty"));
        }

        let mut segments = Vec::new();
        let mut attribute = None;
        let mut steps = s.split('/').peekable();
        while let Some(step) = steps.next() {
            if let Some(name) = step.strip_prefix('@') {
                if steps.peek().is_some() {
                    return Err(invalid("attribute step must come last"));
                }
                if !is_name(name) {
                    return Err(invalid("attribute name is empty or malformed"));
                }
                attribute = Some(name.to_string());
            } else if is_name(step) {
                segments.push(step.to_string());
            } else {
                return Err(invalid("element step is empty or malformed"));
            }
        }

        Ok(Self {
            segments,
            attribute,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))?;
        if let Some(attribute) = &self.attribute {
            if !self.segments.is_empty() {
                f.write_str("/")?;
            }
            write!(f, "@{attribute}")?;
        }
        Ok(())
    }
}

fn is_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '@' | '[' | ']' | '*' | ':'))
}
