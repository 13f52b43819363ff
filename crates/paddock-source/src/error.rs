//! Errors raised while loading a record or reading its fields.

use thiserror::Error;

use paddock_core::markup::MarkupError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The record is not well-formed XML.
    ///
    /// `offset` is the byte offset into the source text where the parser
    /// stopped.
    #[error("malformed record: {message}")]
    Xml { message: String, offset: usize },

    #[error("required field `{0}` is missing")]
    MissingField(String),

    #[error("field `{path}` is not a number: `{value}`")]
    InvalidNumber { path: String, value: String },

    #[error("invalid field path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl SourceError {
    /// The field path this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(path) | Self::InvalidNumber { path, .. } => Some(path),
            Self::InvalidPath { path, .. } => Some(path),
            Self::Xml { .. } | Self::Markup(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_of_each_variant() {
        assert_eq!(
            SourceError::MissingField("pais".to_string()).field(),
            Some("pais")
        );
        assert_eq!(
            SourceError::InvalidNumber {
                path: "longitud".to_string(),
                value: "x".to_string(),
            }
            .field(),
            Some("longitud")
        );
        assert_eq!(
            SourceError::Xml {
                message: "eof".to_string(),
                offset: 3,
            }
            .field(),
            None
        );
    }
}
