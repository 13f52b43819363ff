//! Errors raised while building a markup tree.

use std::fmt;

use thiserror::Error;

/// Why an element was rejected by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidElementReason {
    /// The tag name was empty.
    EmptyTag,
    /// The same attribute key was given twice for one element.
    DuplicateAttribute(String),
    /// The handle does not belong to this document.
    UnknownHandle,
}

impl fmt::Display for InvalidElementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "tag name is empty"),
            Self::DuplicateAttribute(key) => write!(f, "duplicate attribute `{key}`"),
            Self::UnknownHandle => write!(f, "element handle does not belong to this document"),
        }
    }
}

/// Error type for markup tree construction.
///
/// Every variant signals builder misuse by an assembler; none of them depend
/// on input data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("invalid element `<{tag}>`: {reason}")]
    InvalidElement {
        tag: String,
        reason: InvalidElementReason,
    },
}

impl MarkupError {
    pub(crate) fn invalid(tag: impl Into<String>, reason: InvalidElementReason) -> Self {
        Self::InvalidElement {
            tag: tag.into(),
            reason,
        }
    }

    /// Returns the rejection reason.
    pub fn reason(&self) -> &InvalidElementReason {
        match self {
            Self::InvalidElement { reason, .. } => reason,
        }
    }
}
