//! Error types for Paddock operations.
//!
//! [`PaddockError`] wraps the errors of every stage: loading the record,
//! reading its fields, building markup, projecting the profile and writing
//! the artifact.

use std::io;

use thiserror::Error;

use paddock_core::{markup::MarkupError, projection::ProjectionError};
use paddock_source::SourceError;

/// The main error type for Paddock operations.
///
/// # Diagnostic Variants
///
/// The `Load` variant keeps the record text next to the error so that
/// positions inside it can be shown to the user.
#[derive(Debug, Error)]
pub enum PaddockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Load { err: SourceError, src: String },

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaddockError {
    /// Create a new `Load` error with the associated record text.
    pub fn new_load_error(err: SourceError, src: impl Into<String>) -> Self {
        Self::Load {
            err,
            src: src.into(),
        }
    }
}
