//! Error adapter for converting PaddockError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! A record that fails to load carries its own text, so the error is shown
//! with a snippet pointing at the position where parsing stopped. Every
//! other error is reported with a stable code and, where one applies, a help
//! line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use paddock::{PaddockError, projection::ProjectionError};
use paddock_source::SourceError;

/// Adapter for a record that could not be loaded.
///
/// Wraps the [`SourceError`] together with the record text and implements
/// [`MietteDiagnostic`] so the failing position is labelled in the output.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped load error
    err: &'a SourceError,
    /// Record text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(err: &'a SourceError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(source_code_name(self.err)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        source_help(self.err)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let SourceError::Xml { offset, .. } = self.err else {
            return None;
        };
        let span = offset_to_miette(*offset, self.src);
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("parsing stopped here".to_string()),
            span,
        ))))
    }
}

/// Adapter for [`PaddockError`] variants without a source position.
///
/// This adapter handles I/O, field, projection and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a PaddockError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PaddockError::Io(_) => "paddock::io",
            PaddockError::Load { err, .. } | PaddockError::Source(err) => source_code_name(err),
            PaddockError::Markup(_) => "paddock::markup",
            PaddockError::Projection(ProjectionError::DegenerateProfile) => {
                "paddock::degenerate_profile"
            }
            PaddockError::Projection(_) => "paddock::projection",
            PaddockError::Config(_) => "paddock::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PaddockError::Load { err, .. } | PaddockError::Source(err) => source_help(err),
            PaddockError::Projection(ProjectionError::DegenerateProfile) => Some(Box::new(
                "the record needs at least one `tramo` with a positive `distancia`",
            )),
            PaddockError::Config(_) => Some(Box::new(
                "check the configuration file, or pass --config with a valid TOML file",
            )),
            PaddockError::Io(_) | PaddockError::Markup(_) | PaddockError::Projection(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a load diagnostic or a plain error, providing a
/// uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A load failure with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn source_code_name(err: &SourceError) -> &'static str {
    match err {
        SourceError::Xml { .. } => "paddock::xml",
        SourceError::MissingField(_) => "paddock::missing_field",
        SourceError::InvalidNumber { .. } => "paddock::invalid_number",
        SourceError::InvalidPath { .. } => "paddock::invalid_path",
        SourceError::Markup(_) => "paddock::markup",
    }
}

fn source_help<'a>(err: &'a SourceError) -> Option<Box<dyn fmt::Display + 'a>> {
    if let SourceError::Xml { .. } = err {
        return Some(Box::new(
            "check that every element is closed and every attribute value is quoted",
        ));
    }
    let field = err.field()?;
    let help = match err {
        SourceError::MissingField(_) => format!("add a `{field}` element to the circuit record"),
        SourceError::InvalidNumber { .. } => {
            format!("write `{field}` as a plain decimal number such as `5543` or `101.738`")
        }
        SourceError::InvalidPath { .. } => {
            format!("field paths look like `a/b` or `a/b/@attr`, got `{field}`")
        }
        SourceError::Xml { .. } | SourceError::Markup(_) => return None,
    };
    Some(Box::new(help))
}

/// Convert a byte offset into a one-character miette [`SourceSpan`].
///
/// Offsets at or past the end point at the end of the text with an empty
/// span.
fn offset_to_miette(offset: usize, src: &str) -> SourceSpan {
    if offset >= src.len() {
        return SourceSpan::new(src.len().into(), 0);
    }
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::new(offset.into(), len)
}

/// Convert a [`PaddockError`] into a list of reportable errors.
///
/// [`PaddockError::Load`] becomes a [`Reportable::Diagnostic`] with the
/// record text attached; every other variant a single [`Reportable::Error`].
pub fn to_reportables(err: &PaddockError) -> Vec<Reportable<'_>> {
    match err {
        PaddockError::Load { err: load_err, src } => {
            vec![Reportable::Diagnostic(DiagnosticAdapter::new(load_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
