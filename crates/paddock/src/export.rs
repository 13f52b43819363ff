//! Artifact assembly.
//!
//! Each assembler turns one extracted model into a complete markup
//! [`Document`]. It is the last stage before serialization:
//!
//! ```text
//! Record text
//!     ↓ parse
//! Record
//!     ↓ extract
//! ProfileModel / InfoModel / TrackModel
//!     ↓ assemble (this module)
//! Document
//!     ↓ serialize
//! Artifact bytes
//! ```
//!
//! # Available Assemblers
//!
//! - [`chart::ProfileChart`] - SVG elevation profile
//! - [`info::InfoPage`] - HTML circuit information page
//! - [`track::TrackOverlay`] - KML track overlay

pub mod caption;
pub mod chart;
pub mod info;
pub mod track;

use std::{fmt, str::FromStr};

use paddock_core::markup::Document;

use crate::PaddockError;

/// Builds one artifact document from its model.
pub trait Assembler {
    /// Extracted fields the assembler reads.
    type Model;

    /// Builds the complete document.
    ///
    /// # Errors
    ///
    /// Returns [`PaddockError`] when the model cannot be rendered, for
    /// example a profile with no horizontal extent.
    fn assemble(&self, model: &Self::Model) -> Result<Document, PaddockError>;
}

/// The artifacts Paddock produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// SVG elevation chart.
    Chart,
    /// HTML information page.
    Info,
    /// KML track overlay.
    Track,
}

impl ArtifactKind {
    /// Every kind, in generation order.
    pub const ALL: [ArtifactKind; 3] = [Self::Chart, Self::Info, Self::Track];

    /// File name the artifact is written to when none is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Chart => "altimetria.svg",
            Self::Info => "InfoCircuito.html",
            Self::Track => "circuito.kml",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Info => "info",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chart" | "svg" => Ok(Self::Chart),
            "info" | "html" => Ok(Self::Info),
            "track" | "kml" => Ok(Self::Track),
            _ => Err(format!(
                "invalid artifact kind `{s}`, valid values: chart, info, track"
            )),
        }
    }
}
