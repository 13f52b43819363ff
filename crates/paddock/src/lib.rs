//! Paddock - converts a race-circuit record into presentation artifacts.
//!
//! A single XML record describing a circuit is turned into three documents:
//! an SVG elevation chart, an HTML information page and a KML track overlay.
//! Every artifact is assembled as an in-memory markup tree first and
//! serialized only once it is complete.

pub mod config;
pub mod export;
pub mod model;

mod error;
mod output;

pub use paddock_core::{geometry, html, kml, markup, projection, svg};
pub use paddock_source::{Record, SourceError};

pub use error::PaddockError;
pub use export::ArtifactKind;
pub use output::write_artifact;

use log::{debug, info, trace};

use paddock_core::markup::{Document, serialize};

use config::AppConfig;
use export::{Assembler, chart::ProfileChart, info::InfoPage, track::TrackOverlay};
use model::{InfoModel, ProfileModel, TrackModel};

/// Facade for loading circuit records and rendering artifacts.
///
/// # Examples
///
/// ```rust,no_run
/// use paddock::{ArtifactKind, Converter, config::AppConfig};
///
/// let source = std::fs::read_to_string("circuitoEsquema.xml")
///     .expect("Failed to read record");
///
/// let converter = Converter::new(AppConfig::default());
/// let record = converter.load(&source)
///     .expect("Failed to load record");
///
/// for kind in ArtifactKind::ALL {
///     let bytes = converter.render(kind, &record)
///         .expect("Failed to render");
///     paddock::write_artifact(kind.default_file_name(), &bytes)
///         .expect("Failed to write");
/// }
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a circuit record.
    ///
    /// # Errors
    ///
    /// Returns [`PaddockError::Load`] when the text is not well-formed XML.
    /// The error keeps a copy of `source` for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paddock::Converter;
    ///
    /// let converter = Converter::default();
    /// let record = converter
    ///     .load(r#"<circuito xmlns="http://www.uniovi.es"><nombre>Sepang</nombre></circuito>"#)
    ///     .expect("Failed to load");
    /// assert_eq!(record.namespace(), Some("http://www.uniovi.es"));
    /// ```
    pub fn load(&self, source: &str) -> Result<Record, PaddockError> {
        info!(bytes = source.len(); "Loading circuit record");
        let record =
            Record::parse(source).map_err(|err| PaddockError::new_load_error(err, source))?;
        debug!(elements = record.document().len(); "Record loaded");
        Ok(record)
    }

    /// Build the markup tree of one artifact.
    ///
    /// # Errors
    ///
    /// Returns [`PaddockError::Source`] when a required field is missing or
    /// malformed, and other variants when the artifact cannot be rendered.
    pub fn assemble(&self, kind: ArtifactKind, record: &Record) -> Result<Document, PaddockError> {
        info!(kind:%; "Assembling artifact");
        match kind {
            ArtifactKind::Chart => {
                ProfileChart::new(self.config.chart()).assemble(&ProfileModel::extract(record)?)
            }
            ArtifactKind::Info => {
                InfoPage::new(self.config.page()).assemble(&InfoModel::extract(record)?)
            }
            ArtifactKind::Track => {
                TrackOverlay::new(self.config.track()).assemble(&TrackModel::extract(record)?)
            }
        }
    }

    /// Render one artifact to its serialized bytes.
    ///
    /// Nothing is written to disk; pair with [`write_artifact`].
    ///
    /// # Errors
    ///
    /// See [`Converter::assemble`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paddock::{ArtifactKind, Converter};
    ///
    /// let converter = Converter::default();
    /// let record = converter.load("<circuito/>").expect("Failed to load");
    /// let svg = converter.render(ArtifactKind::Chart, &record)
    ///     .expect("Failed to render");
    /// println!("{}", String::from_utf8_lossy(&svg));
    /// ```
    pub fn render(&self, kind: ArtifactKind, record: &Record) -> Result<Vec<u8>, PaddockError> {
        let document = self.assemble(kind, record)?;
        trace!(kind:%, tree = document.describe(); "Assembled document");

        let bytes = serialize(&document);
        info!(kind:%, bytes = bytes.len(); "Artifact rendered");
        Ok(bytes)
    }
}
