//! Configuration types for Paddock artifact generation.
//!
//! Every value has a default, so an empty file (or no file at all) produces
//! the stock artifacts. All types implement [`serde::Deserialize`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration with one section per artifact.
//! - [`ChartConfig`] - Canvas, colors and fonts of the elevation chart.
//! - [`TrackConfig`] - Line style and placemark settings of the KML overlay.
//! - [`PageConfig`] - Head metadata and navigation chrome of the info page.
//!
//! # Example
//!
//! ```
//! # use paddock::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.chart().tick_count(), 5);
//! assert!(config.chart().frame().is_ok());
//! ```

use serde::Deserialize;

use paddock_core::{
    geometry::DrawingFrame,
    kml::AltitudeMode,
    projection::{DEFAULT_TICK_COUNT, ProjectionError},
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    chart: ChartConfig,

    #[serde(default)]
    track: TrackConfig,

    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    pub fn new(chart: ChartConfig, track: TrackConfig, page: PageConfig) -> Self {
        Self { chart, track, page }
    }

    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    pub fn track(&self) -> &TrackConfig {
        &self.track
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }
}

/// Elevation chart settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    width: u32,
    height: u32,
    margin: u32,
    tick_count: usize,

    background: String,
    accent: String,
    fill: String,
    profile_width: f64,
    axis_color: String,
    axis_width: f64,
    tick_width: f64,
    label_color: String,

    font_family: String,
    title_size: u16,
    subtitle_size: u16,
    label_size: u16,
    axis_title_size: u16,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 80,
            tick_count: DEFAULT_TICK_COUNT,
            background: "#0A1A2F".to_string(),
            accent: "#FF6600".to_string(),
            fill: "rgba(255, 102, 0, 0.15)".to_string(),
            profile_width: 3.0,
            axis_color: "#E0E0E0".to_string(),
            axis_width: 2.0,
            tick_width: 1.0,
            label_color: "#CCCCCC".to_string(),
            font_family: "Trebuchet MS".to_string(),
            title_size: 18,
            subtitle_size: 14,
            label_size: 12,
            axis_title_size: 14,
        }
    }
}

impl ChartConfig {
    /// The validated drawing frame for the configured canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidFrame`] when the margin leaves no
    /// plot area.
    pub fn frame(&self) -> Result<DrawingFrame, ProjectionError> {
        DrawingFrame::new(self.width, self.height, self.margin)
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Canvas background color.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Color of the profile line and the title.
    pub fn accent(&self) -> &str {
        &self.accent
    }

    /// Fill under the profile line.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn profile_width(&self) -> f64 {
        self.profile_width
    }

    pub fn axis_color(&self) -> &str {
        &self.axis_color
    }

    pub fn axis_width(&self) -> f64 {
        self.axis_width
    }

    pub fn tick_width(&self) -> f64 {
        self.tick_width
    }

    pub fn label_color(&self) -> &str {
        &self.label_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn title_size(&self) -> u16 {
        self.title_size
    }

    pub fn subtitle_size(&self) -> u16 {
        self.subtitle_size
    }

    pub fn label_size(&self) -> u16 {
        self.label_size
    }

    pub fn axis_title_size(&self) -> u16 {
        self.axis_title_size
    }
}

/// KML overlay settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    finish_label: String,
    line_color: String,
    line_width: f64,
    extrude: bool,
    tessellate: bool,
    point_altitude_mode: String,
    line_altitude_mode: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            finish_label: "Línea de Meta".to_string(),
            line_color: "#ff0000ff".to_string(),
            line_width: 3.0,
            extrude: true,
            tessellate: true,
            point_altitude_mode: AltitudeMode::ClampToGround.to_string(),
            line_altitude_mode: AltitudeMode::RelativeToGround.to_string(),
        }
    }
}

impl TrackConfig {
    /// Name of the finish-line placemark.
    pub fn finish_label(&self) -> &str {
        &self.finish_label
    }

    /// Line color in KML `aabbggrr` notation.
    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn extrude(&self) -> bool {
        self.extrude
    }

    pub fn tessellate(&self) -> bool {
        self.tessellate
    }

    /// Altitude mode of the finish-line point.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured mode is not a KML altitude mode.
    pub fn point_altitude_mode(&self) -> Result<AltitudeMode, String> {
        self.point_altitude_mode
            .parse()
            .map_err(|err| format!("Invalid point_altitude_mode in config: {err}"))
    }

    /// Altitude mode of the track line.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured mode is not a KML altitude mode.
    pub fn line_altitude_mode(&self) -> Result<AltitudeMode, String> {
        self.line_altitude_mode
            .parse()
            .map_err(|err| format!("Invalid line_altitude_mode in config: {err}"))
    }
}

/// One entry of the page's navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    pub href: String,
    pub text: String,
    pub title: String,
    #[serde(default)]
    pub active: bool,
}

impl NavEntry {
    fn new(href: &str, text: &str, title: &str) -> Self {
        Self {
            href: href.to_string(),
            text: text.to_string(),
            title: title.to_string(),
            active: false,
        }
    }
}

/// Info page settings: everything that is static chrome rather than data.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    lang: String,
    charset: String,
    title: String,
    author: String,
    description: String,
    keywords: String,
    viewport: String,
    icon: String,
    stylesheets: Vec<String>,

    site_name: String,
    home: String,
    home_title: String,
    navigation: Vec<NavEntry>,
    breadcrumb: String,

    /// Prefix joined to media paths taken from the record.
    media_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            charset: "UTF-8".to_string(),
            title: "MotoGP-Circuito".to_string(),
            author: "Alejandro Aldea Viana - UO293873".to_string(),
            description: "Información del circuito del proyecto MotoGP-Desktop".to_string(),
            keywords: "MotoGP, motociclismo, deportes, velocidad, circuito".to_string(),
            viewport: "width=device-width, initial-scale=1.0".to_string(),
            icon: "../multimedia/icono.png".to_string(),
            stylesheets: vec![
                "../estilo/estilo.css".to_string(),
                "../estilo/layout.css".to_string(),
            ],
            site_name: "MotoGP Desktop".to_string(),
            home: "../index.html".to_string(),
            home_title: "Ir a la página principal".to_string(),
            navigation: vec![
                NavEntry::new("../index.html", "Inicio", "Página de inicio"),
                NavEntry::new("../piloto.html", "Piloto", "Información del piloto"),
                NavEntry {
                    active: true,
                    ..NavEntry::new("../circuito.html", "Circuito", "Información del circuito")
                },
                NavEntry::new(
                    "../meteorologia.html",
                    "Meteorología",
                    "Información sobre meteorología",
                ),
                NavEntry::new(
                    "../clasificaciones.html",
                    "Clasificaciones",
                    "Clasificaciones de MotoGP",
                ),
                NavEntry::new("../juegos.html", "Juegos", "Juegos de MotoGP"),
                NavEntry::new("../ayuda.html", "Ayuda", "Ayuda de MotoGP"),
            ],
            breadcrumb: "Circuito".to_string(),
            media_prefix: "../".to_string(),
        }
    }
}

impl PageConfig {
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn viewport(&self) -> &str {
        &self.viewport
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Link target of the site title and the breadcrumb root.
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn home_title(&self) -> &str {
        &self.home_title
    }

    pub fn navigation(&self) -> &[NavEntry] {
        &self.navigation
    }

    /// Label of the current page in the breadcrumb trail.
    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    /// Resolves a media path from the record relative to the page.
    pub fn media_path(&self, path: &str) -> String {
        format!("{}{path}", self.media_prefix)
    }
}
