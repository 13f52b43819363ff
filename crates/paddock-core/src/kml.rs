//! KML vocabulary.
//!
//! [`KmlDocument`] builds a `<kml>` root with a single `<Document>` container
//! and adds placemarks to it: point markers and line strings with a line
//! style.

use std::{fmt, str::FromStr};

use crate::markup::{Attributes, Document, ElementId, MarkupError, Preamble};

/// KML 2.2 namespace URI.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// How a viewer interprets coordinate altitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AltitudeMode {
    #[default]
    ClampToGround,
    RelativeToGround,
    Absolute,
}

impl AltitudeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClampToGround => "clampToGround",
            Self::RelativeToGround => "relativeToGround",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for AltitudeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AltitudeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clampToGround" => Ok(Self::ClampToGround),
            "relativeToGround" => Ok(Self::RelativeToGround),
            "absolute" => Ok(Self::Absolute),
            _ => Err(format!(
                "invalid altitude mode `{s}`, valid values: clampToGround, relativeToGround, absolute"
            )),
        }
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }
}

/// Writes `lon,lat` or `lon,lat,alt` using the shortest exact representation.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, ",{altitude}")?;
        }
        Ok(())
    }
}

/// Line color (KML `aabbggrr` hex) and width.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    color: String,
    width: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Options for a line-string placemark.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<'a> {
    pub coordinates: &'a [Coordinate],
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub style: &'a LineStyle,
}

/// Builder for a KML document.
#[derive(Debug, Clone)]
pub struct KmlDocument {
    document: Document,
    container: ElementId,
}

impl KmlDocument {
    pub fn new() -> Result<Self, MarkupError> {
        let mut document = Document::new("kml", Attributes::new().text("xmlns", KML_NAMESPACE))?
            .with_preamble(Preamble::xml_utf8());
        let container = document.add_child(document.root(), "Document", Attributes::new())?;
        Ok(Self {
            document,
            container,
        })
    }

    /// The `<Document>` element placemarks are added to.
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Adds a `<name>` to the container.
    pub fn name(&mut self, name: &str) -> Result<ElementId, MarkupError> {
        self.document
            .add_text_child(self.container, "name", Attributes::new(), name)
    }

    /// Adds a placemark with a single point marker.
    pub fn point_placemark(
        &mut self,
        name: &str,
        description: &str,
        position: Coordinate,
        altitude_mode: AltitudeMode,
    ) -> Result<ElementId, MarkupError> {
        let placemark = self
            .document
            .add_child(self.container, "Placemark", Attributes::new())?;
        self.document
            .add_text_child(placemark, "name", Attributes::new(), name)?;
        self.document
            .add_text_child(placemark, "description", Attributes::new(), description)?;
        let point = self
            .document
            .add_child(placemark, "Point", Attributes::new())?;
        self.document.add_text_child(
            point,
            "coordinates",
            Attributes::new(),
            position.to_string(),
        )?;
        self.document.add_text_child(
            point,
            "altitudeMode",
            Attributes::new(),
            altitude_mode.as_str(),
        )?;
        Ok(placemark)
    }

    /// Adds a placemark with a connected path and its line style.
    ///
    /// Coordinates are written one per line.
    pub fn line_placemark(&mut self, line: &LineString<'_>) -> Result<ElementId, MarkupError> {
        let placemark = self
            .document
            .add_child(self.container, "Placemark", Attributes::new())?;
        let path = self
            .document
            .add_child(placemark, "LineString", Attributes::new())?;
        self.document
            .add_text_child(path, "extrude", Attributes::new(), flag(line.extrude))?;
        self.document
            .add_text_child(path, "tessellate", Attributes::new(), flag(line.tessellate))?;
        let coordinates = line
            .coordinates
            .iter()
            .map(Coordinate::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        self.document
            .add_text_child(path, "coordinates", Attributes::new(), coordinates)?;
        self.document.add_text_child(
            path,
            "altitudeMode",
            Attributes::new(),
            line.altitude_mode.as_str(),
        )?;

        let style = self
            .document
            .add_child(placemark, "Style", Attributes::new())?;
        let line_style = self
            .document
            .add_child(style, "LineStyle", Attributes::new())?;
        self.document.add_text_child(
            line_style,
            "color",
            Attributes::new(),
            line.style.color.as_str(),
        )?;
        self.document.add_text_child(
            line_style,
            "width",
            Attributes::new(),
            line.style.width.to_string(),
        )?;
        Ok(placemark)
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
