//! SVG vocabulary.
//!
//! [`SvgCanvas`] wraps a markup [`Document`] rooted at `<svg>` and offers one
//! method per shape. Every method returns the new element's handle; shapes
//! can be nested inside [`SvgCanvas::group`] containers.
//!
//! Coordinates are written with [`COORDINATE_PRECISION`] decimals.
//!
//! # Example
//!
//! ```
//! use paddock_core::{
//!     geometry::Point,
//!     markup::serialize_to_string,
//!     svg::{Font, Stroke, SvgCanvas},
//! };
//!
//! let mut canvas = SvgCanvas::new(200, 100).unwrap();
//! let root = canvas.root();
//! canvas
//!     .line(root, Point::new(0.0, 0.0), Point::new(200.0, 100.0), &Stroke::new("#E0E0E0", 2.0))
//!     .unwrap();
//! canvas
//!     .text(root, "Hola", Point::new(100.0, 50.0), &Font::new("Trebuchet MS", 12), None)
//!     .unwrap();
//!
//! let text = serialize_to_string(&canvas.into_document());
//! assert!(text.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<svg "));
//! assert!(text.contains("stroke-width=\"2\""));
//! ```

use crate::{
    geometry::Point,
    markup::{Attributes, Document, ElementId, MarkupError, Preamble, format_number},
};

/// SVG namespace URI.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Decimals used for every coordinate attribute.
pub const COORDINATE_PRECISION: usize = 1;

/// Stroke color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: String,
    width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// A stroke that draws nothing.
    pub fn none() -> Self {
        Self::new("none", 0.0)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Stroke widths are written without trailing zeros when integral.
    fn width_value(&self) -> String {
        if self.width.fract() == 0.0 {
            format_number(self.width, 0)
        } else {
            self.width.to_string()
        }
    }
}

/// Font family and size for text labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    family: String,
    size: u16,
}

impl Font {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> u16 {
        self.size
    }
}

/// Builder for an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    document: Document,
}

impl SvgCanvas {
    /// Creates an `<svg>` root with namespace, version, size and matching
    /// `viewBox`, preceded by a UTF-8 XML declaration.
    pub fn new(width: u32, height: u32) -> Result<Self, MarkupError> {
        let attributes = Attributes::new()
            .text("xmlns", SVG_NAMESPACE)
            .text("version", "2.0")
            .integer("width", i64::from(width))
            .integer("height", i64::from(height))
            .text("viewBox", format!("0 0 {width} {height}"));
        let document = Document::new("svg", attributes)?.with_preamble(Preamble::xml_utf8());
        Ok(Self { document })
    }

    pub fn root(&self) -> ElementId {
        self.document.root()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Adds a `<g>` container carrying shared presentation attributes.
    pub fn group(
        &mut self,
        parent: ElementId,
        attributes: Attributes,
    ) -> Result<ElementId, MarkupError> {
        self.document.add_child(parent, "g", attributes)
    }

    pub fn rect(
        &mut self,
        parent: ElementId,
        origin: Point,
        width: f64,
        height: f64,
        fill: &str,
        stroke: &Stroke,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .number("x", origin.x(), COORDINATE_PRECISION)
            .number("y", origin.y(), COORDINATE_PRECISION)
            .number("width", width, COORDINATE_PRECISION)
            .number("height", height, COORDINATE_PRECISION)
            .text("fill", fill)
            .text("stroke-width", stroke.width_value())
            .text("stroke", stroke.color());
        self.document.add_child(parent, "rect", attributes)
    }

    /// Point marker.
    pub fn circle(
        &mut self,
        parent: ElementId,
        center: Point,
        radius: f64,
        fill: &str,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .number("cx", center.x(), COORDINATE_PRECISION)
            .number("cy", center.y(), COORDINATE_PRECISION)
            .number("r", radius, COORDINATE_PRECISION)
            .text("fill", fill);
        self.document.add_child(parent, "circle", attributes)
    }

    pub fn line(
        &mut self,
        parent: ElementId,
        from: Point,
        to: Point,
        stroke: &Stroke,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .number("x1", from.x(), COORDINATE_PRECISION)
            .number("y1", from.y(), COORDINATE_PRECISION)
            .number("x2", to.x(), COORDINATE_PRECISION)
            .number("y2", to.y(), COORDINATE_PRECISION)
            .text("stroke", stroke.color())
            .text("stroke-width", stroke.width_value());
        self.document.add_child(parent, "line", attributes)
    }

    /// Connected path through `points`, written as `x,y x,y ...`.
    pub fn polyline(
        &mut self,
        parent: ElementId,
        points: &[Point],
        stroke: &Stroke,
        fill: &str,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .text("points", points_value(points))
            .text("stroke", stroke.color())
            .text("stroke-width", stroke.width_value())
            .text("fill", fill);
        self.document.add_child(parent, "polyline", attributes)
    }

    /// Text label anchored at `at`, with an optional inline CSS style.
    pub fn text(
        &mut self,
        parent: ElementId,
        content: &str,
        at: Point,
        font: &Font,
        style: Option<&str>,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .number("x", at.x(), COORDINATE_PRECISION)
            .number("y", at.y(), COORDINATE_PRECISION)
            .text("font-family", font.family())
            .integer("font-size", i64::from(font.size()))
            .optional("style", style);
        self.document
            .add_text_child(parent, "text", attributes, content)
    }
}

fn points_value(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| {
            format!(
                "{},{}",
                format_number(p.x(), COORDINATE_PRECISION),
                format_number(p.y(), COORDINATE_PRECISION)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
