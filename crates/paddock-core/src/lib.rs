//! Paddock Core Types and Definitions
//!
//! This crate provides the building blocks shared by every Paddock artifact:
//!
//! - **Markup**: An arena-backed element tree with ordered attributes and a
//!   deterministic, pretty-printing serializer ([`markup`] module)
//! - **Vocabularies**: Typed builders for SVG ([`svg`]), HTML ([`html`]) and
//!   KML ([`kml`]) documents on top of the generic tree
//! - **Geometry**: Pixel-space primitives ([`geometry`] module)
//! - **Projection**: Distance/altitude profiles mapped onto a drawing frame
//!   ([`projection`] module)

pub mod geometry;
pub mod html;
pub mod kml;
pub mod markup;
pub mod projection;
pub mod svg;
