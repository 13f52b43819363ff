//! Generic markup tree.
//!
//! A [`Document`] owns every element of one tree in an arena. Callers build
//! the tree top-down through [`ElementId`] handles and read it back through
//! borrowed [`ElementRef`] views. No element ever points back to its parent,
//! so a tree cannot contain cycles.
//!
//! # Example
//!
//! ```
//! use paddock_core::markup::{Attributes, Document, Preamble, serialize_to_string};
//!
//! let mut doc = Document::new("kml", Attributes::new().text("xmlns", "http://www.opengis.net/kml/2.2"))
//!     .unwrap()
//!     .with_preamble(Preamble::xml_utf8());
//! let container = doc.add_child(doc.root(), "Document", Attributes::new()).unwrap();
//! doc.add_text_child(container, "name", Attributes::new(), "Sepang").unwrap();
//!
//! let text = serialize_to_string(&doc);
//! assert!(text.contains("    <name>Sepang</name>"));
//! ```

mod attributes;
mod document;
mod error;
mod serialize;

pub use attributes::{Attributes, format_number};
pub use document::{Descendants, Document, ElementId, ElementRef, Preamble, Syntax};
pub use error::{InvalidElementReason, MarkupError};
pub use serialize::{serialize, serialize_to_string};
