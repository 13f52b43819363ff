//! Loading circuit records and reading their fields.
//!
//! A [`Record`] is parsed from XML text and queried through the [`Fields`]
//! trait with slash-separated [`FieldPath`]s:
//!
//! ```
//! use paddock_source::{Fields, Record};
//!
//! let record = Record::parse(
//!     r#"<circuito xmlns="http://www.uniovi.es">
//!          <nombre>Sepang</nombre>
//!          <tramo><distancia>120</distancia></tramo>
//!          <tramo><distancia>80</distancia></tramo>
//!        </circuito>"#,
//! )?;
//!
//! assert_eq!(record.scalar("nombre")?, "Sepang");
//! let lengths = record
//!     .list("tramo")
//!     .iter()
//!     .map(|tramo| tramo.number("distancia"))
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(lengths, [120.0, 80.0]);
//! # Ok::<(), paddock_source::SourceError>(())
//! ```

mod error;
mod path;
mod record;

pub use error::SourceError;
pub use path::FieldPath;
pub use record::{Anchor, CIRCUIT_NAMESPACE, Entry, Fields, Record, Scope};
