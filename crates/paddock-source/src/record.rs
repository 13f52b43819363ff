//! Parsed circuit records and field lookup.

use log::{debug, warn};

use paddock_core::markup::{Attributes, Document, ElementId, ElementRef};

use crate::{error::SourceError, path::FieldPath};

/// Namespace of circuit records.
pub const CIRCUIT_NAMESPACE: &str = "http://www.uniovi.es";

/// A loaded source record.
///
/// The XML tree is copied into a [`Document`] using local element and
/// attribute names. Element text is the trimmed concatenation of its direct
/// text nodes; whitespace-only text is dropped.
#[derive(Debug, Clone)]
pub struct Record {
    document: Document,
    namespace: Option<String>,
}

impl Record {
    /// Parses a record from XML text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Xml`] when the text is not well-formed.
    pub fn parse(source: &str) -> Result<Self, SourceError> {
        let xml = roxmltree::Document::parse(source).map_err(|err| SourceError::Xml {
            message: err.to_string(),
            offset: byte_offset(source, err.pos()),
        })?;

        let root = xml.root_element();
        let namespace = root.tag_name().namespace().map(str::to_string);
        if namespace.as_deref() != Some(CIRCUIT_NAMESPACE) {
            warn!(
                namespace:? = namespace,
                expected = CIRCUIT_NAMESPACE;
                "Record root is not in the circuit namespace"
            );
        }

        let mut document = Document::new(root.tag_name().name(), attributes_of(root))?;
        if let Some(text) = text_of(root) {
            document.set_text(document.root(), text)?;
        }
        let parent = document.root();
        copy_children(&mut document, parent, root)?;

        debug!(root = root.tag_name().name(), elements = document.len(); "Record parsed");
        Ok(Self {
            document,
            namespace,
        })
    }

    /// Namespace URI of the root element.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Fields for Record {
    fn anchor(&self) -> Anchor<'_> {
        Anchor {
            element: self.document.root_element(),
            scope: Scope::Descendants,
        }
    }
}

/// One repeated element of a record, such as a single track segment.
///
/// Lookups through an entry are anchored at its element: the first path step
/// matches direct children only.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    element: ElementRef<'a>,
}

impl<'a> Entry<'a> {
    pub fn tag(&self) -> &'a str {
        self.element.tag()
    }

    pub fn text(&self) -> Option<&'a str> {
        self.element.text()
    }

    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

impl Fields for Entry<'_> {
    fn anchor(&self) -> Anchor<'_> {
        Anchor {
            element: self.element,
            scope: Scope::Children,
        }
    }
}

/// Where the first step of a path is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Any element below the anchor (`.//name`).
    Descendants,
    /// Direct children of the anchor.
    Children,
}

/// Starting point of a field lookup.
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a> {
    pub element: ElementRef<'a>,
    pub scope: Scope,
}

impl<'a> Anchor<'a> {
    /// Every element matching the element steps of `path`, in document order.
    ///
    /// A path with no element steps selects the anchor itself.
    pub fn select(&self, path: &FieldPath) -> Vec<ElementRef<'a>> {
        let Some((first, rest)) = path.segments().split_first() else {
            return vec![self.element];
        };

        let mut matches: Vec<ElementRef<'a>> = match self.scope {
            Scope::Descendants => self
                .element
                .descendants()
                .filter(|e| e.tag() == first)
                .collect(),
            Scope::Children => self
                .element
                .children()
                .filter(|e| e.tag() == first)
                .collect(),
        };
        for segment in rest {
            matches = matches
                .iter()
                .flat_map(|e| e.children().filter(|c| c.tag() == segment))
                .collect();
        }
        matches
    }

    /// Path as reported in errors; entry lookups are prefixed with the
    /// entry's tag.
    fn label(&self, path: &str) -> String {
        match self.scope {
            Scope::Descendants => path.to_string(),
            Scope::Children => format!("{}/{path}", self.element.tag()),
        }
    }
}

/// Read access to the fields of a record or entry.
pub trait Fields {
    /// Element lookups start from.
    fn anchor(&self) -> Anchor<'_>;

    /// Text (or attribute value) of the first match, `None` when absent or
    /// empty. Malformed paths are logged and treated as absent.
    fn lookup(&self, path: &str) -> Option<&str> {
        let path = parse_or_warn(path)?;
        let anchor = self.anchor();
        let value = anchor.select(&path).into_iter().find_map(|e| match path.attribute() {
            Some(attribute) => e.attribute(attribute),
            None => e.text(),
        })?;
        (!value.is_empty()).then_some(value)
    }

    /// Like [`Fields::lookup`] but a missing value is an error.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidPath`] for a malformed path and
    /// [`SourceError::MissingField`] when nothing matches.
    fn scalar(&self, path: &str) -> Result<&str, SourceError> {
        path.parse::<FieldPath>()?;
        self.lookup(path)
            .ok_or_else(|| SourceError::MissingField(self.anchor().label(path)))
    }

    /// Required numeric field.
    ///
    /// # Errors
    ///
    /// Everything [`Fields::scalar`] returns, plus
    /// [`SourceError::InvalidNumber`] when the value is not a finite number.
    fn number(&self, path: &str) -> Result<f64, SourceError> {
        let value = self.scalar(path)?;
        value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| SourceError::InvalidNumber {
                path: self.anchor().label(path),
                value: value.to_string(),
            })
    }

    /// Every element matching `path`, as entries. Empty when nothing matches.
    fn list(&self, path: &str) -> Vec<Entry<'_>> {
        let Some(path) = parse_or_warn(path) else {
            return Vec::new();
        };
        self.anchor()
            .select(&path)
            .into_iter()
            .map(|element| Entry { element })
            .collect()
    }

    /// Non-empty texts of every element matching `path`.
    fn texts(&self, path: &str) -> Vec<&str> {
        let Some(path) = parse_or_warn(path) else {
            return Vec::new();
        };
        self.anchor()
            .select(&path)
            .into_iter()
            .filter_map(|e| match path.attribute() {
                Some(attribute) => e.attribute(attribute),
                None => e.text(),
            })
            .filter(|text| !text.is_empty())
            .collect()
    }
}

fn parse_or_warn(path: &str) -> Option<FieldPath> {
    match path.parse() {
        Ok(path) => Some(path),
        Err(err) => {
            warn!(err:%; "Ignoring field lookup");
            None
        }
    }
}

fn copy_children(
    document: &mut Document,
    parent: ElementId,
    node: roxmltree::Node<'_, '_>,
) -> Result<(), SourceError> {
    for child in node.children().filter(roxmltree::Node::is_element) {
        let id = match text_of(child) {
            Some(text) => {
                document.add_text_child(parent, child.tag_name().name(), attributes_of(child), text)?
            }
            None => document.add_child(parent, child.tag_name().name(), attributes_of(child))?,
        };
        copy_children(document, id, child)?;
    }
    Ok(())
}

fn attributes_of(node: roxmltree::Node<'_, '_>) -> Attributes {
    node.attributes()
        .fold(Attributes::new(), |attrs, a| attrs.text(a.name(), a.value()))
}

fn text_of(node: roxmltree::Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .filter(roxmltree::Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Converts a 1-based row/column position into a byte offset.
fn byte_offset(source: &str, pos: roxmltree::TextPos) -> usize {
    let row = pos.row as usize;
    let col = (pos.col as usize).saturating_sub(1);
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index + 1 == row {
            return offset + line.char_indices().nth(col).map_or(line.len(), |(b, _)| b);
        }
        offset += line.len();
    }
    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<circuito xmlns="http://www.uniovi.es">
  <nombre>Sepang</nombre>
  <longitud unidades="m">5543</longitud>
  <vacio>   </vacio>
  <coordenadasOrigen>
    <altitudGeo>60</altitudGeo>
  </coordenadasOrigen>
  <tramo>
    <distancia>120</distancia>
    <coordenadas><altitudGeo>62</altitudGeo></coordenadas>
  </tramo>
  <tramo>
    <distancia>abc</distancia>
  </tramo>
  <clasificacionMundial>
    <pilotoClasificado posicion="1"><nombrePilotoClasificado>A</nombrePilotoClasificado></pilotoClasificado>
    <pilotoClasificado posicion="2"><nombrePilotoClasificado>B</nombrePilotoClasificado></pilotoClasificado>
  </clasificacionMundial>
</circuito>
"#;

    fn sample() -> Record {
        Record::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_records_namespace() {
        let record = sample();

        assert_eq!(record.namespace(), Some(CIRCUIT_NAMESPACE));
        assert_eq!(record.document().root_element().tag(), "circuito");
    }

    #[test]
    fn test_lookup_descendant_and_attribute() {
        let record = sample();

        assert_eq!(record.lookup("nombre"), Some("Sepang"));
        assert_eq!(record.lookup("altitudGeo"), Some("60"));
        assert_eq!(record.lookup("longitud/@unidades"), Some("m"));
        assert_eq!(record.lookup("vacio"), None);
        assert_eq!(record.lookup("pais"), None);
    }

    #[test]
    fn test_scalar_reports_missing_field() {
        let err = sample().scalar("pais").unwrap_err();

        assert_eq!(err, SourceError::MissingField("pais".to_string()));
        assert_eq!(err.to_string(), "required field `pais` is missing");
    }

    #[test]
    fn test_number_parses_and_rejects() {
        let record = sample();
        assert_eq!(record.number("longitud").unwrap(), 5543.0);

        let tramos = record.list("tramo");
        assert_eq!(tramos.len(), 2);
        assert_eq!(tramos[0].number("coordenadas/altitudGeo").unwrap(), 62.0);
        assert_eq!(
            tramos[1].number("distancia").unwrap_err(),
            SourceError::InvalidNumber {
                path: "tramo/distancia".to_string(),
                value: "abc".to_string(),
            }
        );
        assert_eq!(
            tramos[1].number("coordenadas/altitudGeo").unwrap_err(),
            SourceError::MissingField("tramo/coordenadas/altitudGeo".to_string())
        );
    }

    #[test]
    fn test_entry_lookups_are_child_anchored() {
        let record = sample();
        let tramo = record.list("tramo")[0];

        // `altitudGeo` is a grandchild, not a child, of the segment.
        assert_eq!(tramo.lookup("altitudGeo"), None);
        assert_eq!(tramo.lookup("distancia"), Some("120"));
    }

    #[test]
    fn test_list_and_texts() {
        let record = sample();

        let pilots = record.list("clasificacionMundial/pilotoClasificado");
        let positions: Vec<_> = pilots.iter().filter_map(|p| p.lookup("@posicion")).collect();
        assert_eq!(positions, ["1", "2"]);
        assert_eq!(
            record.texts("pilotoClasificado/nombrePilotoClasificado"),
            ["A", "B"]
        );

        assert!(record.list("videos/video").is_empty());
        assert!(record.texts("referencias/referencia").is_empty());
        assert!(record.list("a//b").is_empty());
    }

    #[test]
    fn test_scalar_rejects_invalid_path() {
        assert!(matches!(
            sample().scalar("a//b"),
            Err(SourceError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_malformed_xml_offset() {
        let source = "<circuito>\n  <nombre>Sepang</nombr>\n</circuito>";
        let err = Record::parse(source).unwrap_err();

        let SourceError::Xml { offset, .. } = err else {
            panic!("expected an XML error, got {err:?}");
        };
        assert!(offset > source.find('\n').unwrap());
        assert!(offset <= source.len());
    }

    #[test]
    fn test_byte_offset_counts_multibyte_chars() {
        let source = "ñ\nab";

        assert_eq!(byte_offset(source, roxmltree::TextPos::new(1, 2)), 2);
        assert_eq!(byte_offset(source, roxmltree::TextPos::new(2, 2)), 4);
        assert_eq!(byte_offset(source, roxmltree::TextPos::new(9, 1)), source.len());
    }
}
