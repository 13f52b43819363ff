//! Pretty-printing serializer.
//!
//! Output is a pure function of the tree: a preamble line, then one element
//! per line indented by [`INDENT`] per depth level, attributes in insertion
//! order, and a single trailing newline.
//!
//! An element with both text and children writes its first child directly
//! after the text, so re-parsing yields the text unchanged.

use super::document::{Document, ElementRef, Preamble, Syntax};

/// Indentation unit per depth level.
pub const INDENT: &str = "  ";

/// HTML elements that never have content and are written self-closing.
const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes a document to UTF-8 bytes.
pub fn serialize(document: &Document) -> Vec<u8> {
    serialize_to_string(document).into_bytes()
}

/// Serializes a document to a `String`.
pub fn serialize_to_string(document: &Document) -> String {
    let mut out = String::new();

    match document.preamble() {
        Preamble::None => {}
        Preamble::XmlDeclaration { encoding } => {
            out.push_str("<?xml version='1.0' encoding='");
            out.push_str(encoding);
            out.push_str("'?>\n");
        }
        Preamble::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push_str(">\n");
        }
    }

    write_element(&mut out, document.root_element(), 0, document.syntax());
    out.push('\n');
    out
}

/// Writes one element starting at the current position. Indentation of the
/// start tag is the caller's job.
fn write_element(out: &mut String, element: ElementRef<'_>, depth: usize, syntax: Syntax) {
    let tag = element.tag();
    out.push('<');
    out.push_str(tag);
    for (key, value) in element.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(out, value, true);
        out.push('"');
    }

    let text = element.text().filter(|text| !text.is_empty());
    if !element.has_children() {
        match (text, syntax) {
            (Some(text), _) => {
                out.push('>');
                escape_into(out, text, false);
                push_end_tag(out, tag);
            }
            (None, Syntax::Html) if !HTML_VOID_ELEMENTS.contains(&tag) => {
                out.push('>');
                push_end_tag(out, tag);
            }
            (None, _) => out.push_str(" />"),
        }
        return;
    }

    out.push('>');
    if let Some(text) = text {
        escape_into(out, text, false);
    }
    for (index, child) in element.children().enumerate() {
        // Whitespace here would become part of the parent's text.
        if index > 0 || text.is_none() {
            out.push('\n');
            push_indent(out, depth + 1);
        }
        write_element(out, child, depth + 1, syntax);
    }
    out.push('\n');
    push_indent(out, depth);
    push_end_tag(out, tag);
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_end_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escapes markup-significant characters.
///
/// Attribute values also escape double quotes and whitespace control
/// characters so they survive attribute-value normalization on re-parse.
fn escape_into(out: &mut String, value: &str, attribute: bool) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Attributes;

    #[test]
    fn test_xml_declaration_and_self_closing() {
        let mut doc = Document::new("svg", Attributes::new().integer("width", 10))
            .unwrap()
            .with_preamble(Preamble::xml_utf8());
        doc.add_child(doc.root(), "rect", Attributes::new().text("fill", "none"))
            .unwrap();

        let expected = "\
<?xml version='1.0' encoding='utf-8'?>
<svg width=\"10\">
  <rect fill=\"none\" />
</svg>
";
        assert_eq!(serialize_to_string(&doc), expected);
    }

    #[test]
    fn test_nested_indentation() {
        let mut doc = Document::new("kml", Attributes::new()).unwrap();
        let container = doc.add_child(doc.root(), "Document", Attributes::new()).unwrap();
        let placemark = doc.add_child(container, "Placemark", Attributes::new()).unwrap();
        doc.add_text_child(placemark, "name", Attributes::new(), "Meta")
            .unwrap();

        let expected = "\
<kml>
  <Document>
    <Placemark>
      <name>Meta</name>
    </Placemark>
  </Document>
</kml>
";
        assert_eq!(serialize_to_string(&doc), expected);
    }

    #[test]
    fn test_html_void_and_empty_elements() {
        let mut doc = Document::new("html", Attributes::new().text("lang", "es"))
            .unwrap()
            .with_syntax(Syntax::Html)
            .with_preamble(Preamble::html5());
        let head = doc.add_child(doc.root(), "head", Attributes::new()).unwrap();
        doc.add_child(head, "meta", Attributes::new().text("charset", "UTF-8"))
            .unwrap();
        doc.add_child(doc.root(), "main", Attributes::new()).unwrap();

        let expected = "\
<!DOCTYPE html>
<html lang=\"es\">
  <head>
    <meta charset=\"UTF-8\" />
  </head>
  <main></main>
</html>
";
        assert_eq!(serialize_to_string(&doc), expected);
    }

    #[test]
    fn test_escaping_text_and_attributes() {
        let mut doc = Document::new("p", Attributes::new().text("title", "say \"hi\" & <go>"))
            .unwrap();
        doc.set_text(doc.root(), "a < b && c > d").unwrap();

        assert_eq!(
            serialize_to_string(&doc),
            "<p title=\"say &quot;hi&quot; &amp; &lt;go&gt;\">a &lt; b &amp;&amp; c &gt; d</p>\n"
        );
    }

    #[test]
    fn test_text_with_children_is_written_inline() {
        let mut doc = Document::new("p", Attributes::new()).unwrap();
        doc.set_text(doc.root(), "Estás en: ").unwrap();
        doc.add_text_child(doc.root(), "a", Attributes::new().text("href", "../index.html"), "Inicio")
            .unwrap();
        doc.add_text_child(doc.root(), "span", Attributes::new(), "> Circuito")
            .unwrap();

        assert_eq!(
            serialize_to_string(&doc),
            "<p>Estás en: <a href=\"../index.html\">Inicio</a>\n  <span>&gt; Circuito</span>\n</p>\n"
        );
    }

    #[test]
    fn test_text_before_children_reparses_unchanged() {
        let mut doc = Document::new("p", Attributes::new()).unwrap();
        doc.set_text(doc.root(), "Estás en:").unwrap();
        doc.add_text_child(doc.root(), "a", Attributes::new(), "Inicio")
            .unwrap();
        let text = serialize_to_string(&doc);

        let parsed = roxmltree::Document::parse(&text).unwrap();
        let leading = parsed.root_element().first_child().and_then(|n| n.text());
        assert_eq!(leading, Some("Estás en:"));
    }

    #[test]
    fn test_leaf_text_is_not_padded() {
        let mut doc = Document::new("coordinates", Attributes::new()).unwrap();
        doc.set_text(doc.root(), "1,2\n3,4").unwrap();

        assert_eq!(serialize_to_string(&doc), "<coordinates>1,2\n3,4</coordinates>\n");
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let mut doc = Document::new("svg", Attributes::new()).unwrap();
        for i in 0..20 {
            doc.add_child(
                doc.root(),
                "circle",
                Attributes::new()
                    .number("cx", f64::from(i) * 1.5, 1)
                    .number("cy", 3.0, 1)
                    .integer("r", 2),
            )
            .unwrap();
        }

        assert_eq!(serialize(&doc), serialize(&doc));
    }
}
