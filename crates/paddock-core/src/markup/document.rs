//! Arena-backed element tree.

use indexmap::IndexMap;
use log::trace;

use super::{
    attributes::Attributes,
    error::{InvalidElementReason, MarkupError},
};

/// Opaque handle to an element inside one [`Document`].
///
/// Handles are only produced by the document that owns the element. Passing a
/// handle to a different document is rejected with
/// [`InvalidElementReason::UnknownHandle`] when it does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Empty-element rules used by the serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Every empty element is self-closing: `<rect />`.
    #[default]
    Xml,
    /// Only HTML void elements self-close; others get an explicit end tag.
    Html,
}

/// Leading line written before the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preamble {
    #[default]
    None,
    /// `<?xml version='1.0' encoding='...'?>`
    XmlDeclaration { encoding: String },
    /// `<!DOCTYPE ...>`
    Doctype(String),
}

impl Preamble {
    /// XML declaration with UTF-8 encoding.
    pub fn xml_utf8() -> Self {
        Self::XmlDeclaration {
            encoding: "utf-8".to_string(),
        }
    }

    /// HTML5 doctype.
    pub fn html5() -> Self {
        Self::Doctype("html".to_string())
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<ElementId>,
}

/// A markup tree with exactly one root element.
///
/// The document owns every element; children are exclusively owned by their
/// parent and traversal is strictly top-down.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    syntax: Syntax,
    preamble: Preamble,
}

impl Document {
    /// Creates a document whose root element has the given tag and attributes.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidElement`] for an empty tag or duplicate
    /// attribute keys.
    pub fn new(tag: impl Into<String>, attributes: Attributes) -> Result<Self, MarkupError> {
        let root = Self::make_node(tag.into(), attributes, None)?;
        Ok(Self {
            nodes: vec![root],
            syntax: Syntax::default(),
            preamble: Preamble::default(),
        })
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_preamble(mut self, preamble: Preamble) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    /// Handle of the root element.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a document has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a child element without text and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidElement`] for an empty tag, duplicate
    /// attribute keys, or a `parent` handle that does not resolve.
    pub fn add_child(
        &mut self,
        parent: ElementId,
        tag: impl Into<String>,
        attributes: Attributes,
    ) -> Result<ElementId, MarkupError> {
        self.push_child(parent, tag.into(), attributes, None)
    }

    /// Appends a child element carrying text content and returns its handle.
    ///
    /// # Errors
    ///
    /// Same as [`Document::add_child`].
    pub fn add_text_child(
        &mut self,
        parent: ElementId,
        tag: impl Into<String>,
        attributes: Attributes,
        text: impl Into<String>,
    ) -> Result<ElementId, MarkupError> {
        self.push_child(parent, tag.into(), attributes, Some(text.into()))
    }

    /// Replaces the text content of an element.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), MarkupError> {
        let node = self.node_mut(id)?;
        node.text = Some(text.into());
        Ok(())
    }

    /// Adds one attribute to an existing element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidElement`] when the key is already set.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), MarkupError> {
        let node = self.node_mut(id)?;
        let key = key.into();
        if node.attributes.contains_key(&key) {
            return Err(MarkupError::invalid(
                node.tag.clone(),
                InvalidElementReason::DuplicateAttribute(key),
            ));
        }
        node.attributes.insert(key, value.into());
        Ok(())
    }

    /// Borrowed view of an element, or `None` for a foreign handle.
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        (id.0 < self.nodes.len()).then_some(ElementRef { doc: self, id })
    }

    /// Borrowed view of the root element.
    pub fn root_element(&self) -> ElementRef<'_> {
        ElementRef {
            doc: self,
            id: self.root(),
        }
    }

    /// Renders a human-readable outline of the tree for diagnostics.
    ///
    /// One line per element, indented by depth, listing attributes in order
    /// and the trimmed text when present.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        describe_element(&mut out, self.root_element(), 0);
        out
    }

    fn push_child(
        &mut self,
        parent: ElementId,
        tag: String,
        attributes: Attributes,
        text: Option<String>,
    ) -> Result<ElementId, MarkupError> {
        if parent.0 >= self.nodes.len() {
            return Err(MarkupError::invalid(tag, InvalidElementReason::UnknownHandle));
        }
        let node = Self::make_node(tag, attributes, text)?;
        trace!(tag = node.tag, parent = parent.0; "Adding element");

        let id = ElementId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn make_node(
        tag: String,
        attributes: Attributes,
        text: Option<String>,
    ) -> Result<Node, MarkupError> {
        if tag.is_empty() {
            return Err(MarkupError::invalid(tag, InvalidElementReason::EmptyTag));
        }
        let attributes = attributes.into_map(&tag)?;
        Ok(Node {
            tag,
            attributes,
            text,
            children: Vec::new(),
        })
    }

    fn node_mut(&mut self, id: ElementId) -> Result<&mut Node, MarkupError> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| MarkupError::invalid("?", InvalidElementReason::UnknownHandle))
    }
}

/// Read-only view of one element and, through it, its subtree.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: ElementId,
}

impl<'a> ElementRef<'a> {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tag(&self) -> &'a str {
        &self.node().tag
    }

    /// Attribute pairs in insertion order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&'a str, &'a str)> + use<'a> {
        self.node()
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.node().attributes.get(key).map(String::as_str)
    }

    pub fn text(&self) -> Option<&'a str> {
        self.node().text.as_deref()
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = ElementRef<'a>> + use<'a> {
        let doc = self.doc;
        self.node()
            .children
            .iter()
            .map(move |&id| ElementRef { doc, id })
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.children().find(|child| child.tag() == tag)
    }

    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    /// Every element below this one in document order, excluding itself.
    pub fn descendants(&self) -> Descendants<'a> {
        let mut stack: Vec<ElementId> = self.node().children.clone();
        stack.reverse();
        Descendants {
            doc: self.doc,
            stack,
        }
    }

    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.id.0]
    }
}

/// Pre-order iterator over the descendants of an element.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children = &self.doc.nodes[id.0].children;
        self.stack.extend(children.iter().rev().copied());
        Some(ElementRef { doc: self.doc, id })
    }
}

fn describe_element(out: &mut String, element: ElementRef<'_>, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(element.tag());
    for (key, value) in element.attributes() {
        out.push_str(&format!(" {key}={value:?}"));
    }
    if let Some(text) = element.text().map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str(&format!(" => {text:?}"));
    }
    out.push('\n');

    for child in element.children() {
        describe_element(out, child, depth + 1);
    }
}
