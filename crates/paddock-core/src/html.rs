//! HTML vocabulary.
//!
//! [`HtmlPage`] creates the `<html>`/`<head>`/`<body>` skeleton with HTML
//! serialization rules and an HTML5 doctype. Content methods take a parent
//! handle, so sections, figures and lists can be nested freely.

use crate::markup::{Attributes, Document, ElementId, MarkupError, Preamble, Syntax};

/// Inline style applied to images so they scale with their container.
pub const RESPONSIVE_IMAGE_STYLE: &str = "max-width: 100%; height: auto;";

/// A hyperlink with optional title and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub href: &'a str,
    pub text: &'a str,
    pub title: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl<'a> Link<'a> {
    pub fn new(href: &'a str, text: &'a str) -> Self {
        Self {
            href,
            text,
            title: None,
            class: None,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Builder for an HTML page.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    document: Document,
    head: ElementId,
    body: ElementId,
}

impl HtmlPage {
    /// Creates `<html lang="...">` with empty `<head>` and `<body>`.
    pub fn new(lang: &str) -> Result<Self, MarkupError> {
        let mut document = Document::new("html", Attributes::new().text("lang", lang))?
            .with_syntax(Syntax::Html)
            .with_preamble(Preamble::html5());
        let root = document.root();
        let head = document.add_child(root, "head", Attributes::new())?;
        let body = document.add_child(root, "body", Attributes::new())?;
        Ok(Self {
            document,
            head,
            body,
        })
    }

    pub fn head(&self) -> ElementId {
        self.head
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn meta_charset(&mut self, charset: &str) -> Result<ElementId, MarkupError> {
        self.document
            .add_child(self.head, "meta", Attributes::new().text("charset", charset))
    }

    /// Named `<meta>` entry such as `author` or `viewport`.
    pub fn meta(&mut self, name: &str, content: &str) -> Result<ElementId, MarkupError> {
        self.document.add_child(
            self.head,
            "meta",
            Attributes::new().text("name", name).text("content", content),
        )
    }

    pub fn title(&mut self, title: &str) -> Result<ElementId, MarkupError> {
        self.document
            .add_text_child(self.head, "title", Attributes::new(), title)
    }

    /// `<link>` in the head; `kind` fills the `type` attribute when given.
    pub fn link(
        &mut self,
        rel: &str,
        kind: Option<&str>,
        href: &str,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .text("rel", rel)
            .optional("type", kind)
            .text("href", href);
        self.document.add_child(self.head, "link", attributes)
    }

    /// Generic container element (`header`, `nav`, `main`, `section`, ...).
    pub fn element(&mut self, parent: ElementId, tag: &str) -> Result<ElementId, MarkupError> {
        self.document.add_child(parent, tag, Attributes::new())
    }

    /// `<h1>`..`<h6>`; levels outside that range are clamped.
    pub fn heading(
        &mut self,
        parent: ElementId,
        level: u8,
        text: &str,
    ) -> Result<ElementId, MarkupError> {
        let tag = format!("h{}", level.clamp(1, 6));
        self.document
            .add_text_child(parent, tag, Attributes::new(), text)
    }

    pub fn paragraph(&mut self, parent: ElementId, text: &str) -> Result<ElementId, MarkupError> {
        self.document
            .add_text_child(parent, "p", Attributes::new(), text)
    }

    /// Inline text element such as `span` or `figcaption`.
    pub fn text_element(
        &mut self,
        parent: ElementId,
        tag: &str,
        text: &str,
    ) -> Result<ElementId, MarkupError> {
        self.document
            .add_text_child(parent, tag, Attributes::new(), text)
    }

    pub fn anchor(&mut self, parent: ElementId, link: &Link<'_>) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .text("href", link.href)
            .optional("title", link.title)
            .optional("class", link.class);
        self.document
            .add_text_child(parent, "a", attributes, link.text)
    }

    /// `<ul>` (or `<ol>` when `ordered`) with one `<li>` per item.
    pub fn list<'i>(
        &mut self,
        parent: ElementId,
        ordered: bool,
        items: impl IntoIterator<Item = &'i str>,
    ) -> Result<ElementId, MarkupError> {
        let list = self
            .document
            .add_child(parent, if ordered { "ol" } else { "ul" }, Attributes::new())?;
        for item in items {
            self.list_item(list, item)?;
        }
        Ok(list)
    }

    pub fn list_item(&mut self, list: ElementId, text: &str) -> Result<ElementId, MarkupError> {
        self.document
            .add_text_child(list, "li", Attributes::new(), text)
    }

    /// `<dl>` with a `<dt>`/`<dd>` pair per entry.
    pub fn definition_list<T, D>(
        &mut self,
        parent: ElementId,
        entries: impl IntoIterator<Item = (T, D)>,
    ) -> Result<ElementId, MarkupError>
    where
        T: Into<String>,
        D: Into<String>,
    {
        let list = self.document.add_child(parent, "dl", Attributes::new())?;
        for (term, description) in entries {
            self.document
                .add_text_child(list, "dt", Attributes::new(), term)?;
            self.document
                .add_text_child(list, "dd", Attributes::new(), description)?;
        }
        Ok(list)
    }

    /// `<figure>` container; pair with [`HtmlPage::figcaption`].
    pub fn figure(&mut self, parent: ElementId) -> Result<ElementId, MarkupError> {
        self.document.add_child(parent, "figure", Attributes::new())
    }

    pub fn figcaption(&mut self, figure: ElementId, text: &str) -> Result<ElementId, MarkupError> {
        self.text_element(figure, "figcaption", text)
    }

    pub fn image(
        &mut self,
        parent: ElementId,
        src: &str,
        alt: &str,
        style: Option<&str>,
    ) -> Result<ElementId, MarkupError> {
        let attributes = Attributes::new()
            .text("src", src)
            .text("alt", alt)
            .optional("style", style);
        self.document.add_child(parent, "img", attributes)
    }

    /// `<video controls>` with one `<source>` and a fallback message for
    /// browsers without video support.
    pub fn video(
        &mut self,
        parent: ElementId,
        src: &str,
        mime: &str,
        fallback: &str,
    ) -> Result<ElementId, MarkupError> {
        let video = self.document.add_text_child(
            parent,
            "video",
            Attributes::new().text("controls", "controls"),
            fallback,
        )?;
        self.document.add_child(
            video,
            "source",
            Attributes::new().text("src", src).text("type", mime),
        )?;
        Ok(video)
    }
}
