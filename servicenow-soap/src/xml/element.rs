//! Minimal XML element tree

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;

use crate::error::XmlError;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data. Stored unescaped.
    Text(String),
}

/// An XML element with attributes and ordered children.
///
/// Names are kept verbatim, including any namespace prefix
/// (e.g. `soap:Envelope`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parses a single element from XML text.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        super::parse(xml).map(Document::into_root)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Sets an attribute (builder pattern).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element (builder pattern).
    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    /// Appends a text node (builder pattern).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Sets an attribute, replacing any existing value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns all child nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over child elements, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Returns the first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().find(|e| e.name == name)
    }

    /// Returns the concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Settles the children of an element closed by an end tag during parsing.
    ///
    /// Whitespace-only text between child elements is indentation and goes;
    /// an element with nothing between its tags keeps one empty text node.
    pub(super) fn close_parsed(&mut self) {
        if self.children.is_empty() {
            self.children.push(Node::Text(String::new()));
        } else if self.children.iter().any(|n| matches!(n, Node::Element(_))) {
            self.children.retain(|n| match n {
                Node::Text(t) => !t.bytes().all(|b| b.is_ascii_whitespace()),
                Node::Element(_) => true,
            });
        }
    }

    /// Returns `true` if the element has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A complete XML document: a declaration and one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

// =============================================================================
// Writing
// =============================================================================

/// Something that can be written as XML events.
///
/// Implemented by [`Element`] and [`Document`]; accepted by
/// [`format`](super::format) and [`XmlFormatter`](super::XmlFormatter).
pub trait WriteXml {
    /// Writes this node. `declaration` asks documents to emit `<?xml ...?>`.
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, declaration: bool) -> Result<(), XmlError>;
}

impl WriteXml for Element {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, _declaration: bool) -> Result<(), XmlError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(XmlError::write);
        }

        writer.write_event(Event::Start(start)).map_err(XmlError::write)?;
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_xml(writer, false)?,
                Node::Text(t) => writer
                    .write_event(Event::Text(BytesText::new(t)))
                    .map_err(XmlError::write)?,
            }
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(XmlError::write)
    }
}

impl WriteXml for Document {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, declaration: bool) -> Result<(), XmlError> {
        if declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(XmlError::write)?;
        }
        self.root.write_xml(writer, declaration)
    }
}
