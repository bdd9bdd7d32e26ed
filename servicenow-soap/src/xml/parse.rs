//! Parsing XML text into an [`Element`] tree

use quick_xml::Reader;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;

use super::Document;
use super::Element;
use crate::error::XmlError;

/// Parses XML text into a [`Document`].
///
/// Text is kept verbatim. Whitespace-only text inside an element that has
/// child elements is the indentation of pretty output and is dropped, so
/// indented and compact output parse to the same tree. An element written as
/// `<a></a>` holds one empty text node, matching how [`Element::with_text`]
/// with `""` renders; `<a/>` holds none. Comments, processing instructions
/// and doctypes are skipped; CDATA sections become text.
pub fn parse(xml: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(XmlError::parse)? {
            Event::Start(e) => stack.push(start_element(&e)?),
            Event::Empty(e) => {
                let element = start_element(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| XmlError::Parse("unexpected closing tag".to_string()))?;
                element.close_parsed();
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(XmlError::parse)?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(text.into_owned());
                }
            }
            Event::CData(c) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(String::from_utf8_lossy(&c.into_inner()).into_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Parse(format!("unclosed element '{}'", open.name())));
    }
    root.map(Document::new).ok_or(XmlError::MissingRoot)
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(XmlError::parse)?;
        let value = attr.unescape_value().map_err(XmlError::parse)?;
        element.set_attribute(String::from_utf8_lossy(attr.key.as_ref()), value);
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(XmlError::Parse("multiple root elements".to_string())),
    }
    Ok(())
}
