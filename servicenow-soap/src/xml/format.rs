//! Thread-safe XML rendering
//!
//! [`format`] renders through a formatter cached in thread-local storage, one
//! per thread per mode, built on first use and reused for the life of the
//! thread. No state is shared between threads, so calls never contend.

use std::cell::RefCell;

use quick_xml::Writer;

use super::WriteXml;
use crate::error::XmlError;

/// Output configuration for an [`XmlFormatter`].
///
/// # Example
///
/// ```
/// use servicenow_soap::xml::XmlFormat;
///
/// let format = XmlFormat::pretty()
///     .with_indent(b'\t', 1)
///     .with_declaration(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFormat {
    /// Indentation as (character, count per level). `None` emits no
    /// whitespace between elements.
    ///
    /// Default: none
    pub indent: Option<(u8, usize)>,

    /// Whether documents start with `<?xml version="1.0" encoding="UTF-8"?>`.
    ///
    /// Default: true
    pub declaration: bool,
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self {
            indent: None,
            declaration: true,
        }
    }
}

impl XmlFormat {
    /// Creates a new format with default values (compact).
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte-minimal output with no inserted whitespace.
    pub fn compact() -> Self {
        Self::default()
    }

    /// One element per line, indented by two spaces per level.
    pub fn pretty() -> Self {
        Self {
            indent: Some((b' ', 2)),
            ..Self::default()
        }
    }

    /// Sets the indentation character and count per level.
    pub fn with_indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent = Some((indent_char, indent_size));
        self
    }

    /// Disables indentation.
    pub fn without_indent(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Sets whether documents carry an XML declaration.
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

/// Renders XML trees to strings.
///
/// A formatter is cheap to reuse but takes `&mut self`, so it cannot be
/// shared between threads. Use [`format`] for the thread-local cached
/// instances, or own one when a custom [`XmlFormat`] is needed.
#[derive(Debug)]
pub struct XmlFormatter {
    format: XmlFormat,
    /// Length of the last output, used to size the next buffer.
    capacity: usize,
}

impl XmlFormatter {
    pub fn new(format: XmlFormat) -> Self {
        Self {
            format,
            capacity: 0,
        }
    }

    pub fn format(&self) -> &XmlFormat {
        &self.format
    }

    /// Renders an element or document.
    pub fn render<T: WriteXml + ?Sized>(&mut self, node: &T) -> Result<String, XmlError> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.capacity);
        {
            let mut writer = match self.format.indent {
                Some((indent_char, indent_size)) => {
                    Writer::new_with_indent(&mut buffer, indent_char, indent_size)
                }
                None => Writer::new(&mut buffer),
            };
            node.write_xml(&mut writer, self.format.declaration)?;
        }
        self.capacity = buffer.len();
        String::from_utf8(buffer).map_err(XmlError::write)
    }
}

thread_local! {
    static COMPACT: RefCell<XmlFormatter> = {
        log::trace!("Creating compact XML formatter for {:?}", std::thread::current().id());
        RefCell::new(XmlFormatter::new(XmlFormat::compact()))
    };

    static PRETTY: RefCell<XmlFormatter> = {
        log::trace!("Creating pretty XML formatter for {:?}", std::thread::current().id());
        RefCell::new(XmlFormatter::new(XmlFormat::pretty()))
    };
}

/// Renders an element or document as XML text.
///
/// `pretty` selects indented output; otherwise no whitespace is inserted.
/// Safe to call from any number of threads at once.
pub fn format<T: WriteXml + ?Sized>(node: &T, pretty: bool) -> Result<String, XmlError> {
    let cache = if pretty { &PRETTY } else { &COMPACT };
    cache.with_borrow_mut(|formatter| formatter.render(node))
}

/// Shorthand for `format(node, true)`, the common case when logging.
pub fn format_pretty<T: WriteXml + ?Sized>(node: &T) -> Result<String, XmlError> {
    format(node, true)
}
