//! XML rendering and parsing errors

/// Errors from rendering or parsing XML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The writer failed to emit an event.
    #[error("XML write error: {0}")]
    Write(String),

    /// The input contains no root element.
    #[error("XML document has no root element")]
    MissingRoot,
}

impl XmlError {
    pub(crate) fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }

    pub(crate) fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
