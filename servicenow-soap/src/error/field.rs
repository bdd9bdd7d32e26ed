//! FieldError for Record accessors

/// Error type for field access operations on [`Record`](crate::model::Record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the record.
    #[error("Field '{field}' not found in record")]
    Missing { field: String },

    /// The field exists but its text does not decode as the requested type.
    #[error("Field '{field}' is not a valid {expected}: '{value}'")]
    Parse {
        field: String,
        expected: &'static str,
        value: String,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(field: impl Into<String>, expected: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            expected,
            value: value.into(),
        }
    }

    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Parse { field, .. } => field,
        }
    }
}
