//! Errors raised by typed setters

/// Error type for rejected input to a [`FieldValues`](crate::model::FieldValues) setter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A duration was given a negative number of seconds.
    #[error("Field '{field}': duration cannot be negative ({seconds}s)")]
    NegativeDuration { field: String, seconds: i64 },
}

impl ValueError {
    /// Creates a new negative duration error.
    pub fn negative_duration(field: impl Into<String>, seconds: i64) -> Self {
        Self::NegativeDuration {
            field: field.into(),
            seconds,
        }
    }
}
