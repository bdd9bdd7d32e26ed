//! Record cursor errors

/// Errors from misusing a [`RecordIterator`](crate::model::RecordIterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// `next()` was called with no records left.
    #[error("No more records")]
    Exhausted,

    /// `remove()` was called before `next()`, or twice for the same record.
    #[error("No current record to remove")]
    IllegalState,
}
