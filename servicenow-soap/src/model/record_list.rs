//! Query results and the cursor over them

use super::Record;
use crate::error::CursorError;
use crate::xml::Element;

/// An ordered list of records returned by a query.
///
/// Read through it with [`iter`](Self::iter), or walk it with a
/// [`RecordIterator`] from [`cursor`](Self::cursor) to remove records along
/// the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds a list from a response element, one record per child element.
    ///
    /// ```
    /// use servicenow_soap::model::RecordList;
    /// use servicenow_soap::xml::Element;
    ///
    /// let response = Element::parse(
    ///     "<getRecordsResponse>\
    ///        <getRecordsResult><number>INC1</number></getRecordsResult>\
    ///        <getRecordsResult><number>INC2</number></getRecordsResult>\
    ///      </getRecordsResponse>",
    /// )
    /// .unwrap();
    ///
    /// let list = RecordList::from_response(&response);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1).unwrap().number(), Some("INC2"));
    /// ```
    pub fn from_response(response: &Element) -> Self {
        response.children().map(Record::from_element).collect()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns a cursor positioned before the first record.
    ///
    /// The cursor borrows the list exclusively, so the list cannot change
    /// underneath it except through [`RecordIterator::remove`].
    pub fn cursor(&mut self) -> RecordIterator<'_> {
        RecordIterator::new(&mut self.records)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A forward cursor over a [`RecordList`] that can remove the current record.
///
/// The cursor starts before the first record. [`next`](Self::next) moves to
/// the following record and returns it; [`remove`](Self::remove) deletes the
/// record last returned by `next` from the list.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::{Record, RecordList};
///
/// let mut list: RecordList = ["open", "closed", "open"]
///     .into_iter()
///     .map(|state| [("state", state)].into_iter().collect::<Record>())
///     .collect();
///
/// let mut cursor = list.cursor();
/// while cursor.has_next() {
///     if cursor.next()?.get("state") == Some("closed") {
///         cursor.remove()?;
///     }
/// }
///
/// assert_eq!(list.len(), 2);
/// # Ok::<(), servicenow_soap::error::CursorError>(())
/// ```
#[derive(Debug)]
pub struct RecordIterator<'a> {
    records: &'a mut Vec<Record>,
    /// Index of the record the next call to `next` returns.
    next: usize,
    /// Index of the record last returned by `next`, cleared by `remove`.
    current: Option<usize>,
}

impl<'a> RecordIterator<'a> {
    fn new(records: &'a mut Vec<Record>) -> Self {
        Self {
            records,
            next: 0,
            current: None,
        }
    }

    /// Returns `true` if `next` would return a record.
    pub fn has_next(&self) -> bool {
        self.next < self.records.len()
    }

    /// Advances to the next record and returns it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&Record, CursorError> {
        let index = self.next;
        let record = self.records.get(index).ok_or(CursorError::Exhausted)?;
        self.current = Some(index);
        self.next = index + 1;
        Ok(record)
    }

    /// Removes the record last returned by `next` and returns it.
    ///
    /// Fails with [`CursorError::IllegalState`] before the first `next` or
    /// when the current record was already removed.
    pub fn remove(&mut self) -> Result<Record, CursorError> {
        let index = self.current.take().ok_or(CursorError::IllegalState)?;
        self.next = index;
        Ok(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(numbers: &[&str]) -> RecordList {
        numbers
            .iter()
            .map(|n| [("number", *n)].into_iter().collect::<Record>())
            .collect()
    }

    fn numbers(list: &RecordList) -> Vec<&str> {
        list.iter().filter_map(Record::number).collect()
    }

    #[test]
    fn test_next_until_exhausted() {
        let mut records = list(&["1", "2", "3"]);
        let mut cursor = records.cursor();
        for expected in ["1", "2", "3"] {
            assert!(cursor.has_next());
            assert_eq!(cursor.next().unwrap().number(), Some(expected));
        }
        assert!(!cursor.has_next());
        assert_eq!(cursor.next().unwrap_err(), CursorError::Exhausted);
    }

    #[test]
    fn test_has_next_does_not_advance() {
        let mut records = list(&["1"]);
        let mut cursor = records.cursor();
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next().unwrap().number(), Some("1"));
    }

    #[test]
    fn test_remove_shrinks_without_skipping() {
        let mut records = list(&["1", "2", "3"]);
        {
            let mut cursor = records.cursor();
            cursor.next().unwrap();
            assert_eq!(cursor.remove().unwrap().number(), Some("1"));
            assert_eq!(cursor.next().unwrap().number(), Some("2"));
            assert_eq!(cursor.next().unwrap().number(), Some("3"));
            assert_eq!(cursor.remove().unwrap().number(), Some("3"));
            assert!(!cursor.has_next());
        }
        assert_eq!(numbers(&records), ["2"]);
    }

    #[test]
    fn test_remove_without_next_is_illegal() {
        let mut records = list(&["1", "2"]);
        let mut cursor = records.cursor();
        assert_eq!(cursor.remove().unwrap_err(), CursorError::IllegalState);

        cursor.next().unwrap();
        cursor.remove().unwrap();
        assert_eq!(cursor.remove().unwrap_err(), CursorError::IllegalState);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut records = RecordList::new();
        let mut cursor = records.cursor();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next().unwrap_err(), CursorError::Exhausted);
        assert_eq!(cursor.remove().unwrap_err(), CursorError::IllegalState);
    }
}
