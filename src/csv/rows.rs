/*!
 * CSV Rows
 * Line and field scanning over a buffered two-column mapping file
 */

use crate::core::limits::{CSV_CARRIAGE_RETURN, CSV_FIELD_SEP, CSV_LINE_END};
use crate::strings::StrSlice;

/// One data line split into its two fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvRow<'s> {
    /// Bytes before the first comma
    pub key: StrSlice<'s>,
    /// Bytes after the first comma, cut at the first carriage return
    pub path: StrSlice<'s>,
}

impl<'s> CsvRow<'s> {
    /// Split a line (terminator already removed)
    ///
    /// A line without a comma has the whole line as key and an empty path.
    pub fn split(line: StrSlice<'s>) -> Self {
        let comma = line.index_of(CSV_FIELD_SEP);
        let key = line.prefix(comma);
        let path = line.skip(comma + 1);
        Self {
            key,
            path: path.prefix(path.index_of(CSV_CARRIAGE_RETURN)),
        }
    }
}

/// Iterator over the data lines of a mapping buffer
///
/// The first line is the header and is always discarded; a buffer without
/// any newline has no data lines. The last line may lack its terminator.
#[derive(Debug, Clone)]
pub struct CsvRows<'s> {
    cursor: StrSlice<'s>,
}

impl<'s> CsvRows<'s> {
    pub fn new(buffer: StrSlice<'s>) -> Self {
        Self {
            cursor: buffer.skip(buffer.index_of(CSV_LINE_END) + 1),
        }
    }

    /// Bytes not yet scanned
    #[inline]
    pub fn remaining(&self) -> StrSlice<'s> {
        self.cursor
    }
}

impl<'s> Iterator for CsvRows<'s> {
    type Item = CsvRow<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_empty() {
            return None;
        }
        let line = self.cursor.prefix(self.cursor.index_of(CSV_LINE_END));
        self.cursor = self.cursor.skip(line.len() + 1);
        Some(CsvRow::split(line))
    }
}

impl std::iter::FusedIterator for CsvRows<'_> {}
