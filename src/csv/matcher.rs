/*!
 * CSV Matcher
 * Turn a buffered mapping file plus lookup keys into destination paths
 */

use super::rows::CsvRows;
use crate::core::limits::MAX_CSV_ROWS;
use crate::memory::{ArenaAlloc, ArenaResult};
use crate::strings::{copy_in, StrList, StrSlice};
use tracing::debug;

/// Destination paths produced by a scan
///
/// Every path is a fresh NUL-terminated arena copy, independent of the
/// scanned buffer.
#[derive(Debug, Default)]
pub struct Matches<'a> {
    pub paths: StrList<'a>,
    pub count: usize,
    /// The match-all cap stopped the scan before the end of the buffer
    pub truncated: bool,
}

impl<'a> Matches<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> crate::strings::Iter<'a> {
        self.paths.iter()
    }

    fn append<A>(&mut self, arena: &'a A, path: StrSlice<'_>) -> ArenaResult<()>
    where
        A: ArenaAlloc + ?Sized,
    {
        let copy = copy_in(arena, path)?;
        self.paths.push_slice(arena, copy.as_slice())?;
        self.count += 1;
        Ok(())
    }
}

/// CSV matching with a configurable match-all cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvMatcher {
    max_rows: usize,
}

impl CsvMatcher {
    pub const fn new() -> Self {
        Self {
            max_rows: MAX_CSV_ROWS,
        }
    }

    /// Cap on entries produced by [`match_all`](Self::match_all)
    pub const fn with_max_rows(max_rows: usize) -> Self {
        Self { max_rows }
    }

    #[inline]
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Collect the path of every row whose key equals one of `keys`
    ///
    /// Keys compare ASCII case-insensitively. Output order is file order,
    /// then key-list order within a row; duplicates are kept, so a row
    /// matched by two keys appears twice.
    pub fn match_by_keys<'a, A>(
        &self,
        arena: &'a A,
        keys: &StrList<'_>,
        csv: StrSlice<'_>,
    ) -> ArenaResult<Matches<'a>>
    where
        A: ArenaAlloc + ?Sized,
    {
        let mut matches = Matches::default();

        for row in CsvRows::new(csv) {
            for key in keys.iter() {
                if key.equals_insensitive(row.key) {
                    matches.append(arena, row.path)?;
                }
            }
        }

        debug!(keys = keys.len(), matched = matches.count, "matched CSV rows by key");
        Ok(matches)
    }

    /// Collect the path of every data row, in file order
    ///
    /// Stops after `max_rows` entries and flags the result as truncated.
    pub fn match_all<'a, A>(&self, arena: &'a A, csv: StrSlice<'_>) -> ArenaResult<Matches<'a>>
    where
        A: ArenaAlloc + ?Sized,
    {
        let mut matches = Matches::default();

        for row in CsvRows::new(csv) {
            if matches.count == self.max_rows {
                matches.truncated = true;
                debug!(max_rows = self.max_rows, "CSV row cap reached");
                break;
            }
            matches.append(arena, row.path)?;
        }

        debug!(parsed = matches.count, "collected all CSV rows");
        Ok(matches)
    }
}

impl Default for CsvMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// [`CsvMatcher::match_by_keys`] with the default cap
pub fn match_by_keys<'a, A>(
    arena: &'a A,
    keys: &StrList<'_>,
    csv: StrSlice<'_>,
) -> ArenaResult<Matches<'a>>
where
    A: ArenaAlloc + ?Sized,
{
    CsvMatcher::new().match_by_keys(arena, keys, csv)
}

/// [`CsvMatcher::match_all`] with the default cap
pub fn match_all<'a, A>(arena: &'a A, csv: StrSlice<'_>) -> ArenaResult<Matches<'a>>
where
    A: ArenaAlloc + ?Sized,
{
    CsvMatcher::new().match_all(arena, csv)
}
