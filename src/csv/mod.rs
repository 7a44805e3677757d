/*!
 * CSV Module
 *
 * Scanning of the `key,path` mapping file and the two matching modes:
 * - By keys: rows whose key equals one of the caller's keys
 * - All rows: every row's path, bounded by a safety cap
 *
 * The format is strict: one discarded header line, two comma-separated
 * fields, `\n` or `\r\n` line endings, no quoting.
 */

mod matcher;
mod rows;

pub use matcher::{match_all, match_by_keys, CsvMatcher, Matches};
pub use rows::{CsvRow, CsvRows};
