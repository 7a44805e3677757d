/*!
 * Brocopy Library
 * Broadcast one file to the destinations listed in a key/path mapping file
 *
 * Layers, bottom up:
 * - memory: fixed-capacity arena with scratch regions
 * - strings: length-prefixed slices, arena formatting, lists, file buffering
 * - csv: mapping file scanning and matching
 * - app: configuration, logging and the broadcast run
 */

pub mod app;
pub mod core;
pub mod csv;
pub mod memory;
pub mod strings;

// Re-exports
pub use app::{run, Config, RunLog, RunReport};
pub use core::{BrocopyError, BrocopyResult};
pub use csv::{match_all, match_by_keys, CsvMatcher, Matches};
pub use memory::{Arena, ArenaAlloc, ArenaError, ArenaResult, ArenaStats, Scratch};
pub use strings::{buffer_whole_file, FileError, StrList, StrSlice};
