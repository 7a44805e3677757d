/*!
 * Strings Module
 *
 * Length-prefixed byte slices and the arena-backed helpers built on them:
 * - `StrSlice`: non-owning view, clamping slicing, sentinel searches
 * - Formatting into arena memory with a trailing NUL
 * - Append-only slice lists
 * - Whole-file buffering
 */

mod file;
mod format;
mod list;
mod slice;

pub use file::{buffer_whole_file, FileError};
pub use format::{concat_in, copy_in, format_into_arena, write_into, NulStr};
pub use list::{Iter, StrList, StrNode};
pub use slice::{ascii_lower, StrSlice};
