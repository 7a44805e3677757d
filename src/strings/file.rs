/*!
 * File Buffering
 * Read a whole file into arena memory in one pass
 */

use super::slice::StrSlice;
use crate::memory::{ArenaAlloc, ArenaError};
use miette::Diagnostic;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File buffering errors
///
/// A missing or unreadable file is always an error; an empty file is a
/// successful, empty read.
#[derive(Error, Debug, Diagnostic)]
pub enum FileError {
    #[error("Cannot open {}: {source}", path.display())]
    #[diagnostic(
        code(file::open_failed),
        help("Check that the file exists and is readable.")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot determine size of {}: {source}", path.display())]
    #[diagnostic(code(file::metadata_failed))]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed reading {}: {source}", path.display())]
    #[diagnostic(
        code(file::read_failed),
        help("The file may have been truncated or locked while reading.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is too large to buffer ({size} bytes)", path.display())]
    #[diagnostic(code(file::too_large))]
    TooLarge { path: PathBuf, size: u64 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Arena(#[from] ArenaError),
}

/// Buffer the whole file at `path` into the arena
///
/// Seeks to the end to learn the size, allocates exactly that many bytes and
/// reads them in one pass. The file handle is closed before returning on
/// every path.
///
/// If the read fails after the allocation, those bytes stay used. Callers
/// that keep the arena after an error should buffer through a [`Scratch`]
/// so restoring it gives the space back.
///
/// [`Scratch`]: crate::memory::Scratch
pub fn buffer_whole_file<'a, A>(arena: &'a A, path: &Path) -> Result<StrSlice<'a>, FileError>
where
    A: ArenaAlloc + ?Sized,
{
    let mut file = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let size = file
        .seek(SeekFrom::End(0))
        .and_then(|size| file.rewind().map(|_| size))
        .map_err(|source| FileError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

    let size = usize::try_from(size).map_err(|_| FileError::TooLarge {
        path: path.to_path_buf(),
        size,
    })?;

    if size == 0 {
        debug!(path = %path.display(), "buffered empty file");
        return Ok(StrSlice::empty());
    }

    let buf = arena.allocate(size)?;
    file.read_exact(buf).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = size, "buffered file");
    Ok(StrSlice::from_buf(buf))
}
