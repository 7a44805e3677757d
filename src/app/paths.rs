/*!
 * Path Helpers
 * Separator normalization and executable-relative locations
 */

use crate::core::limits::DEFAULT_LOG_FILE;
use crate::memory::{ArenaAlloc, ArenaResult};
use crate::strings::StrSlice;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const FOREIGN_SEPARATOR: u8 = b'/';
#[cfg(windows)]
const NATIVE_SEPARATOR: u8 = b'\\';

#[cfg(not(windows))]
const FOREIGN_SEPARATOR: u8 = b'\\';
#[cfg(not(windows))]
const NATIVE_SEPARATOR: u8 = b'/';

/// Replace every foreign path separator with the platform's own, in place
pub fn normalize_separators(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().filter(|b| **b == FOREIGN_SEPARATOR) {
        *byte = NATIVE_SEPARATOR;
    }
}

/// Render a destination from the mapping file as a native path
///
/// The separator rewrite happens on an arena copy, so the caller can
/// release it with a scratch region once the path is no longer needed.
/// `.` and `..` components are kept; the filesystem resolves them, which
/// matters when a component is a symlink.
pub fn native_path<A>(arena: &A, raw: StrSlice<'_>) -> ArenaResult<PathBuf>
where
    A: ArenaAlloc + ?Sized,
{
    let buf = arena.alloc_copy(raw.as_bytes())?;
    normalize_separators(buf);
    Ok(StrSlice::from_buf(buf).to_path_buf())
}

/// Normalize separators of a path given on the command line
///
/// Works on the raw bytes, so paths that are not valid UTF-8 survive.
#[cfg(unix)]
pub fn normalize_cli_path(path: &Path) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut bytes = path.as_os_str().as_bytes().to_vec();
    normalize_separators(&mut bytes);
    PathBuf::from(OsString::from_vec(bytes))
}

/// Normalize separators of a path given on the command line
///
/// Non-UTF-8 paths are passed through unchanged.
#[cfg(not(unix))]
pub fn normalize_cli_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => {
            let mut bytes = s.as_bytes().to_vec();
            normalize_separators(&mut bytes);
            PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => path.to_path_buf(),
    }
}

/// Directory holding the running executable
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// `brolog.txt` next to the executable
pub fn fallback_log_path() -> Option<PathBuf> {
    exe_dir().map(|dir| dir.join(DEFAULT_LOG_FILE))
}
