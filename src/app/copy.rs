/*!
 * Copy Operations
 * Per-destination copies and source removal
 */

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Result of copying to one destination
#[derive(Debug)]
pub enum CopyOutcome {
    /// Bytes written
    Copied(u64),
    Failed(io::Error),
    /// Empty destination in the mapping file
    Skipped,
}

impl CopyOutcome {
    #[inline]
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Copy `src` to `dest`, overwriting an existing file
///
/// Failures are logged and returned, never propagated.
pub fn copy_to(src: &Path, dest: &Path) -> CopyOutcome {
    if dest.as_os_str().is_empty() {
        warn!(src = %src.display(), "skipping empty destination path");
        return CopyOutcome::Skipped;
    }

    if is_same_file(src, dest) {
        warn!(src = %src.display(), "destination is the source file");
        return CopyOutcome::Failed(io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination is the source file",
        ));
    }

    match fs::copy(src, dest) {
        Ok(bytes) => {
            info!(
                src = %src.display(),
                dest = %dest.display(),
                bytes,
                "copied"
            );
            CopyOutcome::Copied(bytes)
        }
        Err(e) => {
            warn!(
                src = %src.display(),
                dest = %dest.display(),
                error = %e,
                "failed to copy"
            );
            CopyOutcome::Failed(e)
        }
    }
}

fn is_same_file(src: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Delete the source file once broadcasting is done
///
/// Returns whether the file was removed.
pub fn remove_source(src: &Path) -> bool {
    match fs::remove_file(src) {
        Ok(()) => {
            info!(src = %src.display(), "source file removed");
            true
        }
        Err(e) => {
            warn!(src = %src.display(), error = %e, "could not remove source file");
            false
        }
    }
}
