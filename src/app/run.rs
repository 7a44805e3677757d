/*!
 * Broadcast Run
 *
 * One invocation end to end:
 * 1. Validate the configuration and probe both input files
 * 2. Buffer the mapping file into the arena
 * 3. Collect destinations (by keys, or every row)
 * 4. Copy the source to each destination, continuing past failures
 * 5. Optionally remove the source
 */

use super::config::Config;
use super::copy::{copy_to, remove_source, CopyOutcome};
use super::paths::native_path;
use crate::core::{BrocopyError, BrocopyResult};
use crate::csv::{CsvMatcher, Matches};
use crate::memory::Arena;
use crate::strings::{buffer_whole_file, StrList, StrSlice};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Size of the buffered mapping file
    pub bytes_read: usize,
    /// Keys used for matching (0 in match-all mode)
    pub keys: usize,
    pub matched: usize,
    pub copied: usize,
    pub failed: usize,
    pub skipped: usize,
    /// The match-all cap cut the mapping file short
    pub truncated: bool,
    /// `None` unless removal was requested
    pub source_removed: Option<bool>,
}

/// Broadcast the source file according to `config`
///
/// Errors only for problems that stop the run before any copy: bad
/// options, unreadable inputs, arena exhaustion. Individual copy failures
/// are counted in the report.
pub fn run(config: &Config) -> BrocopyResult<RunReport> {
    config.validate()?;
    probe_readable(&config.src_path)?;
    probe_readable(&config.csv_path)?;

    let arena = Arena::new(config.arena_capacity)?;
    let mut report = RunReport::default();

    let keys = collect_keys(&arena, config)?;
    report.keys = keys.len();

    let csv = buffer_whole_file(&arena, &config.csv_path)?;
    report.bytes_read = csv.len();
    info!(
        csv = %config.csv_path.display(),
        bytes = csv.len(),
        "bytes read from CSV"
    );
    if csv.is_empty() {
        warn!(csv = %config.csv_path.display(), "CSV is empty");
    }

    let matcher = CsvMatcher::with_max_rows(config.max_rows);
    let matches = if config.all_csv_paths {
        let matches = matcher.match_all(&arena, csv)?;
        info!(parsed = matches.count, "amount of paths parsed");
        if matches.truncated {
            warn!(
                max_rows = config.max_rows,
                "CSV has more rows than the cap, remaining rows ignored"
            );
        }
        matches
    } else {
        let matches = matcher.match_by_keys(&arena, &keys, csv)?;
        info!(
            matched = matches.count,
            keys = keys.len(),
            "amount of matches in CSV from arg keys"
        );
        matches
    };
    report.matched = matches.count;
    report.truncated = matches.truncated;

    broadcast(&arena, &config.src_path, &matches, &mut report)?;

    if config.remove_src {
        report.source_removed = Some(remove_source(&config.src_path));
    }

    debug!(stats = ?arena.stats(), "arena usage");
    info!(
        copied = report.copied,
        failed = report.failed,
        skipped = report.skipped,
        "run complete"
    );
    Ok(report)
}

/// Keys from the command line as a list of borrowed slices
fn collect_keys<'a>(arena: &'a Arena, config: &'a Config) -> BrocopyResult<StrList<'a>> {
    let mut keys = StrList::new();

    if config.all_csv_paths {
        if !config.keys.is_empty() {
            info!(ignored = config.keys.len(), "keys ignored with --all-csv-paths");
        }
        return Ok(keys);
    }

    if config.keys.len() > config.max_keys {
        warn!(
            given = config.keys.len(),
            max_keys = config.max_keys,
            "too many keys, extra keys dropped"
        );
    }
    for key in config.effective_keys() {
        keys.push_slice(arena, StrSlice::new(key))?;
    }
    Ok(keys)
}

/// Copy `src` to every matched destination
///
/// Each destination is rendered in a scratch region that is released
/// before the next one.
fn broadcast(
    arena: &Arena,
    src: &Path,
    matches: &Matches<'_>,
    report: &mut RunReport,
) -> BrocopyResult<()> {
    for raw in matches.iter() {
        let outcome = if raw.is_empty() {
            copy_to(src, Path::new(""))
        } else {
            let scratch = arena.checkpoint()?;
            let dest = native_path(&scratch, raw)?;
            debug!(dest = %dest.display(), scratch_bytes = scratch.used(), "rendered destination");
            scratch.restore();
            copy_to(src, &dest)
        };

        match outcome {
            CopyOutcome::Copied(_) => report.copied += 1,
            CopyOutcome::Failed(_) => report.failed += 1,
            CopyOutcome::Skipped => report.skipped += 1,
        }
    }
    Ok(())
}

fn probe_readable(path: &Path) -> BrocopyResult<()> {
    File::open(path)
        .map(drop)
        .map_err(|source| BrocopyError::Inaccessible {
            path: path.to_path_buf(),
            source,
        })
}
