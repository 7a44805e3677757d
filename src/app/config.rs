/*!
 * Run Configuration
 *
 * Everything one broadcast run needs, assembled from the command line.
 */

use crate::core::limits::{DEFAULT_ARENA_CAPACITY, MAX_CSV_ROWS, MAX_KEYS};
use crate::core::{BrocopyError, BrocopyResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash long flags accepted for compatibility, and their replacements
const LEGACY_FLAGS: &[(&str, &str)] = &[("-log", "--log"), ("-rm", "--remove-src")];

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to broadcast
    pub src_path: PathBuf,

    /// Mapping file with `key,path` rows
    pub csv_path: PathBuf,

    /// Requested log file (falls back next to the executable)
    pub log_path: Option<PathBuf>,

    /// Lookup keys, in command-line order
    pub keys: Vec<String>,

    /// Mirror log lines to stdout
    pub verbose: bool,

    /// Copy to every path in the mapping file, ignoring keys
    pub all_csv_paths: bool,

    /// Remove the source file after copying
    pub remove_src: bool,

    /// Arena capacity in bytes (default: 1MB)
    pub arena_capacity: usize,

    /// Keys beyond this count are dropped (default: 1000)
    pub max_keys: usize,

    /// Cap for the match-all mode (default: 1000)
    pub max_rows: usize,
}

impl Config {
    /// Create default configuration for a source and mapping file
    pub fn new<S: Into<PathBuf>, C: Into<PathBuf>>(src_path: S, csv_path: C) -> Self {
        Self {
            src_path: src_path.into(),
            csv_path: csv_path.into(),
            log_path: None,
            keys: Vec::new(),
            verbose: false,
            all_csv_paths: false,
            remove_src: false,
            arena_capacity: DEFAULT_ARENA_CAPACITY,
            max_keys: MAX_KEYS,
            max_rows: MAX_CSV_ROWS,
        }
    }

    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_log_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_all_csv_paths(mut self, all: bool) -> Self {
        self.all_csv_paths = all;
        self
    }

    pub fn with_remove_src(mut self, remove: bool) -> Self {
        self.remove_src = remove;
        self
    }

    pub fn with_arena_capacity(mut self, capacity: usize) -> Self {
        self.arena_capacity = capacity;
        self
    }

    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.max_keys = max_keys;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Keys actually used for matching
    ///
    /// Empty in match-all mode, truncated to `max_keys` otherwise.
    pub fn effective_keys(&self) -> &[String] {
        if self.all_csv_paths {
            &[]
        } else {
            &self.keys[..self.keys.len().min(self.max_keys)]
        }
    }

    /// Check the combination of options before touching the filesystem
    pub fn validate(&self) -> BrocopyResult<()> {
        if self.src_path.as_os_str().is_empty() {
            return Err(BrocopyError::MissingArgument("<src_path>".into()));
        }
        if self.csv_path.as_os_str().is_empty() {
            return Err(BrocopyError::MissingArgument("<csv_path>".into()));
        }
        if !self.all_csv_paths && self.keys.is_empty() {
            return Err(BrocopyError::MissingArgument(
                "<key> (or pass --all-csv-paths)".into(),
            ));
        }
        if self.arena_capacity == 0 {
            return Err(BrocopyError::Configuration(
                "arena capacity must be greater than zero".into(),
            ));
        }
        if self.max_keys == 0 {
            return Err(BrocopyError::Configuration(
                "max keys must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Rewrite single-dash long flags (`-log`, `-rm`) to their `--` forms
///
/// Arguments after a literal `--` are left alone. Every other argument is
/// passed through byte for byte, so non-UTF-8 paths reach clap intact.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if past_separator {
                return arg;
            }
            if arg == "--" {
                past_separator = true;
                return arg;
            }
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg == *legacy)
                .map(|(_, modern)| OsString::from(*modern))
                .unwrap_or(arg)
        })
        .collect()
}
