/*!
 * Run Logging
 * Log file selection, session banners and tracing subscriber setup
 *
 * Every run appends to one log file:
 * - A separator line, local timestamp and run id open the session
 * - Tracing events follow (JSON when BROCOPY_LOG_JSON is set)
 * - A separator line closes the session
 */

use super::paths::fallback_log_path;
use crate::core::limits::{LOG_JSON_ENV, LOG_SEP_LINE};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

/// Generate a unique id to correlate the lines of one run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`
///
/// Falls back to UTC when the local offset cannot be determined.
pub fn timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// The append-only log file of a run
#[derive(Debug)]
pub struct RunLog {
    path: Option<PathBuf>,
    file: Option<File>,
}

impl RunLog {
    /// Open `requested` for appending, else `brolog.txt` next to the executable
    ///
    /// Without either, the run continues with no file logging.
    pub fn open(requested: Option<&Path>) -> Self {
        if let Some(path) = requested {
            match open_append(path) {
                Ok(file) => return Self::with_file(path.to_path_buf(), file),
                Err(e) => eprintln!(
                    "warning: could not open log file \"{}\": {}",
                    path.display(),
                    e
                ),
            }
        }

        let Some(fallback) = fallback_log_path() else {
            eprintln!("warning: could not locate the executable directory, file logging disabled");
            return Self::disabled();
        };

        match open_append(&fallback) {
            Ok(file) => Self::with_file(fallback, file),
            Err(e) => {
                eprintln!(
                    "warning: could not open fallback log file \"{}\": {}",
                    fallback.display(),
                    e
                );
                Self::disabled()
            }
        }
    }

    /// Log into an already open file
    pub fn with_file(path: PathBuf, file: File) -> Self {
        Self {
            path: Some(path),
            file: Some(file),
        }
    }

    /// No file logging
    pub fn disabled() -> Self {
        Self {
            path: None,
            file: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Second handle to the file for the tracing layer
    pub fn writer(&self) -> Option<File> {
        self.file.as_ref().and_then(|f| f.try_clone().ok())
    }

    /// Write the opening separator, timestamp, run id and arguments
    pub fn begin(&mut self, run_id: &str, args: &[String]) -> io::Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        writeln!(file, "{}", LOG_SEP_LINE)?;
        writeln!(file, "{}", timestamp())?;
        writeln!(file, "run id: {}", run_id)?;
        writeln!(file, "args: {}", args.join(" "))?;
        file.flush()
    }

    /// Write the closing separator
    pub fn finish(&mut self) -> io::Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        writeln!(file, "{}", LOG_SEP_LINE)?;
        file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize tracing into the run log, and stdout when `verbose`
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - BROCOPY_LOG_JSON: JSON lines in the log file (default: false)
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(log_file: Option<File>, verbose: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(LOG_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let file_layer = log_file.map(|file| {
        let writer = Mutex::new(file);
        if use_json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(writer)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .boxed()
        }
    });

    let stdout_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(io::stdout)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .is_ok()
}
