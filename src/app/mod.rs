/*!
 * Application Module
 *
 * The command-line program on top of the library:
 * - Configuration and legacy flag handling
 * - Log file selection and tracing setup
 * - The broadcast run itself
 */

pub mod config;
pub mod copy;
pub mod paths;
pub mod run;
pub mod tracer;

pub use config::{normalize_legacy_flags, Config};
pub use copy::{copy_to, remove_source, CopyOutcome};
pub use paths::{exe_dir, fallback_log_path, native_path, normalize_cli_path, normalize_separators};
pub use run::{run, RunReport};
pub use tracer::{generate_run_id, init_tracing, timestamp, RunLog};
