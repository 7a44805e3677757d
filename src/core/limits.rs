/*!
 * Limits and Constants
 *
 * Centralized location for capacities, caps and fixed strings used across
 * the arena, the CSV matcher and the command-line layer.
 */

// =============================================================================
// ARENA
// =============================================================================

/// Default arena capacity (1MB)
/// Holds the buffered CSV, the key list and every matched destination
pub const DEFAULT_ARENA_CAPACITY: usize = 1024 * 1024;

/// Alignment of every arena allocation
/// Keeps list nodes (pointer-sized fields) naturally aligned
pub const ARENA_ALIGNMENT: usize = 8;

/// Environment variable overriding the arena capacity (bytes)
pub const ARENA_CAPACITY_ENV: &str = "BROCOPY_ARENA_SIZE";

// =============================================================================
// CSV MATCHING
// =============================================================================

/// Maximum number of keys accepted from the command line
/// Extra keys are dropped with a warning
pub const MAX_KEYS: usize = 1000;

/// Safety cap on rows produced by the match-all mode
/// Bounds output size against a malformed or oversized mapping file
pub const MAX_CSV_ROWS: usize = 1000;

/// Line terminator of the mapping file
pub const CSV_LINE_END: u8 = b'\n';

/// Field separator of the mapping file
pub const CSV_FIELD_SEP: u8 = b',';

/// Carriage return stripped from the end of path fields
pub const CSV_CARRIAGE_RETURN: u8 = b'\r';

// =============================================================================
// LOGGING
// =============================================================================

/// Separator written around each run in the log file
pub const LOG_SEP_LINE: &str = "==================================================";

/// Fallback log file name, placed next to the executable
pub const DEFAULT_LOG_FILE: &str = "brolog.txt";

/// Environment variable switching the log file layer to JSON
pub const LOG_JSON_ENV: &str = "BROCOPY_LOG_JSON";
