/*!
 * Arena Types
 * Errors and statistics shared by the arena and its scratch regions
 */

use miette::Diagnostic;
use thiserror::Error;

/// Arena operation result
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Arena errors
///
/// Every variant leaves the arena exactly as it was before the request.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ArenaError {
    #[error("Arena out of space: requested {requested} bytes, available {available} bytes ({capacity} total)")]
    #[diagnostic(
        code(arena::out_of_space),
        help("Raise the arena capacity (BROCOPY_ARENA_SIZE) or shrink the mapping file.")
    )]
    OutOfSpace {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    #[error("Scratch level {requested_level} used while level {active_level} is active")]
    #[diagnostic(
        code(arena::scratch_active),
        help("Allocate through the innermost scratch region, or restore it first.")
    )]
    ScratchActive {
        requested_level: u32,
        active_level: u32,
    },

    #[error("Invalid allocation layout: size {size}, alignment {align}")]
    #[diagnostic(code(arena::bad_layout))]
    BadLayout { size: usize, align: usize },
}

/// Arena usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    pub capacity: usize,
    pub used: usize,
    pub available: usize,
    /// Highest cursor position reached since creation or the last reset
    pub high_water: usize,
    pub allocations: usize,
    /// Nesting depth of live scratch regions
    pub scratch_depth: u32,
}

impl ArenaStats {
    /// Percentage of capacity in use
    pub fn usage_percentage(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.used as f64 / self.capacity as f64) * 100.0
    }
}
