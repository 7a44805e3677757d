/*!
 * Core Module
 * Error handling and shared limits
 */

pub mod errors;
pub mod limits;

// Re-export for convenience
pub use errors::*;
