/*!
 * Memory Module
 *
 * Arena allocation for the whole run:
 * - Fixed-capacity bump allocator owning one buffer
 * - Scratch regions for temporary allocations released in O(1)
 *
 * # Use Cases
 *
 * - **Arena**: the buffered CSV, key lists and matched destinations
 * - **Scratch**: short-lived formatting (log banners, path rendering)
 */

mod arena;
mod scratch;
pub mod traits;
pub mod types;

pub use arena::Arena;
pub use scratch::Scratch;
pub use traits::ArenaAlloc;
pub use types::*;
