/*!
 * Scratch Regions
 * Checkpoint/restore over an arena with stack discipline
 */

use super::arena::Arena;
use super::traits::ArenaAlloc;
use super::types::*;

/// Saved arena cursor
///
/// Everything allocated through the scratch is released when it is restored
/// (explicitly or on drop); allocations made before the checkpoint stay
/// valid. Nested scratches borrow their parent, so they are always restored
/// last-taken-first. While a scratch is live, the arena and any outer
/// scratch refuse to allocate.
///
/// # Example
///
/// ```
/// use brocopy::memory::{Arena, ArenaAlloc};
///
/// let arena = Arena::new(256).unwrap();
/// let before = arena.position();
///
/// let scratch = arena.checkpoint().unwrap();
/// scratch.allocate(100).unwrap();
/// scratch.restore();
///
/// assert_eq!(arena.position(), before);
/// ```
#[derive(Debug)]
pub struct Scratch<'a> {
    arena: &'a Arena,
    origin: usize,
    level: u32,
}

impl<'a> Scratch<'a> {
    pub(crate) fn open(arena: &'a Arena, parent_level: u32) -> ArenaResult<Self> {
        let level = arena.enter(parent_level)?;
        Ok(Self {
            arena,
            origin: arena.position(),
            level,
        })
    }

    /// Cursor value captured when the scratch was opened
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Bytes allocated through this scratch (and its children) so far
    #[inline]
    pub fn used(&self) -> usize {
        self.arena.position() - self.origin
    }

    /// Open a nested scratch region
    pub fn checkpoint(&self) -> ArenaResult<Scratch<'_>> {
        Scratch::open(self.arena, self.level)
    }

    /// Reset the arena cursor to the captured origin
    pub fn restore(self) {}
}

impl ArenaAlloc for Scratch<'_> {
    #[inline]
    fn arena(&self) -> &Arena {
        self.arena
    }

    #[inline]
    fn level(&self) -> u32 {
        self.level
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        self.arena.rewind(self.origin, self.level - 1);
    }
}
