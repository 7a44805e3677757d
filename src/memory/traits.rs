/*!
 * Arena Traits
 * Allocation interface shared by the arena and its scratch regions
 */

use super::arena::Arena;
use super::types::*;
use crate::core::limits::ARENA_ALIGNMENT;
use std::mem;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::memory::Arena {}
    impl Sealed for crate::memory::Scratch<'_> {}
}

/// Bump allocation through an arena handle
///
/// Implemented by [`Arena`] (level 0) and by every live [`Scratch`](super::Scratch).
/// Only the innermost handle may allocate; any other handle gets
/// [`ArenaError::ScratchActive`]. Returned memory is zeroed and stays valid
/// for as long as the handle is borrowed.
///
/// The trait is sealed: soundness depends on the level bookkeeping of the
/// two implementors.
pub trait ArenaAlloc: sealed::Sealed {
    /// Arena backing this handle
    fn arena(&self) -> &Arena;

    /// Nesting level of this handle (0 for the arena itself)
    fn level(&self) -> u32;

    /// Allocate `size` zeroed bytes, 8-byte aligned
    fn allocate(&self, size: usize) -> ArenaResult<&mut [u8]> {
        let ptr = self.arena().bump(self.level(), size, ARENA_ALIGNMENT)?;
        // SAFETY: `bump` returned a zeroed region of exactly `size` bytes
        // inside the arena that is not handed out again while `self` is borrowed
        Ok(unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr(), size) })
    }

    /// Move a value into the arena
    ///
    /// The value's destructor never runs.
    fn alloc_value<T>(&self, value: T) -> ArenaResult<&mut T> {
        let ptr = self
            .arena()
            .bump(self.level(), mem::size_of::<T>(), mem::align_of::<T>())?
            .cast::<T>();
        // SAFETY: region is sized and aligned for `T` and exclusively ours
        unsafe {
            ptr.as_ptr().write(value);
            Ok(&mut *ptr.as_ptr())
        }
    }

    /// Copy bytes into a fresh arena region
    fn alloc_copy(&self, bytes: &[u8]) -> ArenaResult<&mut [u8]> {
        let dst = self.allocate(bytes.len())?;
        dst.copy_from_slice(bytes);
        Ok(dst)
    }

    /// Bytes left before the arena is full
    fn remaining(&self) -> usize {
        self.arena().remaining()
    }
}
