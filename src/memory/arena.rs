/*!
 * Arena Allocation
 * Fixed-capacity bump allocation with O(1) bulk release
 */

use super::scratch::Scratch;
use super::traits::ArenaAlloc;
use super::types::*;
use crate::core::limits::ARENA_ALIGNMENT;
use std::alloc::{self, Layout};
use std::cell::Cell;
use std::fmt;
use std::ptr::{self, NonNull};
use tracing::trace;

/// Fixed-capacity bump allocator
///
/// Owns one contiguous, 8-byte aligned block of `capacity` bytes. Allocations
/// advance a cursor and are never freed individually; [`Arena::checkpoint`]
/// releases everything allocated after it, [`Arena::reset`] releases it all.
///
/// # Performance
///
/// - **Allocation**: O(1), aligns and bumps the cursor
/// - **Restore/reset**: O(1), only the cursor moves
/// - **No growth**: a request that does not fit fails and leaves the arena untouched
///
/// # Example
///
/// ```
/// use brocopy::memory::{Arena, ArenaAlloc};
///
/// let arena = Arena::new(1024).unwrap();
/// let header = arena.alloc_copy(b"key,path").unwrap();
/// {
///     let scratch = arena.checkpoint().unwrap();
///     let tmp = scratch.allocate(512).unwrap();
///     assert_eq!(tmp.len(), 512);
/// } // scratch restored here
/// assert_eq!(header, b"key,path");
/// ```
pub struct Arena {
    base: NonNull<u8>,
    capacity: usize,
    cursor: Cell<usize>,
    depth: Cell<u32>,
    high_water: Cell<usize>,
    allocations: Cell<usize>,
}

impl Arena {
    /// Create an arena owning `capacity` zeroed bytes
    pub fn new(capacity: usize) -> ArenaResult<Self> {
        let base = if capacity == 0 {
            NonNull::<u64>::dangling().cast::<u8>()
        } else {
            let layout = Self::layout(capacity)?;
            // SAFETY: layout has non-zero size
            let raw = unsafe { alloc::alloc_zeroed(layout) };
            NonNull::new(raw).ok_or(ArenaError::OutOfSpace {
                requested: capacity,
                available: 0,
                capacity: 0,
            })?
        };

        Ok(Self {
            base,
            capacity,
            cursor: Cell::new(0),
            depth: Cell::new(0),
            high_water: Cell::new(0),
            allocations: Cell::new(0),
        })
    }

    fn layout(capacity: usize) -> ArenaResult<Layout> {
        Layout::from_size_align(capacity, ARENA_ALIGNMENT).map_err(|_| ArenaError::BadLayout {
            size: capacity,
            align: ARENA_ALIGNMENT,
        })
    }

    /// Total bytes owned by the arena
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current cursor offset
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.get()
    }

    /// Bytes between the cursor and the end of the buffer
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.cursor.get()
    }

    /// Usage snapshot
    pub fn stats(&self) -> ArenaStats {
        let used = self.cursor.get();
        ArenaStats {
            capacity: self.capacity,
            used,
            available: self.capacity - used,
            high_water: self.high_water.get(),
            allocations: self.allocations.get(),
            scratch_depth: self.depth.get(),
        }
    }

    /// Offset of `bytes` inside the arena, if they live in it
    pub fn offset_of(&self, bytes: &[u8]) -> Option<usize> {
        let start = self.base.as_ptr() as usize;
        let addr = bytes.as_ptr() as usize;
        let end = addr.checked_add(bytes.len())?;
        (addr >= start && end <= start + self.capacity).then(|| addr - start)
    }

    /// Open a scratch region at the current cursor
    ///
    /// Fails with [`ArenaError::ScratchActive`] while another scratch region
    /// of this arena is live.
    pub fn checkpoint(&self) -> ArenaResult<Scratch<'_>> {
        Scratch::open(self, 0)
    }

    /// Release every allocation
    ///
    /// Equivalent to restoring a checkpoint taken at creation time. The
    /// exclusive borrow guarantees no slice into the arena survives.
    pub fn reset(&mut self) {
        self.cursor.set(0);
        self.depth.set(0);
        self.high_water.set(0);
        self.allocations.set(0);
    }

    /// Bump the cursor for a `size`-byte region aligned to at least 8
    ///
    /// Only a handle at the active nesting level may allocate, which keeps
    /// every region handed out below the cursor of any live scratch.
    pub(crate) fn bump(&self, level: u32, size: usize, align: usize) -> ArenaResult<NonNull<u8>> {
        let active = self.depth.get();
        if level != active {
            return Err(ArenaError::ScratchActive {
                requested_level: level,
                active_level: active,
            });
        }

        let align = align.max(ARENA_ALIGNMENT);
        if !align.is_power_of_two() {
            return Err(ArenaError::BadLayout { size, align });
        }

        let cursor = self.cursor.get();
        let base_addr = self.base.as_ptr() as usize;
        let start = base_addr
            .checked_add(cursor)
            .and_then(|addr| addr.checked_add(align - 1))
            .map(|addr| (addr & !(align - 1)) - base_addr);
        let end = start.and_then(|start| start.checked_add(size));

        match (start, end) {
            (Some(start), Some(end)) if end <= self.capacity => {
                // SAFETY: start..end lies within the owned block
                let ptr = unsafe {
                    let ptr = self.base.as_ptr().add(start);
                    ptr::write_bytes(ptr, 0, size);
                    NonNull::new_unchecked(ptr)
                };
                self.cursor.set(end);
                self.allocations.set(self.allocations.get() + 1);
                if end > self.high_water.get() {
                    self.high_water.set(end);
                }
                Ok(ptr)
            }
            _ => {
                trace!(
                    requested = size,
                    cursor = cursor,
                    capacity = self.capacity,
                    "arena allocation refused"
                );
                Err(ArenaError::OutOfSpace {
                    requested: size,
                    available: self.remaining(),
                    capacity: self.capacity,
                })
            }
        }
    }

    /// Move the cursor back to `origin` and make `level` the active level
    pub(crate) fn rewind(&self, origin: usize, level: u32) {
        debug_assert!(origin <= self.capacity);
        self.cursor.set(origin);
        self.depth.set(level);
    }

    /// Mark a new scratch level as active
    pub(crate) fn enter(&self, parent_level: u32) -> ArenaResult<u32> {
        let active = self.depth.get();
        if active != parent_level {
            return Err(ArenaError::ScratchActive {
                requested_level: parent_level,
                active_level: active,
            });
        }
        self.depth.set(parent_level + 1);
        Ok(parent_level + 1)
    }
}

impl ArenaAlloc for Arena {
    #[inline]
    fn arena(&self) -> &Arena {
        self
    }

    #[inline]
    fn level(&self) -> u32 {
        0
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.capacity) {
            // SAFETY: allocated in `new` with this exact layout
            unsafe { alloc::dealloc(self.base.as_ptr(), layout) };
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("cursor", &self.cursor.get())
            .field("depth", &self.depth.get())
            .finish()
    }
}
