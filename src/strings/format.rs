/*!
 * Arena Formatting
 * Render text into arena memory with a guaranteed NUL terminator
 */

use super::slice::StrSlice;
use crate::memory::{ArenaAlloc, ArenaResult};
use std::ffi::CStr;
use std::fmt::{self, Write};

/// Arena text followed by a NUL byte
///
/// The terminator sits right after the visible bytes, so the backing memory
/// can be handed to APIs that expect a C string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NulStr<'a> {
    with_nul: &'a [u8],
}

impl<'a> NulStr<'a> {
    /// Visible text, terminator excluded
    #[inline]
    pub fn as_slice(&self) -> StrSlice<'a> {
        StrSlice::from_buf(&self.with_nul[..self.with_nul.len() - 1])
    }

    #[inline]
    pub fn as_bytes_with_nul(&self) -> &'a [u8] {
        self.with_nul
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.with_nul.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// C string view; `None` if the text itself contains a NUL
    pub fn to_cstr(&self) -> Option<&'a CStr> {
        CStr::from_bytes_with_nul(self.with_nul).ok()
    }
}

impl<'a> From<NulStr<'a>> for StrSlice<'a> {
    fn from(s: NulStr<'a>) -> Self {
        s.as_slice()
    }
}

impl fmt::Debug for NulStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_slice(), f)
    }
}

impl fmt::Display for NulStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_slice(), f)
    }
}

/// Counts rendered bytes without storing them
struct LenCounter(usize);

impl Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes into a fixed buffer, dropping whatever does not fit
struct TruncatingWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.pos;
        let n = s.len().min(room);
        self.buf[self.pos..self.pos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.pos += n;
        Ok(())
    }
}

/// Render `args` into fresh arena memory
///
/// Two passes: the first measures, the second writes into a `len + 1`
/// region whose last byte stays zero.
pub fn format_into_arena<'a, A>(arena: &'a A, args: fmt::Arguments<'_>) -> ArenaResult<NulStr<'a>>
where
    A: ArenaAlloc + ?Sized,
{
    let mut counter = LenCounter(0);
    // LenCounter never fails; an error here comes from a Display impl
    let _ = counter.write_fmt(args);

    let buf = arena.allocate(counter.0 + 1)?;
    let mut writer = TruncatingWriter {
        buf: &mut buf[..counter.0],
        pos: 0,
    };
    let _ = writer.write_fmt(args);

    Ok(NulStr { with_nul: buf })
}

/// Copy `s` into the arena, NUL-terminated
pub fn copy_in<'a, A>(arena: &'a A, s: StrSlice<'_>) -> ArenaResult<NulStr<'a>>
where
    A: ArenaAlloc + ?Sized,
{
    let buf = arena.allocate(s.len() + 1)?;
    buf[..s.len()].copy_from_slice(s.as_bytes());
    Ok(NulStr { with_nul: buf })
}

/// Concatenate two slices into the arena, NUL-terminated
pub fn concat_in<'a, A>(arena: &'a A, lhs: StrSlice<'_>, rhs: StrSlice<'_>) -> ArenaResult<NulStr<'a>>
where
    A: ArenaAlloc + ?Sized,
{
    let total = lhs.len() + rhs.len();
    let buf = arena.allocate(total + 1)?;
    buf[..lhs.len()].copy_from_slice(lhs.as_bytes());
    buf[lhs.len()..total].copy_from_slice(rhs.as_bytes());
    Ok(NulStr { with_nul: buf })
}

/// Render `args` into a caller buffer, truncating to fit
///
/// The buffer is always NUL-terminated when non-empty. Returns the number of
/// bytes written before the terminator.
pub fn write_into(buf: &mut [u8], args: fmt::Arguments<'_>) -> usize {
    let Some(limit) = buf.len().checked_sub(1) else {
        return 0;
    };
    let mut writer = TruncatingWriter {
        buf: &mut buf[..limit],
        pos: 0,
    };
    let _ = writer.write_fmt(args);
    let written = writer.pos;
    buf[written] = 0;
    written
}

/// Format into an arena, like `format!`
///
/// ```
/// use brocopy::{arena_format, memory::Arena};
///
/// let arena = Arena::new(128).unwrap();
/// let s = arena_format!(&arena, "{}/{}", "dir", 7).unwrap();
/// assert_eq!(s.as_slice(), "dir/7");
/// assert_eq!(s.as_bytes_with_nul(), b"dir/7\0");
/// ```
#[macro_export]
macro_rules! arena_format {
    ($arena:expr, $($arg:tt)*) => {
        $crate::strings::format_into_arena($arena, format_args!($($arg)*))
    };
}
