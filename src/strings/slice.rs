/*!
 * String Slices
 * Non-owning byte views with clamping scan and slicing primitives
 */

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::path::PathBuf;

/// Fold an ASCII uppercase letter to lowercase by setting bit 5
///
/// 'A' = 0b0100_0001, 'a' = 0b0110_0001. Any other byte is returned as is,
/// so this is not a general case-folding routine.
#[inline(always)]
pub const fn ascii_lower(byte: u8) -> u8 {
    byte | ((byte.is_ascii_uppercase() as u8) << 5)
}

/// Non-owning view over bytes owned by an arena or by the caller
///
/// Slicing never copies and never fails: every length argument is clamped
/// to the view. Searches return `len()` when nothing is found.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrSlice<'a> {
    bytes: &'a [u8],
}

impl<'a> StrSlice<'a> {
    /// Empty slice
    #[inline]
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// View over a whole fixed-size buffer
    #[inline]
    pub const fn from_buf(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// View over a string's bytes
    #[inline]
    pub const fn new(s: &'a str) -> Self {
        Self { bytes: s.as_bytes() }
    }

    /// View up to the first NUL byte (the whole buffer if there is none)
    pub fn from_nul_terminated(bytes: &'a [u8]) -> Self {
        let all = Self::from_buf(bytes);
        all.prefix(all.index_of(0))
    }

    /// View over a C string, terminator excluded
    #[inline]
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self { bytes: s.to_bytes() }
    }

    /// View over the first `len` bytes of `bytes`, clamped
    #[inline]
    pub fn with_len(bytes: &'a [u8], len: usize) -> Self {
        Self::from_buf(bytes).prefix(len)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte-exact equality
    #[inline]
    pub fn equals(&self, other: StrSlice<'_>) -> bool {
        self.bytes == other.bytes
    }

    /// Equality with ASCII letters folded to lowercase
    pub fn equals_insensitive(&self, other: StrSlice<'_>) -> bool {
        self.len() == other.len()
            && self
                .bytes
                .iter()
                .zip(other.bytes)
                .all(|(&a, &b)| ascii_lower(a) == ascii_lower(b))
    }

    /// True if both are at least `n` bytes long and their first `n` bytes match
    pub fn match_prefix(&self, other: StrSlice<'_>, n: usize) -> bool {
        self.len() >= n && other.len() >= n && self.bytes[..n] == other.bytes[..n]
    }

    /// [`match_prefix`](Self::match_prefix) with ASCII case folding
    pub fn match_prefix_insensitive(&self, other: StrSlice<'_>, n: usize) -> bool {
        self.len() >= n
            && other.len() >= n
            && self.bytes[..n]
                .iter()
                .zip(&other.bytes[..n])
                .all(|(&a, &b)| ascii_lower(a) == ascii_lower(b))
    }

    /// Offset of the first `byte`, or `len()` if absent
    #[inline]
    pub fn index_of(&self, byte: u8) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == byte)
            .unwrap_or(self.len())
    }

    /// Offset of the last `byte`, or `len()` if absent
    #[inline]
    pub fn last_index_of(&self, byte: u8) -> usize {
        self.bytes
            .iter()
            .rposition(|&b| b == byte)
            .unwrap_or(self.len())
    }

    /// Offset of the first occurrence of `needle`, or `len()`
    ///
    /// An empty needle is never found.
    pub fn index_of_substr(&self, needle: StrSlice<'_>) -> usize {
        if needle.is_empty() || needle.len() > self.len() {
            return self.len();
        }
        self.bytes
            .windows(needle.len())
            .position(|window| window == needle.bytes)
            .unwrap_or(self.len())
    }

    /// Offset of the last occurrence of `needle`, or `len()`
    pub fn last_index_of_substr(&self, needle: StrSlice<'_>) -> usize {
        if needle.is_empty() || needle.len() > self.len() {
            return self.len();
        }
        self.bytes
            .windows(needle.len())
            .rposition(|window| window == needle.bytes)
            .unwrap_or(self.len())
    }

    /// Drop the first `n` bytes
    #[inline]
    pub fn skip(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self {
            bytes: &self.bytes[n..],
        }
    }

    /// Keep the first `n` bytes
    #[inline]
    pub fn prefix(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self {
            bytes: &self.bytes[..n],
        }
    }

    /// Keep the last `n` bytes
    #[inline]
    pub fn suffix_of_length(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self {
            bytes: &self.bytes[self.len() - n..],
        }
    }

    /// Lossy UTF-8 view, borrowed when already valid
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Owned path from the raw bytes
    #[cfg(unix)]
    pub fn to_path_buf(&self) -> PathBuf {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(self.bytes))
    }

    /// Owned path from the raw bytes
    #[cfg(not(unix))]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_string_lossy().into_owned())
    }
}

impl<'a> From<&'a str> for StrSlice<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a [u8]> for StrSlice<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_buf(bytes)
    }
}

impl PartialEq<str> for StrSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StrSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Debug for StrSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for StrSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
