//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content.
//! The automaton's classifier maps the sentinel into the catch-all class,
//! so a scan that runs out of input lands in the reject/retract path
//! without any explicit end-of-input branch. The total buffer size is
//! rounded up to the next 64-byte boundary for cache-line alignment,
//! which also pads the tail with zeros so the scan loop's one-past-the-
//! sentinel advance stays in bounds.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Positions of interior null bytes found during construction.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Copies the source bytes into a cache-line-padded buffer with a
    /// `0x00` sentinel appended, and records the position of every
    /// interior null byte: to a cursor those read exactly like the
    /// sentinel, so the owning scanner needs the list to report them.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled, then copy the source in. The sentinel
        // (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let interior_nulls = find_interior_nulls(source_bytes);

        // Saturate for sources > 4 GiB; the owning scanner rejects those upstream.
        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len,
            interior_nulls,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Byte positions of interior null bytes in the source.
    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}

/// Find every null byte (U+0000) within the source content.
///
/// Uses `memchr` for SIMD-accelerated search instead of byte-at-a-time
/// iteration.
fn find_interior_nulls(source: &[u8]) -> Vec<u32> {
    memchr::memchr_iter(0, source)
        .filter_map(|pos| u32::try_from(pos).ok())
        .collect()
}

#[cfg(test)]
mod tests;
