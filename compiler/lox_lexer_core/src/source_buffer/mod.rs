//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner can detect end of input without explicit bounds checks.
//! The total buffer size is rounded up to the next 64-byte boundary.

use crate::cursor::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Largest input, in bytes, that [`scan`](crate::scan) handles in full.
///
/// Byte offsets and the source length are stored as `u32`. Callers reading
/// from disk should reject anything longer before scanning.
pub const MAX_SOURCE_LEN: u32 = u32::MAX;

/// Sentinel-terminated copy of one input text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// A fresh buffer is built for every scan; nothing is shared between scans.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Text beyond [`MAX_SOURCE_LEN`] bytes is not buffered. The cut lands on
    /// a character boundary, so the buffered prefix is still valid UTF-8.
    pub fn new(source: &str) -> Self {
        let mut content_len = source.len().min(MAX_SOURCE_LEN as usize);
        while !source.is_char_boundary(content_len) {
            content_len -= 1;
        }
        let source_len = u32::try_from(content_len).unwrap_or(MAX_SOURCE_LEN);

        // Content plus at least one sentinel byte, rounded up to a cache line.
        let padded_len = (content_len + 1).next_multiple_of(CACHE_LINE);
        let mut buf = vec![0u8; padded_len];
        buf[..content_len].copy_from_slice(&source.as_bytes()[..content_len]);

        Self { buf, source_len }
    }

    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}
