//! Read position over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reading past the content yields the `0x00` sentinel instead of running
//! off the end, so the scanner's dispatch never needs a bounds check. A
//! `0x00` byte only means end of input once `pos` has reached `source_len`;
//! before that it is a NUL character in the text.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Content, then the sentinel and zero padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

// Fat slice pointer plus two offsets.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize) == Some(&0),
            "buffer has no sentinel at {source_len}"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` once the content is exhausted.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source_len && self.current() == 0
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Text between byte offset `start` and the cursor.
    ///
    /// Both ends must sit on character boundaries. The scanner only moves
    /// by ASCII bytes or whole characters, so this holds for every lexeme
    /// it takes; a split character is a scanner bug and trips the debug
    /// assertion. Release builds return `""` instead.
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        let end = self.pos.min(self.source_len) as usize;
        let bytes = &self.buf[(start as usize).min(end)..end];
        debug_assert!(
            std::str::from_utf8(bytes).is_ok(),
            "lexeme {start}..{end} splits a character"
        );
        std::str::from_utf8(bytes).unwrap_or_default()
    }

    /// Length of the UTF-8 sequence introduced by `lead`.
    ///
    /// Continuation and invalid lead bytes count as one byte.
    #[inline]
    fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over the whole character under the cursor.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        self.pos += Self::utf8_char_width(self.current());
    }

    /// Move onto the next `\n`, or to end of input if there is none.
    ///
    /// The newline stays unconsumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the offset is below source_len, a u32"
    )]
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let rest = &self.buf[self.pos as usize..self.source_len as usize];
        self.pos = match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos + offset as u32,
            None => self.source_len,
        };
    }
}
