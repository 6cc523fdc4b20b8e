//! src/stream/chars.rs
//! Character-oriented reading: the `CharRead` trait, a UTF-8 source for it,
//! and the `Rot13<S>` impl.

use crate::cipher::rot13_char;
use crate::stream::filter::Rot13;
use std::io::{self, ErrorKind, Read};

/// Longest UTF-8 encoding of a scalar value.
const MAX_UTF8_WIDTH: usize = 4;

/// A source of decoded Unicode scalar values.
pub trait CharRead {
    /// Reads one scalar value and the number of bytes it occupied in the
    /// underlying encoding.
    ///
    /// Returns `Ok(None)` at end of stream.
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>>;

    /// Reads every remaining scalar value and appends it to `buf`.
    ///
    /// Returns the number of chars appended. On error, chars read so far stay
    /// in `buf`.
    fn read_to_string(&mut self, buf: &mut String) -> io::Result<usize> {
        let mut count = 0;
        while let Some((ch, _)) = self.read_char()? {
            buf.push(ch);
            count += 1;
        }
        Ok(count)
    }
}

impl<C: CharRead + ?Sized> CharRead for &mut C {
    #[inline]
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>> {
        (**self).read_char()
    }
}

impl<C: CharRead + ?Sized> CharRead for Box<C> {
    #[inline]
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>> {
        (**self).read_char()
    }
}

impl<C: CharRead> CharRead for Rot13<C> {
    /// Delegates to the inner reader and rotates the scalar value.
    ///
    /// The width is passed through unchanged; end of stream and errors are
    /// returned exactly as the inner reader produced them.
    #[inline]
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>> {
        Ok(self
            .get_mut()
            .read_char()?
            .map(|(ch, width)| (rot13_char(ch), width)))
    }
}

/// Encoded width announced by a UTF-8 lead byte; 1 for ASCII and for bytes
/// that cannot start a sequence.
const fn sequence_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

/// Decodes UTF-8 from a byte reader, one scalar value at a time.
///
/// An invalid or truncated sequence yields `(U+FFFD, 1)` and skips exactly one
/// byte, so decoding always makes progress. Each call reads only as many
/// bytes as the lead byte announces, in small reads; wrap unbuffered sources
/// in a [`BufReader`](std::io::BufReader).
#[derive(Debug)]
pub struct Utf8CharReader<R> {
    inner: R,
    pending: [u8; MAX_UTF8_WIDTH],
    pending_len: usize,
}

impl<R: Read> Utf8CharReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: [0u8; MAX_UTF8_WIDTH],
            pending_len: 0,
        }
    }

    /// Unwrap, returning the byte reader.
    ///
    /// Bytes of an invalid sequence that were read but not yet returned are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads until `want` bytes are pending or the stream ends.
    fn fill_pending(&mut self, want: usize) -> io::Result<()> {
        while self.pending_len < want {
            match self.inner.read(&mut self.pending[self.pending_len..want]) {
                Ok(0) => break,
                Ok(n) => self.pending_len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn decode_pending(&self) -> (char, usize) {
        let bytes = &self.pending[..self.pending_len];
        let valid = match std::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        };
        match valid.chars().next() {
            Some(ch) => (ch, ch.len_utf8()),
            None => (char::REPLACEMENT_CHARACTER, 1),
        }
    }
}

impl<R: Read> CharRead for Utf8CharReader<R> {
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>> {
        self.fill_pending(1)?;
        if self.pending_len == 0 {
            return Ok(None);
        }
        self.fill_pending(sequence_width(self.pending[0]))?;

        let (ch, width) = self.decode_pending();
        self.pending.copy_within(width..self.pending_len, 0);
        self.pending_len -= width;
        Ok(Some((ch, width)))
    }
}
