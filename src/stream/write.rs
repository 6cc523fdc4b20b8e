//! src/stream/write.rs
//! Writable-stream side of `Rot13<S>`.

use crate::cipher::rot13;
use crate::stream::filter::Rot13;
use std::io::{self, Write};

impl<W: Write> Write for Rot13<W> {
    /// Rotates a copy of `buf` and hands it to the inner writer in one call.
    ///
    /// The caller's buffer is never modified. The returned count is the inner
    /// writer's count, so a short write is reported as-is and never retried.
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let rotated: Vec<u8> = buf.iter().map(|&b| rot13(b)).collect();
        self.get_mut().write(&rotated)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.get_mut().flush()
    }
}
