//! src/stream/read.rs
//! Readable-stream side of `Rot13<S>`.

use crate::cipher::rot13_bytes;
use crate::stream::filter::Rot13;
use std::io::{self, Read};

impl<R: Read> Read for Rot13<R> {
    /// Reads into `buf` from the inner reader, then rotates `buf[..n]`.
    ///
    /// `buf[n..]` is left untouched. Short reads, `Ok(0)` and errors are
    /// returned exactly as the inner reader produced them.
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.get_mut().read(buf)?;
        rot13_bytes(&mut buf[..n]);
        Ok(n)
    }
}
