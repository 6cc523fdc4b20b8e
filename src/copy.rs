//! src/copy.rs
//! Whole-stream ROT13: drain a reader through the adapter into a writer

use crate::builders::StreamConfig;
use crate::error::Rot13Error;
use crate::stream::Rot13;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace};

/// Copy all of `source` into `destination`, rotating every ASCII letter.
///
/// Returns the number of bytes copied. The transform is its own inverse, so
/// the same call decodes.
///
/// ```
/// use rot13_rs::rot13_stream;
///
/// let mut out = Vec::new();
/// let n = rot13_stream(&b"Why did the chicken cross the road?"[..], &mut out).unwrap();
/// assert_eq!(n, 35);
/// assert_eq!(out, b"Jul qvq gur puvpxra pebff gur ebnq?");
/// ```
#[inline]
pub fn rot13_stream<R, W>(source: R, destination: W) -> Result<u64, Rot13Error>
where
    R: Read,
    W: Write,
{
    rot13_stream_with_config(source, destination, &StreamConfig::default())
}

/// [`rot13_stream`] with an explicit chunk size.
///
/// Short writes are drained with `write_all`; `Interrupted` reads are retried.
/// Any other error from either side stops the copy and is returned as
/// [`Rot13Error::Io`] holding the original error.
pub fn rot13_stream_with_config<R, W>(
    source: R,
    mut destination: W,
    config: &StreamConfig,
) -> Result<u64, Rot13Error>
where
    R: Read,
    W: Write,
{
    config.validate()?;

    let mut reader = Rot13::new(source);
    let mut chunk = vec![0u8; config.buffer_size()];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        destination.write_all(&chunk[..n])?;
        total += n as u64;
        trace!(chunk = n, total, "rotated chunk");
    }

    destination.flush()?;
    debug!(bytes = total, buffer_size = config.buffer_size(), "rot13 stream complete");
    Ok(total)
}
