#[cfg(feature = "batch-ops")]
use rayon::prelude::*;
#[cfg(feature = "batch-ops")]
use std::io::{Read, Write};

#[cfg(feature = "batch-ops")]
use crate::{rot13_stream, Rot13Error};

/// Run [`rot13_stream`] over independent `(source, destination)` pairs in parallel.
///
/// Each pair is processed on one thread with its own adapter. If any pair
/// fails, one of the errors is returned; other pairs may already be written.
#[cfg(feature = "batch-ops")]
pub fn rot13_batch<R, W>(batch: &mut [(R, W)]) -> Result<(), Rot13Error>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| rot13_stream(src, dst).map(|_| ()))
}
