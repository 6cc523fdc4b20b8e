//! src/builders/stream_config.rs
//! Chunking configuration for the stream copy helpers

use crate::consts::{DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::error::Rot13Error;

/// Settings for [`rot13_stream_with_config`](crate::rot13_stream_with_config)
/// and the file/batch helpers built on it.
///
/// Defaults to a [`DEFAULT_BUFFER_SIZE`] (8 KiB) chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    buffer_size: usize,
}

impl StreamConfig {
    /// Create config with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the chunk size used for each read.
    ///
    /// Not checked here; [`validate`](Self::validate) rejects values outside
    /// [`MIN_BUFFER_SIZE`]`..=`[`MAX_BUFFER_SIZE`].
    #[must_use]
    pub const fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Current chunk size
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn validate(&self) -> Result<(), Rot13Error> {
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&self.buffer_size) {
            return Err(Rot13Error::Config(format!(
                "buffer size {} outside {MIN_BUFFER_SIZE}..={MAX_BUFFER_SIZE}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new()
    }
}
