// src/lib.rs

#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod copy;
pub mod error;
pub mod file_ops;
pub mod stream;

// Transform primitives
pub use cipher::{rot13, rot13_bytes, rot13_char, rot13_chars, rot13_str};

// Adapters: wrap any Read / Write / CharRead
pub use stream::{new_char_reader, new_reader, new_writer, CharRead, Rot13, Utf8CharReader};

pub use builders::StreamConfig;
pub use copy::{rot13_stream, rot13_stream_with_config};
pub use error::Rot13Error;
pub use file_ops::{rot13_file, rot13_file_with_config};

#[cfg(feature = "batch-ops")]
pub use batch_ops::rot13_batch;
