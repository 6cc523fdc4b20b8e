// src/stream/mod.rs

//! Streaming adapters.
//!
//! Core type: [`Rot13<S>`], a single decorator that rotates whatever crosses
//! the boundary of the stream it wraps. Which operations it offers depends on
//! `S`:
//! - `S: Read` → [`Read`](std::io::Read)
//! - `S: Write` → [`Write`](std::io::Write)
//! - `S: CharRead` → [`CharRead`]

pub(crate) mod chars;
pub(crate) mod filter;
pub(crate) mod read;
pub(crate) mod write;

pub use chars::{CharRead, Utf8CharReader};
pub use filter::{new_char_reader, new_reader, new_writer, Rot13};
