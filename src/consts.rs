//! # Constants
//!
//! This module defines the rotation parameters and the buffer-size limits used
//! by the stream copy helpers.

/// Number of alphabet positions each ASCII letter is rotated by.
///
/// Fixed at `13` so that the transform is its own inverse.
pub const ROT13_SHIFT: u8 = 13;

/// Number of letters in the ASCII alphabet (per case).
pub const ALPHABET_LEN: u8 = 26;

/// Default chunk size for [`rot13_stream`](crate::rot13_stream).
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Smallest accepted chunk size.
pub const MIN_BUFFER_SIZE: usize = 1;

/// Largest accepted chunk size (16 MiB).
///
/// Values above this will be rejected during [`StreamConfig`](crate::StreamConfig) validation.
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;
