//! # Builders
//!
//! ## Modules
//!
//! - [`stream_config`] - Chunk-size configuration for the copy helpers
//!
//! Builders start from the defaults in [`consts`](crate::consts) and are
//! checked once, when a helper starts using them.

pub mod stream_config;

pub use stream_config::StreamConfig;
