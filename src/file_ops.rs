//! src/file_ops.rs
//! File-to-file ROT13

use crate::builders::StreamConfig;
use crate::copy::rot13_stream_with_config;
use crate::error::Rot13Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Rotate the contents of `input` into `output` (created or truncated).
///
/// Fails with [`Rot13Error::SamePath`] when both paths name the same file,
/// since truncating the output would destroy the input first.
pub fn rot13_file(input: &Path, output: &Path) -> Result<u64, Rot13Error> {
    rot13_file_with_config(input, output, &StreamConfig::default())
}

/// [`rot13_file`] with an explicit chunk size.
pub fn rot13_file_with_config(
    input: &Path,
    output: &Path,
    config: &StreamConfig,
) -> Result<u64, Rot13Error> {
    config.validate()?;
    ensure_distinct(input, output)?;

    let source = BufReader::new(File::open(input)?);
    let destination = BufWriter::new(File::create(output)?);
    let bytes = rot13_stream_with_config(source, destination, config)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes,
        "rot13 file complete"
    );
    Ok(bytes)
}

fn ensure_distinct(input: &Path, output: &Path) -> Result<(), Rot13Error> {
    if input == output {
        return Err(Rot13Error::SamePath(input.to_path_buf()));
    }
    // Output may not exist yet; only an existing file can alias the input.
    if let (Ok(a), Ok(b)) = (input.canonicalize(), output.canonicalize()) {
        if a == b {
            return Err(Rot13Error::SamePath(a));
        }
    }
    Ok(())
}
