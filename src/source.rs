//! # Byte Sources
//!
//! Helpers that load raw bytes for the scanner from disk, either plain or
//! gzip-compressed. These are collaborators of the core, not part of it:
//! they only produce bytes, and the scanner accepts anything implementing
//! [`Read`].
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Read the full contents of a plain file into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Open a gzip-compressed file as a streaming byte source, decompressing
/// on the fly. The scanner never needs seeking, so the decoder can feed it
/// directly.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. A corrupt gzip stream
/// surfaces later, as a read failure from the returned decoder.
pub fn open_gzip(path: impl AsRef<Path>) -> Result<GzDecoder<File>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(GzDecoder::new(file))
}

/// Read and decompress the full contents of a gzip-compressed file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid gzip
/// stream.
pub fn read_gzip(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut decoder = open_gzip(path)?;
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .with_context(|| format!("failed to decompress {}", path.display()))?;
    log::debug!("decompressed {} bytes from {}", data.len(), path.display());
    Ok(data)
}
