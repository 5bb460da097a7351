//! Loading snapshots from the file system.
//!
//! Files whose name ends in `.gz` are decompressed transparently; any other
//! file is read as-is. The whole buffer is loaded before decoding begins.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::{self, File},
    io::{self, Read},
    path::Path,
    vec::Vec,
};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::{avec::slice, state::RobotState};

/// Errors occurring while decoding a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read or decompressed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The loaded buffer is not a valid snapshot.
    #[error("Could not decode robot state: {0}")]
    Decode(#[from] slice::Error),
}

/// Whether a path names a gzip-compressed snapshot.
pub fn is_compressed(path: &Path) -> bool {
    path.as_os_str().as_encoded_bytes().ends_with(b".gz")
}

/// Load the full contents of a snapshot file, decompressing if necessary.
pub fn load(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let compressed = is_compressed(path);

    let data = if compressed {
        let mut data = Vec::new();
        GzDecoder::new(File::open(path)?).read_to_end(&mut data)?;
        data
    } else {
        fs::read(path)?
    };

    debug!(path = %path.display(), compressed, size = data.len(), "Loaded robot state buffer.");

    Ok(data)
}

/// Load and decode a snapshot file.
pub fn decode_file(path: impl AsRef<Path>) -> Result<RobotState, Error> {
    let data = load(path)?;

    Ok(slice::decode(&data)?)
}
