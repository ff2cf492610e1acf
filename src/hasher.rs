//! Streaming content digests.
//!
//! Files are streamed through the digest so memory use does not depend on file size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{FccError, Result};

/// Compute the SHA-256 digest of a file's content as lowercase hex.
///
/// # Errors
/// Returns `FccError::FileAccess` if the file cannot be opened or a read fails mid-stream.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file_access = |source| FccError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    hash_reader(file).map_err(file_access)
}

/// Digest everything `reader` yields. Interrupted reads are retried.
fn hash_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
pub(crate) fn compute_hash_from_bytes(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

#[cfg(test)]
#[path = "hasher_tests.rs"]
mod tests;
