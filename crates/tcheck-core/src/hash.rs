//! SHA-256 digests of file contents.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::{codes, CheckError};

/// Streams the file through SHA-256 and returns the hex digest.
pub fn file_digest(path: &Path, chunk_size: usize) -> Result<String, CheckError> {
    let mut file = File::open(path).map_err(|err| CheckError::io(codes::FILE_OPEN, path, &err))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = file
            .read(&mut buf)
            .map_err(|err| CheckError::io(codes::FILE_READ, path, &err))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
