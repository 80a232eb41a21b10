//! Byte-for-byte file comparison.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::trace;

use crate::errors::{codes, CheckError, ErrorInfo};

/// Outcome of [`compare_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileComparison {
    /// Both files hold the same bytes.
    Identical,
    /// The files differ in length.
    SizeMismatch {
        /// Length of the first file.
        left: u64,
        /// Length of the second file.
        right: u64,
    },
    /// The files have the same length but differ in content.
    ContentMismatch {
        /// Offset of the first chunk that differs.
        offset: u64,
    },
}

impl FileComparison {
    /// True for [`FileComparison::Identical`].
    pub fn is_identical(&self) -> bool {
        matches!(self, FileComparison::Identical)
    }
}

/// Checks that `path` names an existing regular file and returns its length.
pub fn regular_file_len(path: &Path) -> Result<u64, CheckError> {
    let meta = fs::metadata(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            CheckError::File(
                ErrorInfo::new(codes::FILE_NOT_FOUND, "file does not exist").with_path(path),
            )
        } else {
            CheckError::io(codes::FILE_STAT, path, &err)
        }
    })?;
    if meta.is_dir() {
        return Err(CheckError::File(
            ErrorInfo::new(codes::FILE_IS_DIRECTORY, "is a directory, not a file").with_path(path),
        ));
    }
    Ok(meta.len())
}

// Fills `buf` unless end of file is reached first.
fn read_chunk(file: &mut File, path: &Path, buf: &mut [u8]) -> Result<usize, CheckError> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(CheckError::io(codes::FILE_READ, path, &err)),
        }
    }
    Ok(filled)
}

/// Compares two files chunk by chunk.
///
/// The chunk size is capped at the file length, so small files are read in a
/// single pass.
pub fn compare_files(
    left: &Path,
    right: &Path,
    chunk_size: usize,
) -> Result<FileComparison, CheckError> {
    let left_len = regular_file_len(left)?;
    let right_len = regular_file_len(right)?;
    trace!(left = %left.display(), right = %right.display(), left_len, right_len, "comparing files");
    if left_len != right_len {
        return Ok(FileComparison::SizeMismatch {
            left: left_len,
            right: right_len,
        });
    }

    let mut left_file =
        File::open(left).map_err(|err| CheckError::io(codes::FILE_OPEN, left, &err))?;
    let mut right_file =
        File::open(right).map_err(|err| CheckError::io(codes::FILE_OPEN, right, &err))?;

    let size = usize::try_from(left_len)
        .unwrap_or(usize::MAX)
        .min(chunk_size.max(1))
        .max(1);
    let mut left_buf = vec![0u8; size];
    let mut right_buf = vec![0u8; size];
    let mut offset = 0u64;
    loop {
        let n_left = read_chunk(&mut left_file, left, &mut left_buf)?;
        let n_right = read_chunk(&mut right_file, right, &mut right_buf)?;
        if n_left == 0 && n_right == 0 {
            return Ok(FileComparison::Identical);
        }
        if left_buf[..n_left] != right_buf[..n_right] {
            trace!(offset, "chunk differs");
            return Ok(FileComparison::ContentMismatch { offset });
        }
        offset += n_left as u64;
    }
}
