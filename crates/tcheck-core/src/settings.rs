//! Rendering and I/O settings, loaded from JSON or the environment.

use std::env;

use serde::{Deserialize, Serialize};

use crate::diff::DEFAULT_MISMATCH_LIMIT;
use crate::errors::{codes, CheckError, ErrorInfo};

/// Environment variable overriding [`Settings::max_consecutive_mismatches`].
pub const ENV_MAX_MISMATCHES: &str = "TCHECK_MAX_MISMATCHES";
/// Environment variable overriding [`Settings::file_chunk_size`].
pub const ENV_FILE_CHUNK_SIZE: &str = "TCHECK_FILE_CHUNK_SIZE";

/// Knobs controlling how failures are rendered and files are read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Consecutive mismatching lines shown before a line diff is cut short.
    #[serde(default = "Settings::default_max_consecutive_mismatches")]
    pub max_consecutive_mismatches: usize,
    /// Upper bound on the read size used by file comparisons.
    #[serde(default = "Settings::default_file_chunk_size")]
    pub file_chunk_size: usize,
    /// Render text diffs with ANSI colours.
    #[serde(default = "Settings::default_colored_text_diff")]
    pub colored_text_diff: bool,
}

impl Settings {
    const fn default_max_consecutive_mismatches() -> usize {
        DEFAULT_MISMATCH_LIMIT
    }

    const fn default_file_chunk_size() -> usize {
        0x10000
    }

    const fn default_colored_text_diff() -> bool {
        true
    }

    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CheckError> {
        let settings: Settings = serde_json::from_slice(bytes).map_err(|err| {
            CheckError::Settings(ErrorInfo::new(codes::SETTINGS_PARSE, err.to_string()))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults overridden by `NO_COLOR`, [`ENV_MAX_MISMATCHES`] and
    /// [`ENV_FILE_CHUNK_SIZE`].
    pub fn from_env() -> Result<Self, CheckError> {
        let mut settings = Settings::default();
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            settings.colored_text_diff = false;
        }
        if let Some(limit) = read_env_usize(ENV_MAX_MISMATCHES)? {
            settings.max_consecutive_mismatches = limit;
        }
        if let Some(chunk) = read_env_usize(ENV_FILE_CHUNK_SIZE)? {
            settings.file_chunk_size = chunk;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values that would make checks meaningless.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.file_chunk_size == 0 {
            return Err(CheckError::Settings(
                ErrorInfo::new(codes::SETTINGS_INVALID, "file chunk size must be positive")
                    .with_context("file_chunk_size", "0"),
            ));
        }
        Ok(())
    }
}

fn read_env_usize(name: &str) -> Result<Option<usize>, CheckError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            CheckError::Settings(
                ErrorInfo::new(codes::SETTINGS_INVALID, "expected a non-negative integer")
                    .with_context("variable", name)
                    .with_context("value", raw),
            )
        }),
        Err(_) => Ok(None),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_consecutive_mismatches: Self::default_max_consecutive_mismatches(),
            file_chunk_size: Self::default_file_chunk_size(),
            colored_text_diff: Self::default_colored_text_diff(),
        }
    }
}
