//! Structured error types shared across tcheck crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CheckError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, sizes, patterns, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Adds the offending path as context.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display().to_string())
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for tcheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CheckError {
    /// A value could not be captured for comparison.
    #[error("value error: {0}")]
    Value(ErrorInfo),
    /// A pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(ErrorInfo),
    /// File system failures while inspecting or comparing files.
    #[error("file error: {0}")]
    File(ErrorInfo),
    /// Invalid or unreadable settings.
    #[error("settings error: {0}")]
    Settings(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CheckError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CheckError::Value(info)
            | CheckError::Pattern(info)
            | CheckError::File(info)
            | CheckError::Settings(info) => info,
        }
    }

    /// Wraps an I/O error raised while touching `path`.
    pub fn io(code: &str, path: &Path, err: &std::io::Error) -> Self {
        CheckError::File(
            ErrorInfo::new(code, err.to_string())
                .with_path(path)
                .with_context("kind", format!("{:?}", err.kind())),
        )
    }

    /// Returns true when the error describes a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CheckError::File(info) if info.code == codes::FILE_NOT_FOUND)
    }

    /// Returns true when the error describes a directory where a file was expected.
    pub fn is_directory(&self) -> bool {
        matches!(self, CheckError::File(info) if info.code == codes::FILE_IS_DIRECTORY)
    }
}

impl serde::ser::Error for CheckError {
    fn custom<T: Display>(msg: T) -> Self {
        CheckError::Value(ErrorInfo::new(codes::VALUE_CUSTOM, msg.to_string()))
    }
}

/// Stable error codes.
pub mod codes {
    /// A `Serialize` implementation reported its own error.
    pub const VALUE_CUSTOM: &str = "tcheck.value.custom";
    /// The value uses a kind with no [`crate::Value`] counterpart.
    pub const VALUE_UNSUPPORTED: &str = "tcheck.value.unsupported";
    /// A map key was emitted without a value, or the reverse.
    pub const VALUE_MAP_SHAPE: &str = "tcheck.value.map_shape";
    /// The pattern source does not compile.
    pub const PATTERN_INVALID: &str = "tcheck.pattern.invalid";
    /// The path does not exist.
    pub const FILE_NOT_FOUND: &str = "tcheck.file.not_found";
    /// The path names a directory.
    pub const FILE_IS_DIRECTORY: &str = "tcheck.file.is_directory";
    /// Stat on the path failed for a reason other than absence.
    pub const FILE_STAT: &str = "tcheck.file.stat";
    /// Opening the file failed.
    pub const FILE_OPEN: &str = "tcheck.file.open";
    /// Reading the file failed.
    pub const FILE_READ: &str = "tcheck.file.read";
    /// Settings payload could not be parsed.
    pub const SETTINGS_PARSE: &str = "tcheck.settings.parse";
    /// A settings value is out of range.
    pub const SETTINGS_INVALID: &str = "tcheck.settings.invalid";
}
