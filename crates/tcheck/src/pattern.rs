//! Regex arguments for `check_matches`.

use std::borrow::Cow;

use regex::Regex;
use tcheck_core::errors::codes;
use tcheck_core::{CheckError, ErrorInfo};

/// Pattern accepted by `check_matches`: a compiled regex or its source.
#[derive(Debug, Clone)]
pub enum Pattern<'a> {
    /// Already compiled.
    Compiled(Cow<'a, Regex>),
    /// Source text compiled on use.
    Source(Cow<'a, str>),
}

impl Pattern<'_> {
    /// Compiles the pattern if needed.
    pub fn compile(&self) -> Result<Cow<'_, Regex>, CheckError> {
        match self {
            Pattern::Compiled(rx) => Ok(Cow::Borrowed(rx.as_ref())),
            Pattern::Source(src) => Regex::new(src).map(Cow::Owned).map_err(|err| {
                CheckError::Pattern(
                    ErrorInfo::new(codes::PATTERN_INVALID, err.to_string())
                        .with_context("pattern", src.as_ref()),
                )
            }),
        }
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(src: &'a str) -> Self {
        Pattern::Source(Cow::Borrowed(src))
    }
}

impl From<String> for Pattern<'_> {
    fn from(src: String) -> Self {
        Pattern::Source(Cow::Owned(src))
    }
}

impl<'a> From<&'a String> for Pattern<'a> {
    fn from(src: &'a String) -> Self {
        Pattern::Source(Cow::Borrowed(src.as_str()))
    }
}

impl<'a> From<&'a Regex> for Pattern<'a> {
    fn from(rx: &'a Regex) -> Self {
        Pattern::Compiled(Cow::Borrowed(rx))
    }
}

impl From<Regex> for Pattern<'_> {
    fn from(rx: Regex) -> Self {
        Pattern::Compiled(Cow::Owned(rx))
    }
}
