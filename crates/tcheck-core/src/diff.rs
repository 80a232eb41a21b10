//! Index aligned line diffs for string sequences.

use std::fmt::{self, Display};

/// Default number of consecutive mismatching indices reported before the diff
/// is cut short.
pub const DEFAULT_MISMATCH_LIMIT: usize = 3;

/// Classification of one index of a [`LineDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// Both sides hold the same line.
    Equal,
    /// Both sides hold a line and they differ.
    Changed,
    /// Only the expected side has a line at this index.
    ExtraExpected,
    /// Only the got side has a line at this index.
    ExtraGot,
}

impl LineStatus {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            LineStatus::Equal => (" = ", " = "),
            LineStatus::Changed => (" ! ", " ! "),
            LineStatus::ExtraExpected => ("+! ", " !-"),
            LineStatus::ExtraGot => ("-! ", " !+"),
        }
    }
}

/// One reported index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Position in the two sequences.
    pub index: usize,
    /// How the two sides relate.
    pub status: LineStatus,
    /// Line on the expected side, if any.
    pub expected: Option<String>,
    /// Line on the got side, if any.
    pub got: Option<String>,
}

/// Result of [`produce_diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    entries: Vec<DiffEntry>,
    truncated_after: Option<usize>,
    equal: bool,
}

impl LineDiff {
    /// True when both sequences hold the same lines.
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// True when reporting stopped early.
    pub fn is_truncated(&self) -> bool {
        self.truncated_after.is_some()
    }

    /// The reported entries, in index order.
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Indices of the reported mismatches.
    pub fn mismatches(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.status != LineStatus::Equal)
            .map(|entry| entry.index)
            .collect()
    }

    /// Human readable rendering, one line per side.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

fn side(line: Option<&str>) -> String {
    match line {
        Some(line) => format!("`{line}`"),
        None => "<missing>".to_string(),
    }
}

impl Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut line = |f: &mut fmt::Formatter<'_>, text: String| -> fmt::Result {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{text}")
        };
        for entry in &self.entries {
            let (marker_e, marker_g) = entry.status.markers();
            if entry.status == LineStatus::Equal {
                line(
                    f,
                    format!("{marker_e} eg[{}] {}", entry.index, side(entry.expected.as_deref())),
                )?;
            } else {
                line(
                    f,
                    format!("{marker_e}  e[{}] {}", entry.index, side(entry.expected.as_deref())),
                )?;
                line(
                    f,
                    format!("{marker_g}  g[{}] {}", entry.index, side(entry.got.as_deref())),
                )?;
            }
        }
        if let Some(limit) = self.truncated_after {
            line(f, format!("... stopping after {limit} consecutive unequal lines"))?;
        }
        Ok(())
    }
}

/// Aligns `expected` and `got` by index and classifies every position.
///
/// Positions past the end of the shorter sequence always count as mismatches.
/// Reporting stops once `limit` consecutive indices mismatch; a `limit` of
/// zero disables truncation.
pub fn produce_diff<E, G>(expected: &[E], got: &[G], limit: usize) -> LineDiff
where
    E: AsRef<str>,
    G: AsRef<str>,
{
    let len = expected.len().max(got.len());
    let mut entries = Vec::with_capacity(len);
    let mut equal = true;
    let mut consecutive = 0;
    let mut truncated_after = None;

    for index in 0..len {
        let e = expected.get(index).map(AsRef::as_ref);
        let g = got.get(index).map(AsRef::as_ref);
        let status = match (e, g) {
            (Some(e), Some(g)) if e == g => LineStatus::Equal,
            (Some(_), Some(_)) => LineStatus::Changed,
            (Some(_), None) => LineStatus::ExtraExpected,
            (None, _) => LineStatus::ExtraGot,
        };
        entries.push(DiffEntry {
            index,
            status,
            expected: e.map(str::to_owned),
            got: g.map(str::to_owned),
        });
        if status == LineStatus::Equal {
            consecutive = 0;
            continue;
        }
        equal = false;
        consecutive += 1;
        if limit > 0 && consecutive >= limit && index + 1 < len {
            truncated_after = Some(limit);
            break;
        }
    }

    LineDiff {
        entries,
        truncated_after,
        equal,
    }
}
