#![deny(missing_docs)]
#![doc = "Comparison engine behind the tcheck checkers: value capture, numeric-aware equality, multiset containment, line diffs and file comparison."]

pub mod capture;
pub mod compare;
pub mod diff;
pub mod errors;
pub mod files;
pub mod hash;
pub mod multiset;
pub mod numeric;
pub mod settings;
pub mod value;

pub use capture::capture;
pub use compare::{numeric_compare, values_equal, Comparison};
pub use diff::{produce_diff, DiffEntry, LineDiff, LineStatus, DEFAULT_MISMATCH_LIMIT};
pub use errors::{CheckError, ErrorInfo};
pub use files::{compare_files, regular_file_len, FileComparison};
pub use hash::file_digest;
pub use multiset::{contains, sequence_contains};
pub use numeric::{as_float, as_integer, NumericView};
pub use settings::Settings;
pub use value::Value;
