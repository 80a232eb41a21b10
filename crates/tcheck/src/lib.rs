//! Test checkers that compare a produced value against an expected value or
//! condition and report a fatal failure to the host test context when the
//! comparison does not hold.
//!
//! ```
//! use tcheck::{check_equal_elements, PanicReporter, Tester};
//!
//! check_equal_elements(&["a", "b", "c"], &["c", "b", "a"], &PanicReporter);
//!
//! let host = PanicReporter;
//! let mut tt = Tester::new(&host);
//! for (i, line) in ["x=1", "y=2"].iter().enumerate() {
//!     tt.at(i).check_matches(r"^\w=\d$", line);
//! }
//! ```

#![deny(missing_docs)]

mod capability;
mod checks;
mod pattern;
mod reporter;
mod tester;
pub mod text;
pub mod time;

pub use capability::{MaybeError, Nilable};
pub use checks::{
    check_after, check_after_or_equal, check_before, check_before_or_equal,
    check_contains_elements, check_equal, check_equal_and_no_error, check_equal_elements,
    check_error, check_false, check_file_exists, check_files_equal, check_matches, check_nil,
    check_not_equal, check_not_error, check_not_nil, check_numeric_greater, check_numeric_less,
    check_string_slices_equal, check_text_equal, check_true,
};
pub use pattern::Pattern;
pub use reporter::{ensure_failed, ensure_not_failed, run_isolated, PanicReporter, Recorder, Reporter};
pub use tester::Tester;
pub use time::TimePoint;

pub use chrono::TimeDelta;
pub use tcheck_core::{self as engine, Settings, Value};
