//! Stateful checker bound to a host test context.

use std::any::type_name;
use std::fmt::{Debug, Display};
use std::path::Path;

use chrono::TimeDelta;
use serde::Serialize;
use tcheck_core::{
    capture, compare_files, file_digest, numeric_compare, produce_diff, regular_file_len,
    sequence_contains, values_equal, Comparison, FileComparison, Settings, Value,
};

use crate::capability::{MaybeError, Nilable};
use crate::pattern::Pattern;
use crate::reporter::{PanicReporter, Reporter};
use crate::text::pretty_text_diff;
use crate::time::{shift_all, TimePoint};

/// Checker bound to a [`Reporter`], with an optional iteration index.
///
/// Once an index is set with [`Tester::at`], every failure message starts
/// with `[index] `, which identifies the failing iteration of a loop:
///
/// ```
/// use tcheck::{PanicReporter, Tester};
///
/// let host = PanicReporter;
/// let mut tt = Tester::new(&host);
/// for (i, n) in [2u8, 4, 6].into_iter().enumerate() {
///     tt.at(i).check_true(n % 2 == 0);
/// }
/// ```
#[derive(Debug)]
pub struct Tester<'r, R: Reporter + ?Sized = PanicReporter> {
    reporter: &'r R,
    index: Option<usize>,
    settings: Settings,
}

impl<'r, R: Reporter + ?Sized> Tester<'r, R> {
    /// Binds a tester with settings read from the environment (see
    /// [`Settings::from_env`]).
    ///
    /// A malformed override is reported through `reporter` as a fatal
    /// failure.
    pub fn new(reporter: &'r R) -> Self {
        match Settings::from_env() {
            Ok(settings) => Self::with_settings(reporter, settings),
            Err(err) => Self::with_settings(reporter, Settings::default())
                .fatal(format_args!("invalid tcheck settings: {err}")),
        }
    }

    /// Binds a tester with explicit settings.
    pub fn with_settings(reporter: &'r R, settings: Settings) -> Self {
        Self {
            reporter,
            index: None,
            settings,
        }
    }

    /// Sets the index and returns the tester for chaining.
    pub fn at(&mut self, index: usize) -> &mut Self {
        self.index = Some(index);
        self
    }

    /// The index set by the last [`Tester::at`] call.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reports `message`, prefixed with the index when one is set, and stops
    /// the test.
    pub fn fatal(&self, message: impl Display) -> ! {
        match self.index {
            Some(index) => self.reporter.fatal(&format!("[{index}] {message}")),
            None => self.reporter.fatal(&message.to_string()),
        }
    }

    fn capture<T: Serialize + ?Sized>(&self, value: &T) -> Value {
        match capture(value) {
            Ok(value) => value,
            Err(err) => self.fatal(format_args!(
                "cannot inspect value of type {}: {err}",
                type_name::<T>()
            )),
        }
    }

    /// Fails unless the values are equal. Numbers compare by value regardless
    /// of width; everything else compares structurally.
    pub fn check_equal<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if !values_equal(&e, &g) {
            self.fatal(format_args!(
                "expected equal: {} {e}, got {} {g}",
                type_name::<E>(),
                type_name::<G>()
            ));
        }
    }

    /// Fails if the values are equal under [`Tester::check_equal`] rules.
    pub fn check_not_equal<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if values_equal(&e, &g) {
            self.fatal(format_args!(
                "expected not equal: {} {e}, got {} {g}",
                type_name::<E>(),
                type_name::<G>()
            ));
        }
    }

    /// Fails unless `got` is numerically greater than `expected`.
    pub fn check_numeric_greater<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if numeric_compare(&e, &g) != Comparison::Greater {
            self.fatal(format_args!(
                "expected {} {g} to be greater than {} {e}",
                type_name::<G>(),
                type_name::<E>()
            ));
        }
    }

    /// Fails unless `got` is numerically less than `expected`.
    pub fn check_numeric_less<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if numeric_compare(&e, &g) != Comparison::Less {
            self.fatal(format_args!(
                "expected {} {g} to be less than {} {e}",
                type_name::<G>(),
                type_name::<E>()
            ));
        }
    }

    /// Fails if `got` is an error, then requires strict structural equality
    /// (no numeric widening) with `expected`.
    pub fn check_equal_and_no_error<E, G, Er>(&self, expected: &E, got: &Result<G, Er>)
    where
        E: Serialize + ?Sized,
        G: Serialize,
        Er: Display,
    {
        let value = match got {
            Ok(value) => value,
            Err(err) => self.fatal(format_args!("expected: no error, got {:?}", err.to_string())),
        };
        let e = self.capture(expected);
        let g = self.capture(value);
        if !e.structurally_eq(&g) {
            self.fatal(format_args!(
                "expected equal: {} {e}, got {} {g}",
                type_name::<E>(),
                type_name::<G>()
            ));
        }
    }

    /// Fails unless `got` holds every element of `expected`, in any order.
    /// Each element of `got` satisfies at most one expected element.
    pub fn check_contains_elements<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if !sequence_contains(&g, &e, false) {
            self.fatal(format_args!(
                "sequence {g} does not contain all elements in {e}"
            ));
        }
    }

    /// Fails unless both sequences hold the same elements, in any order.
    pub fn check_equal_elements<E, G>(&self, expected: &E, got: &G)
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let e = self.capture(expected);
        let g = self.capture(got);
        if !sequence_contains(&g, &e, true) {
            self.fatal(format_args!("elements of sequence {e} and {g} differ"));
        }
    }

    /// Fails unless `got` is absent.
    pub fn check_nil<T: Nilable + Debug + ?Sized>(&self, got: &T) {
        if !got.is_nil() {
            self.fatal(format_args!("expected: nil, got {got:?}"));
        }
    }

    /// Fails if `got` is absent.
    pub fn check_not_nil<T: Nilable + ?Sized>(&self, got: &T) {
        if got.is_nil() {
            self.fatal("expected: not nil, got nil");
        }
    }

    /// Fails unless `got` carries an error.
    pub fn check_error<M: MaybeError + ?Sized>(&self, got: &M) {
        if got.error_message().is_none() {
            self.fatal("expected: error, got none");
        }
    }

    /// Fails if `got` carries an error.
    pub fn check_not_error<M: MaybeError + ?Sized>(&self, got: &M) {
        if let Some(message) = got.error_message() {
            self.fatal(format_args!("expected: no error, got {message:?}"));
        }
    }

    /// Fails unless `got` is true.
    pub fn check_true(&self, got: bool) {
        if !got {
            self.fatal("expected: true, got false");
        }
    }

    /// Fails unless `got` is false.
    pub fn check_false(&self, got: bool) {
        if got {
            self.fatal("expected: false, got true");
        }
    }

    /// Fails with `message` unless `predicate` holds.
    pub fn check_true_msg(&self, predicate: bool, message: impl Display) {
        if !predicate {
            self.fatal(message);
        }
    }

    /// Fails unless `got` is strictly after `expected` shifted by every offset.
    pub fn check_after<T: TimePoint>(&self, expected: T, got: T, offsets: &[TimeDelta]) {
        let expected = self.shift_expected(&expected, offsets);
        if !(got > expected) {
            self.time_failure("after", &expected, &got);
        }
    }

    /// Like [`Tester::check_after`] but also accepts equal times.
    pub fn check_after_or_equal<T: TimePoint>(&self, expected: T, got: T, offsets: &[TimeDelta]) {
        let expected = self.shift_expected(&expected, offsets);
        if !(got >= expected) {
            self.time_failure("after or equal to", &expected, &got);
        }
    }

    /// Fails unless `got` is strictly before `expected` shifted by every offset.
    pub fn check_before<T: TimePoint>(&self, expected: T, got: T, offsets: &[TimeDelta]) {
        let expected = self.shift_expected(&expected, offsets);
        if !(got < expected) {
            self.time_failure("before", &expected, &got);
        }
    }

    /// Like [`Tester::check_before`] but also accepts equal times.
    pub fn check_before_or_equal<T: TimePoint>(&self, expected: T, got: T, offsets: &[TimeDelta]) {
        let expected = self.shift_expected(&expected, offsets);
        if !(got <= expected) {
            self.time_failure("before or equal to", &expected, &got);
        }
    }

    fn shift_expected<T: TimePoint>(&self, expected: &T, offsets: &[TimeDelta]) -> T {
        match shift_all(expected, offsets) {
            Some(shifted) => shifted,
            None => self.fatal(format_args!(
                "expected: time {expected:?} shifted by {offsets:?}, but the offset overflows"
            )),
        }
    }

    fn time_failure<T: TimePoint>(&self, relation: &str, expected: &T, got: &T) -> ! {
        self.fatal(format_args!(
            "expected: time {relation} {expected:?}, got {got:?} (diff {})",
            got.since(expected)
        ))
    }

    /// Fails unless the pattern matches somewhere in `got`.
    ///
    /// The pattern is a compiled [`regex::Regex`] or its source text; source
    /// that does not compile fails the check.
    pub fn check_matches<'p>(&self, pattern: impl Into<Pattern<'p>>, got: &str) {
        let pattern = pattern.into();
        let rx = match pattern.compile() {
            Ok(rx) => rx,
            Err(err) => self.fatal(format_args!("check_matches: illegal pattern: {err}")),
        };
        if !rx.is_match(got) {
            self.fatal(format_args!(
                "expected match for {:?}, got {got:?}",
                rx.as_str()
            ));
        }
    }

    /// Fails with an index aligned line diff unless the slices are equal.
    pub fn check_string_slices_equal<E, G>(&self, expected: &[E], got: &[G])
    where
        E: AsRef<str>,
        G: AsRef<str>,
    {
        let diff = produce_diff(expected, got, self.settings.max_consecutive_mismatches);
        if !diff.is_equal() {
            self.fatal(format_args!("slices not equal - see diff:\n{diff}"));
        }
    }

    /// Fails with a character level diff unless the strings are equal.
    pub fn check_text_equal(&self, expected: &str, got: &str) {
        if expected != got {
            let pretty = pretty_text_diff(expected, got, self.settings.colored_text_diff);
            self.fatal(format_args!("strings not equal - see diff:\n{pretty}"));
        }
    }

    /// Fails unless both paths are regular files with identical bytes.
    pub fn check_files_equal(&self, left: impl AsRef<Path>, right: impl AsRef<Path>) {
        let (left, right) = (left.as_ref(), right.as_ref());
        let chunk = self.settings.file_chunk_size;
        match compare_files(left, right, chunk) {
            Ok(FileComparison::Identical) => {}
            Ok(FileComparison::SizeMismatch {
                left: left_len,
                right: right_len,
            }) => self.fatal(format_args!(
                "size of file {:?} ({left_len}) does not match size of {:?} ({right_len})",
                left.display().to_string(),
                right.display().to_string()
            )),
            Ok(FileComparison::ContentMismatch { offset }) => {
                let digests = file_digest(left, chunk)
                    .and_then(|l| file_digest(right, chunk).map(|r| (l, r)));
                match digests {
                    Ok((l, r)) => self.fatal(format_args!(
                        "content of file {:?} and {:?} differ from offset {offset} (sha256 {l} vs {r})",
                        left.display().to_string(),
                        right.display().to_string()
                    )),
                    Err(err) => self.fatal(err),
                }
            }
            Err(err) => self.fatal(err),
        }
    }

    /// Fails unless `path` names an existing regular file.
    pub fn check_file_exists(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = regular_file_len(path) {
            if err.is_not_found() {
                self.fatal(format_args!("file {} does not exist", path.display()));
            }
            if err.is_directory() {
                self.fatal(format_args!(
                    "file {} is a directory, not a file",
                    path.display()
                ));
            }
            self.fatal(err);
        }
    }
}
