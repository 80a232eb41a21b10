//! Free-standing checkers.
//!
//! Each function compares a produced value against an expectation and
//! reports a fatal failure to `t` when the comparison does not hold. They
//! behave like the [`Tester`] method of the same name without an index, using
//! settings read from the environment.

use std::fmt::{Debug, Display};
use std::path::Path;

use chrono::TimeDelta;
use serde::Serialize;

use crate::capability::{MaybeError, Nilable};
use crate::pattern::Pattern;
use crate::reporter::Reporter;
use crate::tester::Tester;
use crate::time::TimePoint;

/// Checks that two values are equal, comparing numbers by value.
///
/// ```
/// use tcheck::{check_equal, PanicReporter};
///
/// check_equal(&1i8, &1i64, &PanicReporter);
/// check_equal(&vec!["a", "b"], &["a", "b"], &PanicReporter);
/// ```
pub fn check_equal<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_equal(expected, got)
}

/// Checks that two values are not equal.
pub fn check_not_equal<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_not_equal(expected, got)
}

/// Checks that `got` is numerically greater than `expected`.
pub fn check_numeric_greater<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_numeric_greater(expected, got)
}

/// Checks that `got` is numerically less than `expected`.
pub fn check_numeric_less<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_numeric_less(expected, got)
}

/// Checks that `got` is `Ok` and strictly equal to `expected`.
pub fn check_equal_and_no_error<E, G, Er, R>(expected: &E, got: &Result<G, Er>, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize,
    Er: Display,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_equal_and_no_error(expected, got)
}

/// Checks that `got` contains every element of `expected`, in any order.
pub fn check_contains_elements<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_contains_elements(expected, got)
}

/// Checks that two sequences hold the same elements, in any order.
pub fn check_equal_elements<E, G, R>(expected: &E, got: &G, t: &R)
where
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_equal_elements(expected, got)
}

/// Checks that `got` is absent.
pub fn check_nil<T, R>(got: &T, t: &R)
where
    T: Nilable + Debug + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_nil(got)
}

/// Checks that `got` is present.
pub fn check_not_nil<T, R>(got: &T, t: &R)
where
    T: Nilable + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_not_nil(got)
}

/// Checks that `got` carries an error.
pub fn check_error<M, R>(got: &M, t: &R)
where
    M: MaybeError + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_error(got)
}

/// Checks that `got` carries no error.
pub fn check_not_error<M, R>(got: &M, t: &R)
where
    M: MaybeError + ?Sized,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_not_error(got)
}

/// Checks that `got` is true.
pub fn check_true<R: Reporter + ?Sized>(got: bool, t: &R) {
    Tester::new(t).check_true(got)
}

/// Checks that `got` is false.
pub fn check_false<R: Reporter + ?Sized>(got: bool, t: &R) {
    Tester::new(t).check_false(got)
}

/// Checks that the pattern matches `got`; see [`Tester::check_matches`].
pub fn check_matches<'p, R: Reporter + ?Sized>(pattern: impl Into<Pattern<'p>>, got: &str, t: &R) {
    Tester::new(t).check_matches(pattern, got)
}

/// Checks that two string slices are equal, reporting a line diff otherwise.
pub fn check_string_slices_equal<E, G, R>(expected: &[E], got: &[G], t: &R)
where
    E: AsRef<str>,
    G: AsRef<str>,
    R: Reporter + ?Sized,
{
    Tester::new(t).check_string_slices_equal(expected, got)
}

/// Checks that two strings are equal, reporting a character diff otherwise.
pub fn check_text_equal<R: Reporter + ?Sized>(expected: &str, got: &str, t: &R) {
    Tester::new(t).check_text_equal(expected, got)
}

/// Checks that `got` is after `expected` plus every offset.
pub fn check_after<T: TimePoint, R: Reporter + ?Sized>(
    expected: T,
    got: T,
    offsets: &[TimeDelta],
    t: &R,
) {
    Tester::new(t).check_after(expected, got, offsets)
}

/// Checks that `got` is after or equal to `expected` plus every offset.
pub fn check_after_or_equal<T: TimePoint, R: Reporter + ?Sized>(
    expected: T,
    got: T,
    offsets: &[TimeDelta],
    t: &R,
) {
    Tester::new(t).check_after_or_equal(expected, got, offsets)
}

/// Checks that `got` is before `expected` plus every offset.
pub fn check_before<T: TimePoint, R: Reporter + ?Sized>(
    expected: T,
    got: T,
    offsets: &[TimeDelta],
    t: &R,
) {
    Tester::new(t).check_before(expected, got, offsets)
}

/// Checks that `got` is before or equal to `expected` plus every offset.
pub fn check_before_or_equal<T: TimePoint, R: Reporter + ?Sized>(
    expected: T,
    got: T,
    offsets: &[TimeDelta],
    t: &R,
) {
    Tester::new(t).check_before_or_equal(expected, got, offsets)
}

/// Checks that two files have exactly the same contents.
pub fn check_files_equal<R: Reporter + ?Sized>(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    t: &R,
) {
    Tester::new(t).check_files_equal(left, right)
}

/// Checks that `path` is an existing regular file.
pub fn check_file_exists<R: Reporter + ?Sized>(path: impl AsRef<Path>, t: &R) {
    Tester::new(t).check_file_exists(path)
}
