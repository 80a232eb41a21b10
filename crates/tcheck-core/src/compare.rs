//! Numeric-aware comparison of captured values.

use crate::numeric::{as_float, NumericView};
use crate::value::Value;

/// Outcome of comparing `got` against `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Numerically equal.
    Equal,
    /// `got` is numerically greater than `expected`.
    Greater,
    /// `got` is numerically less than `expected`.
    Less,
    /// At least one side is not numeric, or the pair cannot be projected
    /// onto a common representation.
    NotComparable,
}

impl Comparison {
    fn of<T: PartialOrd>(expected: T, got: T) -> Self {
        if got == expected {
            Comparison::Equal
        } else if got > expected {
            Comparison::Greater
        } else if got < expected {
            Comparison::Less
        } else {
            // NaN on either side.
            Comparison::NotComparable
        }
    }
}

/// Compares two values numerically regardless of their bit width.
///
/// An integer equals a float when casting the integer to `f64` makes them
/// equal.
pub fn numeric_compare(expected: &Value, got: &Value) -> Comparison {
    match (NumericView::of(expected), NumericView::of(got)) {
        (Some(NumericView::Integer(e)), Some(NumericView::Integer(g))) => Comparison::of(e, g),
        (Some(NumericView::Integer(e)), Some(NumericView::Float(g))) => {
            Comparison::of(e as f64, g)
        }
        // An integer on the got side must still offer a float view.
        (Some(NumericView::Float(e)), Some(_)) => match as_float(got) {
            Some(g) => Comparison::of(e, g),
            None => Comparison::NotComparable,
        },
        _ => Comparison::NotComparable,
    }
}

/// Numeric equality for numbers, structural equality for everything else.
pub fn values_equal(expected: &Value, got: &Value) -> bool {
    match numeric_compare(expected, got) {
        Comparison::Equal => true,
        Comparison::NotComparable => expected.structurally_eq(got),
        Comparison::Greater | Comparison::Less => false,
    }
}
