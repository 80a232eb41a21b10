//! Order-insensitive containment between sequences.

use crate::compare::values_equal;
use crate::value::Value;

/// Returns true when every element of `needle` matches a distinct element of
/// `haystack`, irrespective of order.
///
/// Matching is greedy: each needle element claims the first unclaimed
/// haystack element it equals. With `exact_size` the two slices must also
/// have the same length.
pub fn contains<H, N, F>(haystack: &[H], needle: &[N], exact_size: bool, mut eq: F) -> bool
where
    F: FnMut(&N, &H) -> bool,
{
    if exact_size && haystack.len() != needle.len() {
        return false;
    }
    // any set contains the empty set
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    let mut claimed = vec![false; haystack.len()];
    'next: for wanted in needle {
        for (idx, candidate) in haystack.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            if eq(wanted, candidate) {
                claimed[idx] = true;
                continue 'next;
            }
        }
        return false;
    }
    true
}

/// [`contains`] over captured sequences using [`values_equal`].
///
/// Returns false when either value is not a sequence.
pub fn sequence_contains(haystack: &Value, needle: &Value, exact_size: bool) -> bool {
    let (Some(haystack), Some(needle)) = (haystack.as_sequence(), needle.as_sequence()) else {
        return false;
    };
    contains(&*haystack, &*needle, exact_size, |wanted, candidate| {
        values_equal(wanted, candidate)
    })
}
