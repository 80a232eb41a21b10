use std::collections::BTreeMap;

use proptest::prelude::*;
use tcheck_core::{capture, contains, sequence_contains};

fn counts(items: &[u8]) -> BTreeMap<u8, usize> {
    let mut map = BTreeMap::new();
    for item in items {
        *map.entry(*item).or_insert(0) += 1;
    }
    map
}

fn is_sub_multiset(needle: &[u8], haystack: &[u8]) -> bool {
    let have = counts(haystack);
    counts(needle)
        .into_iter()
        .all(|(item, n)| have.get(&item).copied().unwrap_or(0) >= n)
}

proptest! {
    #[test]
    fn containment_is_multiset_inclusion(
        haystack in prop::collection::vec(0u8..4, 0..8),
        needle in prop::collection::vec(0u8..4, 0..8),
    ) {
        let got = contains(&haystack, &needle, false, |a, b| a == b);
        prop_assert_eq!(got, is_sub_multiset(&needle, &haystack));
    }

    #[test]
    fn permutations_have_equal_elements(mut items in prop::collection::vec(any::<u16>(), 0..10)) {
        let original = capture(&items).unwrap();
        items.reverse();
        let reversed = capture(&items).unwrap();
        prop_assert!(sequence_contains(&original, &reversed, true));
    }
}

#[test]
fn empty_edge_cases() {
    let empty = capture(&Vec::<i32>::new()).unwrap();
    let some = capture(&vec![1, 2]).unwrap();
    assert!(sequence_contains(&empty, &empty, true));
    assert!(sequence_contains(&empty, &empty, false));
    assert!(!sequence_contains(&empty, &some, false));
    assert!(sequence_contains(&some, &empty, false));
    assert!(!sequence_contains(&some, &empty, true));
}

#[test]
fn equal_elements_scenarios() {
    let expected = capture(&["a", "b", "c"]).unwrap();
    assert!(sequence_contains(&capture(&["c", "b", "a"]).unwrap(), &expected, true));
    assert!(!sequence_contains(&capture(&["a"]).unwrap(), &expected, true));
}
