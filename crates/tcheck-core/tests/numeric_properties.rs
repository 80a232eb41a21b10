use proptest::prelude::*;
use tcheck_core::{capture, numeric_compare, values_equal, Comparison};

proptest! {
    #[test]
    fn equal_integers_are_equal_across_widths(v in any::<i8>()) {
        let narrow = capture(&v).unwrap();
        for wide in [
            capture(&i16::from(v)).unwrap(),
            capture(&i32::from(v)).unwrap(),
            capture(&i64::from(v)).unwrap(),
        ] {
            prop_assert!(values_equal(&narrow, &wide));
            prop_assert!(values_equal(&wide, &narrow));
        }
    }

    #[test]
    fn unsigned_matches_signed(v in 0u32..=u32::MAX) {
        let unsigned = capture(&v).unwrap();
        let signed = capture(&i64::from(v)).unwrap();
        prop_assert_eq!(numeric_compare(&unsigned, &signed), Comparison::Equal);
        let wide = capture(&u64::from(v)).unwrap();
        prop_assert!(values_equal(&wide, &signed));
    }

    #[test]
    fn ordering_follows_values(a in any::<i32>(), b in any::<i64>()) {
        let expected = capture(&a).unwrap();
        let got = capture(&b).unwrap();
        let want = match b.cmp(&i64::from(a)) {
            std::cmp::Ordering::Equal => Comparison::Equal,
            std::cmp::Ordering::Greater => Comparison::Greater,
            std::cmp::Ordering::Less => Comparison::Less,
        };
        prop_assert_eq!(numeric_compare(&expected, &got), want);
    }

    #[test]
    fn oversized_unsigned_is_not_comparable(
        big in (i64::MAX as u64 + 1)..=u64::MAX,
        other in any::<i64>(),
    ) {
        let big = capture(&big).unwrap();
        let other = capture(&other).unwrap();
        prop_assert_eq!(numeric_compare(&big, &other), Comparison::NotComparable);
        prop_assert_eq!(numeric_compare(&other, &big), Comparison::NotComparable);
        prop_assert!(!values_equal(&big, &other));
    }
}

#[test]
fn string_is_never_a_number() {
    assert!(!values_equal(&capture("1").unwrap(), &capture(&1).unwrap()));
}

#[test]
fn named_wrappers_compare_by_value() {
    #[derive(serde::Serialize)]
    struct Retries(u8);

    assert!(values_equal(&capture(&Retries(3)).unwrap(), &capture(&3i64).unwrap()));
}

#[test]
fn sequences_compare_in_order() {
    let a = capture(&["a", "b"]).unwrap();
    let b = capture(&vec!["b", "a"]).unwrap();
    assert!(!values_equal(&a, &b));
    assert!(values_equal(&a, &capture(&("a", "b")).unwrap()));
}
