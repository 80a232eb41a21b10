mod common;

use std::collections::HashMap;
use std::io;

use serde::Serialize;
use tcheck::{
    check_contains_elements, check_equal, check_equal_and_no_error, check_equal_elements,
    check_error, check_false, check_nil, check_not_equal, check_not_error, check_not_nil,
    check_numeric_greater, check_numeric_less, check_true, ensure_failed, ensure_not_failed,
    PanicReporter, Value,
};

use common::{init_tracing, last_message};

#[derive(Serialize)]
struct Config {
    name: &'static str,
    limits: Vec<u32>,
    flags: HashMap<&'static str, bool>,
}

fn config() -> Config {
    Config {
        name: "svc",
        limits: vec![1, 2, 3],
        flags: [("fast", true), ("safe", false)].into_iter().collect(),
    }
}

#[test]
fn equal_accepts_mixed_integer_widths() {
    init_tracing();
    ensure_not_failed(&PanicReporter, |ft| check_equal(&1i8, &1i64, ft));
    ensure_not_failed(&PanicReporter, |ft| check_equal(&300u16, &300.0f64, ft));
}

#[test]
fn equal_rejects_string_against_number() {
    let rec = ensure_failed(&PanicReporter, |ft| check_equal("1", &1, ft));
    assert_eq!(last_message(&rec), "expected equal: str \"1\", got i32 1");
}

#[test]
fn equal_rejects_different_strings() {
    ensure_failed(&PanicReporter, |ft| check_equal("a", "b", ft));
}

#[test]
fn equal_compares_structs_deeply() {
    ensure_not_failed(&PanicReporter, |ft| check_equal(&config(), &config(), ft));
    let mut other = config();
    other.limits.push(4);
    ensure_failed(&PanicReporter, |ft| check_equal(&config(), &other, ft));
}

#[test]
fn failing_check_stops_the_closure() {
    let mut reached = false;
    let rec = ensure_failed(&PanicReporter, |ft| {
        check_equal(&1, &2, ft);
        reached = true;
    });
    assert!(!reached);
    assert_eq!(rec.messages().len(), 1);
}

#[test]
fn not_equal() {
    ensure_not_failed(&PanicReporter, |ft| check_not_equal(&1u8, &2i64, ft));
    ensure_failed(&PanicReporter, |ft| check_not_equal(&2u8, &2i64, ft));
}

#[test]
fn numeric_ordering() {
    ensure_not_failed(&PanicReporter, |ft| check_numeric_greater(&1u8, &2i64, ft));
    ensure_failed(&PanicReporter, |ft| check_numeric_greater(&2u8, &2i64, ft));
    ensure_not_failed(&PanicReporter, |ft| check_numeric_less(&2.5f64, &2i32, ft));
    ensure_failed(&PanicReporter, |ft| check_numeric_less("a", "b", ft));
}

#[test]
fn equal_and_no_error() {
    let ok: Result<i64, io::Error> = Ok(5);
    ensure_not_failed(&PanicReporter, |ft| check_equal_and_no_error(&5i64, &ok, ft));
    // no numeric widening here
    ensure_failed(&PanicReporter, |ft| check_equal_and_no_error(&5i32, &ok, ft));

    let err: Result<i64, io::Error> = Err(io::ErrorKind::UnexpectedEof.into());
    let rec = ensure_failed(&PanicReporter, |ft| check_equal_and_no_error(&5i64, &err, ft));
    assert!(last_message(&rec).starts_with("expected: no error"));
}

#[test]
fn equal_elements() {
    let expected = ["a", "b", "c"];
    ensure_not_failed(&PanicReporter, |ft| {
        check_equal_elements(&expected, &["a", "b", "c"], ft)
    });
    ensure_not_failed(&PanicReporter, |ft| {
        check_equal_elements(&expected, &["c", "b", "a"], ft)
    });
    ensure_failed(&PanicReporter, |ft| check_equal_elements(&expected, &["a"], ft));
}

#[test]
fn contains_elements() {
    ensure_not_failed(&PanicReporter, |ft| {
        check_contains_elements(&[2, 1], &vec![1u8, 2, 3], ft)
    });
    let rec = ensure_failed(&PanicReporter, |ft| {
        check_contains_elements(&[1, 1], &vec![1, 2, 3], ft)
    });
    assert_eq!(
        last_message(&rec),
        "sequence [1, 2, 3] does not contain all elements in [1, 1]"
    );
    ensure_failed(&PanicReporter, |ft| check_contains_elements(&[1], &"1", ft));
}

#[test]
fn nil_checks() {
    ensure_failed(&PanicReporter, |ft| check_nil(&Some(vec![0u8]), ft));
    ensure_not_failed(&PanicReporter, |ft| check_nil(&Option::<u8>::None, ft));
    ensure_failed(&PanicReporter, |ft| check_not_nil(&Option::<u8>::None, ft));
    ensure_not_failed(&PanicReporter, |ft| check_not_nil(&Some(1), ft));
    ensure_not_failed(&PanicReporter, |ft| check_nil(&std::ptr::null::<u8>(), ft));
    ensure_not_failed(&PanicReporter, |ft| check_nil(&Value::Nil, ft));
}

#[test]
fn error_checks() {
    let failed: Result<(), io::Error> = Err(io::ErrorKind::UnexpectedEof.into());
    let fine: Result<(), io::Error> = Ok(());
    ensure_failed(&PanicReporter, |ft| check_error(&fine, ft));
    ensure_not_failed(&PanicReporter, |ft| check_error(&failed, ft));
    ensure_failed(&PanicReporter, |ft| check_not_error(&failed, ft));
    ensure_failed(&PanicReporter, |ft| check_error(&Option::<io::Error>::None, ft));
    ensure_not_failed(&PanicReporter, |ft| {
        check_not_error(&Option::<io::Error>::None, ft)
    });
}

#[test]
fn booleans() {
    ensure_failed(&PanicReporter, |ft| check_true(false, ft));
    ensure_failed(&PanicReporter, |ft| check_false(true, ft));
    ensure_not_failed(&PanicReporter, |ft| {
        check_true(true, ft);
        check_false(false, ft);
    });
}

#[test]
#[should_panic(expected = "expected equal: i32 1, got i32 2")]
fn panic_reporter_fails_the_test() {
    check_equal(&1, &2, &PanicReporter);
}
