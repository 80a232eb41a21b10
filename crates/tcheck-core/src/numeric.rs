//! Numeric projections of captured values.
//!
//! Two projections exist. The integer view accepts every signed width and the
//! unsigned widths that fit into `i64`. The float view accepts floats and the
//! integer widths of 16 bits and more; 8 bit integers deliberately have no
//! float view. A `u64` above `i64::MAX` has neither view and is treated as a
//! non-numeric value.

use crate::value::Value;

/// Returns the value as an `i64` when it is an integer that fits.
pub fn as_integer(value: &Value) -> Option<i64> {
    match *value {
        Value::I8(v) => Some(i64::from(v)),
        Value::I16(v) => Some(i64::from(v)),
        Value::I32(v) => Some(i64::from(v)),
        Value::I64(v) => Some(v),
        Value::U8(v) => Some(i64::from(v)),
        Value::U16(v) => Some(i64::from(v)),
        Value::U32(v) => Some(i64::from(v)),
        Value::U64(v) => i64::try_from(v).ok(),
        _ => None,
    }
}

/// Returns the value as an `f64` when it has a float view.
pub fn as_float(value: &Value) -> Option<f64> {
    match *value {
        Value::I16(v) => Some(f64::from(v)),
        Value::I32(v) => Some(f64::from(v)),
        Value::I64(v) => Some(v as f64),
        Value::U16(v) => Some(f64::from(v)),
        Value::U32(v) => Some(f64::from(v)),
        Value::U64(v) if i64::try_from(v).is_ok() => Some(v as f64),
        Value::F32(v) => Some(f64::from(v)),
        Value::F64(v) => Some(v),
        _ => None,
    }
}

/// Normalized numeric projection of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericView {
    /// The value has an integer view.
    Integer(i64),
    /// The value has only a float view.
    Float(f64),
}

impl NumericView {
    /// Projects a value, preferring the integer view.
    pub fn of(value: &Value) -> Option<Self> {
        as_integer(value)
            .map(NumericView::Integer)
            .or_else(|| as_float(value).map(NumericView::Float))
    }
}
