//! Closed value model used for every comparison.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// A captured value.
///
/// Values are produced from any `serde::Serialize` type by [`crate::capture`].
/// Integer widths are preserved so that numeric comparisons can decide how a
/// value may be projected, see [`crate::numeric`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value (`None`).
    Nil,
    /// The unit value `()`.
    Unit,
    /// Boolean.
    Bool(bool),
    /// 8 bit signed integer.
    I8(i8),
    /// 16 bit signed integer.
    I16(i16),
    /// 32 bit signed integer.
    I32(i32),
    /// 64 bit (or pointer sized) signed integer.
    I64(i64),
    /// 8 bit unsigned integer.
    U8(u8),
    /// 16 bit unsigned integer.
    U16(u16),
    /// 32 bit unsigned integer.
    U32(u32),
    /// 64 bit (or pointer sized) unsigned integer.
    U64(u64),
    /// 32 bit float.
    F32(f32),
    /// 64 bit float.
    F64(f64),
    /// Single character.
    Char(char),
    /// Owned string.
    Str(String),
    /// Raw bytes, as emitted by `serialize_bytes`.
    Bytes(Vec<u8>),
    /// Ordered sequence: vectors, slices, arrays, tuples and tuple structs.
    Seq(Vec<Value>),
    /// Key value pairs in emission order.
    Map(Vec<(Value, Value)>),
    /// Named struct with its fields in declaration order.
    Struct {
        /// Rust type name of the struct.
        name: &'static str,
        /// Field names and values.
        fields: Vec<(&'static str, Value)>,
    },
    /// Enum variant with an optional payload.
    Variant {
        /// Rust type name of the enum.
        name: &'static str,
        /// Variant name.
        variant: &'static str,
        /// Payload for newtype, tuple and struct variants.
        payload: Option<Box<Value>>,
    },
}

impl Value {
    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Struct { .. } => "struct",
            Value::Variant { .. } => "variant",
        }
    }

    /// Returns true for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the elements of a sequence-like value.
    ///
    /// Byte buffers are expanded into a sequence of [`Value::U8`].
    pub fn as_sequence(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Value::Seq(items) => Some(Cow::Borrowed(items.as_slice())),
            Value::Bytes(bytes) => Some(Cow::Owned(bytes.iter().copied().map(Value::U8).collect())),
            _ => None,
        }
    }

    /// Strict recursive equality.
    ///
    /// Kinds must match exactly, sequences compare in order and maps compare
    /// irrespective of entry order. Floats follow IEEE semantics.
    pub fn structurally_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) | (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Bytes(bytes), Value::Seq(items)) | (Value::Seq(items), Value::Bytes(bytes)) => {
                bytes.len() == items.len()
                    && bytes
                        .iter()
                        .zip(items)
                        .all(|(byte, item)| matches!(item, Value::U8(v) if v == byte))
            }
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => maps_equal(a, b),
            (
                Value::Struct {
                    name: name_a,
                    fields: fields_a,
                },
                Value::Struct {
                    name: name_b,
                    fields: fields_b,
                },
            ) => {
                name_a == name_b
                    && fields_a.len() == fields_b.len()
                    && fields_a
                        .iter()
                        .zip(fields_b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.structurally_eq(vb))
            }
            (
                Value::Variant {
                    name: name_a,
                    variant: variant_a,
                    payload: payload_a,
                },
                Value::Variant {
                    name: name_b,
                    variant: variant_b,
                    payload: payload_b,
                },
            ) => {
                name_a == name_b
                    && variant_a == variant_b
                    && match (payload_a, payload_b) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a.structurally_eq(b),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

// Every entry of `a` must pair with a distinct, equal entry of `b`.
fn maps_equal(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut claimed = vec![false; b.len()];
    'next: for (key_a, value_a) in a {
        for (idx, (key_b, value_b)) in b.iter().enumerate() {
            if !claimed[idx] && key_a.structurally_eq(key_b) {
                if !value_a.structurally_eq(value_b) {
                    return false;
                }
                claimed[idx] = true;
                continue 'next;
            }
        }
        return false;
    }
    true
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, open: &str, close: &str, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    write!(f, "{open}")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "None"),
            Value::Unit => write!(f, "()"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v:?}"),
            Value::F64(v) => write!(f, "{v:?}"),
            Value::Char(v) => write!(f, "{v:?}"),
            Value::Str(v) => write!(f, "{v:?}"),
            Value::Bytes(bytes) => write!(f, "{bytes:?}"),
            Value::Seq(items) => write_list(f, "[", "]", items),
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Struct { name, fields } => {
                if fields.is_empty() {
                    return write!(f, "{name}");
                }
                write!(f, "{name} {{ ")?;
                for (idx, (field, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}: {value}")?;
                }
                write!(f, " }}")
            }
            Value::Variant {
                name,
                variant,
                payload,
            } => match payload.as_deref() {
                None => write!(f, "{name}::{variant}"),
                Some(Value::Seq(items)) => {
                    write!(f, "{name}::{variant}")?;
                    write_list(f, "(", ")", items)
                }
                Some(inner @ Value::Struct { .. }) => write!(f, "{name}::{inner}"),
                Some(inner) => write!(f, "{name}::{variant}({inner})"),
            },
        }
    }
}
