//! Captures any `Serialize` value as a [`Value`].

use serde::ser::{self, Serialize};

use crate::errors::{codes, CheckError, ErrorInfo};
use crate::value::Value;

/// Captures `value` into the closed [`Value`] model.
///
/// `Some(v)` and newtype structs are unwrapped, so `Some(3u8)` and a
/// `struct Port(u8)` holding 3 both capture as `Value::U8(3)`.
pub fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Value, CheckError> {
    value.serialize(ValueSerializer)
}

fn unsupported(kind: &str) -> CheckError {
    CheckError::Value(
        ErrorInfo::new(
            codes::VALUE_UNSUPPORTED,
            format!("{kind} values cannot be captured"),
        )
        .with_hint("convert the value to a 64 bit integer or a string before checking it"),
    )
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = CheckError;
    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = SeqCollector;
    type SerializeTupleVariant = VariantSeqCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = StructCollector;
    type SerializeStructVariant = VariantStructCollector;

    fn serialize_bool(self, v: bool) -> Result<Value, CheckError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, CheckError> {
        Ok(Value::I8(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, CheckError> {
        Ok(Value::I16(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, CheckError> {
        Ok(Value::I32(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, CheckError> {
        Ok(Value::I64(v))
    }

    fn serialize_i128(self, _v: i128) -> Result<Value, CheckError> {
        Err(unsupported("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, CheckError> {
        Ok(Value::U8(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, CheckError> {
        Ok(Value::U16(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, CheckError> {
        Ok(Value::U32(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, CheckError> {
        Ok(Value::U64(v))
    }

    fn serialize_u128(self, _v: u128) -> Result<Value, CheckError> {
        Err(unsupported("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, CheckError> {
        Ok(Value::F32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, CheckError> {
        Ok(Value::F64(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, CheckError> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value, CheckError> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, CheckError> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, CheckError> {
        Ok(Value::Nil)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, CheckError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, CheckError> {
        Ok(Value::Unit)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, CheckError> {
        Ok(Value::Struct {
            name,
            fields: Vec::new(),
        })
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, CheckError> {
        Ok(Value::Variant {
            name,
            variant,
            payload: None,
        })
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, CheckError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, CheckError> {
        Ok(Value::Variant {
            name,
            variant,
            payload: Some(Box::new(capture(value)?)),
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCollector, CheckError> {
        Ok(SeqCollector::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCollector, CheckError> {
        Ok(SeqCollector::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqCollector, CheckError> {
        Ok(SeqCollector::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqCollector, CheckError> {
        Ok(VariantSeqCollector {
            name,
            variant,
            items: SeqCollector::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCollector, CheckError> {
        Ok(MapCollector {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<StructCollector, CheckError> {
        Ok(StructCollector {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantStructCollector, CheckError> {
        Ok(VariantStructCollector {
            name,
            inner: StructCollector {
                name: variant,
                fields: Vec::with_capacity(len),
            },
        })
    }
}

struct SeqCollector {
    items: Vec<Value>,
}

impl SeqCollector {
    fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        self.items.push(capture(value)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CheckError> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CheckError> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTupleStruct for SeqCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CheckError> {
        Ok(Value::Seq(self.items))
    }
}

struct VariantSeqCollector {
    name: &'static str,
    variant: &'static str,
    items: SeqCollector,
}

impl ser::SerializeTupleVariant for VariantSeqCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        self.items.push(value)
    }

    fn end(self) -> Result<Value, CheckError> {
        Ok(Value::Variant {
            name: self.name,
            variant: self.variant,
            payload: Some(Box::new(Value::Seq(self.items.items))),
        })
    }
}

struct MapCollector {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), CheckError> {
        if self.pending_key.is_some() {
            return Err(CheckError::Value(ErrorInfo::new(
                codes::VALUE_MAP_SHAPE,
                "map key emitted twice without a value",
            )));
        }
        self.pending_key = Some(capture(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CheckError> {
        let key = self.pending_key.take().ok_or_else(|| {
            CheckError::Value(ErrorInfo::new(
                codes::VALUE_MAP_SHAPE,
                "map value emitted before its key",
            ))
        })?;
        self.entries.push((key, capture(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, CheckError> {
        if self.pending_key.is_some() {
            return Err(CheckError::Value(ErrorInfo::new(
                codes::VALUE_MAP_SHAPE,
                "map ended with a dangling key",
            )));
        }
        Ok(Value::Map(self.entries))
    }
}

struct StructCollector {
    name: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl ser::SerializeStruct for StructCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CheckError> {
        self.fields.push((key, capture(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, CheckError> {
        Ok(Value::Struct {
            name: self.name,
            fields: self.fields,
        })
    }
}

struct VariantStructCollector {
    name: &'static str,
    inner: StructCollector,
}

impl ser::SerializeStructVariant for VariantStructCollector {
    type Ok = Value;
    type Error = CheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CheckError> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value, CheckError> {
        let variant = self.inner.name;
        Ok(Value::Variant {
            name: self.name,
            variant,
            payload: Some(Box::new(ser::SerializeStruct::end(self.inner)?)),
        })
    }
}
