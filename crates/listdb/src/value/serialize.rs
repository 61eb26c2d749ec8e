use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use crate::{DESCRIPTION_MAX_DEPTH, List, Object, Timestamp, Value};

/// Value paired with the object nesting depth it is serialized at.
struct Nested<'a, T> {
    inner: &'a T,
    depth: usize,
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Nested {
            inner: self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

impl Serialize for Nested<'_, Value> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.inner {
            Value::Null => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Data(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for byte in v {
                    seq.serialize_element(byte)?;
                }
                seq.end()
            }
            Value::Date(v) => v.serialize(serializer),
            Value::Object(v) => Nested {
                inner: v,
                depth: self.depth,
            }
            .serialize(serializer),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Nested {
            inner: self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

/// Links nested deeper than the description depth serialize as null.
impl Serialize for Nested<'_, Object> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.depth >= DESCRIPTION_MAX_DEPTH {
            return serializer.serialize_none();
        }

        let fields = self.inner.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(
                key,
                &Nested {
                    inner: value,
                    depth: self.depth + 1,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("seconds", &self.seconds())?;
        map.serialize_entry("nanoseconds", &self.nanoseconds())?;
        map.end()
    }
}
