#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl NumberValue {
    /// Convert the inner value to `f64`. Large integers may lose precision.
    pub fn to_f64(self) -> f64 {
        self.into()
    }

    /// Whether the value has a JSON representation.
    pub fn is_finite(&self) -> bool {
        match self {
            NumberValue::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl From<NumberValue> for f64 {
    fn from(value: NumberValue) -> f64 {
        match value {
            NumberValue::Integer(i) => i as f64,
            NumberValue::Unsigned(u) => u as f64,
            NumberValue::Float(f) => f,
        }
    }
}

pub type JsonObject = Vec<(String, JsonValue)>;

#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Clone, PartialEq)]
pub enum JsonValue {
    Object(JsonObject),
    Array(Vec<JsonValue>),
    String(String),
    Number(NumberValue),
    Boolean(bool),
    Null,
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}
