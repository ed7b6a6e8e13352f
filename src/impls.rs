#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{
    borrow::Cow,
    boxed::Box,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{borrow::Cow, collections::BTreeMap};

use num_traits::ToPrimitive;

use crate::json::{JsonValue, NumberValue};
use crate::traits::IntoJson;

impl IntoJson for JsonValue {
    fn into_json(self) -> JsonValue {
        self
    }
}

impl IntoJson for NumberValue {
    fn into_json(self) -> JsonValue {
        JsonValue::Number(self)
    }
}

impl IntoJson for bool {
    fn into_json(self) -> JsonValue {
        JsonValue::Boolean(self)
    }
}

impl IntoJson for () {
    fn into_json(self) -> JsonValue {
        JsonValue::Null
    }
}

impl IntoJson for &str {
    fn into_json(self) -> JsonValue {
        JsonValue::String(self.into())
    }
}

impl IntoJson for String {
    fn into_json(self) -> JsonValue {
        JsonValue::String(self)
    }
}

impl IntoJson for &String {
    fn into_json(self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl IntoJson for Cow<'_, str> {
    fn into_json(self) -> JsonValue {
        JsonValue::String(self.into_owned())
    }
}

impl IntoJson for char {
    fn into_json(self) -> JsonValue {
        let mut s = String::new();
        s.push(self);
        JsonValue::String(s)
    }
}

macro_rules! impl_signed {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoJson for $t {
                fn into_json(self) -> JsonValue {
                    JsonValue::Number(NumberValue::Integer(self as i64))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoJson for $t {
                fn into_json(self) -> JsonValue {
                    JsonValue::Number(NumberValue::Unsigned(self as u64))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

// Platform-sized and 128-bit integers keep exact integers when they fit.
macro_rules! impl_wide {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoJson for $t {
                fn into_json(self) -> JsonValue {
                    let number = if let Some(i) = self.to_i64() {
                        NumberValue::Integer(i)
                    } else if let Some(u) = self.to_u64() {
                        NumberValue::Unsigned(u)
                    } else {
                        NumberValue::Float(self.to_f64().unwrap_or(f64::NAN))
                    };
                    JsonValue::Number(number)
                }
            }
        )*
    };
}

impl_wide!(isize, usize, i128, u128);

impl IntoJson for f32 {
    /// Widens through the shortest decimal text so `0.1f32` stays `0.1`.
    fn into_json(self) -> JsonValue {
        let widened = self.to_string().parse::<f64>().unwrap_or(self as f64);
        JsonValue::Number(NumberValue::Float(widened))
    }
}

impl IntoJson for f64 {
    fn into_json(self) -> JsonValue {
        JsonValue::Number(NumberValue::Float(self))
    }
}

impl<T: IntoJson> IntoJson for Option<T> {
    fn into_json(self) -> JsonValue {
        match self {
            Some(value) => value.into_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: IntoJson> IntoJson for Box<T> {
    fn into_json(self) -> JsonValue {
        (*self).into_json()
    }
}

impl<T: IntoJson> IntoJson for Vec<T> {
    fn into_json(self) -> JsonValue {
        JsonValue::Array(self.into_iter().map(IntoJson::into_json).collect())
    }
}

impl<T: IntoJson, const N: usize> IntoJson for [T; N] {
    fn into_json(self) -> JsonValue {
        JsonValue::Array(self.into_iter().map(IntoJson::into_json).collect())
    }
}

impl<T: IntoJson + Clone> IntoJson for &[T] {
    fn into_json(self) -> JsonValue {
        JsonValue::Array(self.iter().cloned().map(IntoJson::into_json).collect())
    }
}

impl<K: Into<String>, V: IntoJson> IntoJson for BTreeMap<K, V> {
    fn into_json(self) -> JsonValue {
        JsonValue::Object(
            self.into_iter()
                .map(|(k, v)| (k.into(), v.into_json()))
                .collect(),
        )
    }
}
