//! Ordered field collection used by [`Serializer::serialize`](crate::Serializer::serialize).

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::error::Result;
use crate::json::{JsonObject, JsonValue};
use crate::serializer::Serializer;
use crate::traits::{IntoJson, Serialize};
use crate::writer::{write_object, WriterContext};

/// The fields declared during one serialization call, in `put` order.
///
/// Putting a name that is already present replaces its value and keeps the
/// original position. Lookups scan the entries linearly, so `put` is O(n)
/// and declaring n fields is O(n²); serializers declare a handful of fields.
#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Clone, Default, PartialEq)]
pub struct Fields {
    entries: JsonObject,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<N: Into<String>, V: IntoJson>(&mut self, name: N, value: V) -> &mut Self {
        let name = name.into();
        let value = value.into_json();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => {
                tracing::trace!(field = %name, "overwriting field");
                entry.1 = value;
            }
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Put a nested object whose fields are declared by `build`.
    pub fn put_object<N, F>(&mut self, name: N, build: F) -> &mut Self
    where
        N: Into<String>,
        F: FnOnce(&mut Fields),
    {
        let mut nested = Fields::new();
        build(&mut nested);
        self.put(name, nested)
    }

    /// Put a nested array whose elements are pushed by `build`.
    pub fn put_array<N, F>(&mut self, name: N, build: F) -> &mut Self
    where
        N: Into<String>,
        F: FnOnce(&mut Elements),
    {
        let mut elements = Elements::new();
        build(&mut elements);
        self.put(name, elements)
    }

    /// Put the fields another serializer declares for `args` as a nested object.
    pub fn put_serializer<N, S, A>(&mut self, name: N, serializer: &S, args: A) -> &mut Self
    where
        N: Into<String>,
        S: Serializer<A> + ?Sized,
    {
        let nested = serializer.to_json_data(args);
        self.put(name, nested)
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<N: Into<String>, V: IntoJson> Extend<(N, V)> for Fields {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.put(name, value);
        }
    }
}

impl IntoJson for Fields {
    fn into_json(self) -> JsonValue {
        JsonValue::Object(self.entries)
    }
}

impl Serialize for Fields {
    fn serialize_to(&self, buffer: &mut Vec<u8>, context: &WriterContext) -> Result<()> {
        write_object(
            self.entries.iter().map(|(k, v)| (k.as_str(), v)),
            buffer,
            context,
        )
    }
}

/// Elements of a nested array built with [`Fields::put_array`].
#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Clone, Default, PartialEq)]
pub struct Elements {
    values: Vec<JsonValue>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: IntoJson>(&mut self, value: V) -> &mut Self {
        self.values.push(value.into_json());
        self
    }

    pub fn push_object<F: FnOnce(&mut Fields)>(&mut self, build: F) -> &mut Self {
        let mut nested = Fields::new();
        build(&mut nested);
        self.push(nested)
    }

    pub fn push_array<F: FnOnce(&mut Elements)>(&mut self, build: F) -> &mut Self {
        let mut nested = Elements::new();
        build(&mut nested);
        self.push(nested)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoJson for Elements {
    fn into_json(self) -> JsonValue {
        JsonValue::Array(self.values)
    }
}
