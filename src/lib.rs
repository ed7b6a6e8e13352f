#![cfg_attr(not(feature = "std"), no_std)]

pub use crate::error::{Error, Result};
pub use crate::fields::{Elements, Fields};
pub use crate::json::{JsonObject, JsonValue, NumberValue};
pub use crate::serializer::Serializer;
pub use crate::traits::{IntoJson, Serialize};
pub use crate::writer::{WriterContext, WriterOptions};

pub mod error;
pub mod fields;
pub mod json;
pub mod serializer;
pub mod traits;
pub mod writer;

mod impls;

/// Release of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
