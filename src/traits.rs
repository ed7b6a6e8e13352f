#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;
use crate::json::JsonValue;
use crate::writer::{WriterContext, WriterOptions};

pub trait Serialize {
    fn serialize(&self) -> Result<Vec<u8>> {
        self.serialize_with_options(&WriterOptions::default())
    }
    fn format(&self, indent: u32) -> Result<Vec<u8>> {
        self.serialize_with_options(&WriterOptions {
            indent,
            ..Default::default()
        })
    }
    /// Render into a fresh buffer, honoring every option including the
    /// trailing newline.
    fn serialize_with_options(&self, options: &WriterOptions) -> Result<Vec<u8>> {
        let mut res = Vec::new();
        self.serialize_to(&mut res, &WriterContext::new(options.clone())?)?;
        if options.trailing_newline {
            res.push(b'\n');
        }
        Ok(res)
    }
    fn serialize_to(&self, buffer: &mut Vec<u8>, context: &WriterContext) -> Result<()>;
}

pub trait IntoJson {
    fn into_json(self) -> JsonValue;
}
