#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::error::{Error, Result};
use crate::json::{JsonValue, NumberValue};
use crate::traits::Serialize;

#[cfg_attr(feature = "std", derive(Debug, PartialEq, Eq))]
#[derive(Clone)]
pub struct WriterOptions {
    /// Spaces per nesting level. Zero renders compact output.
    pub indent: u32,
    pub trailing_newline: bool,
    pub max_nest_level: Option<u32>,
}

impl WriterOptions {
    pub const MAX_INDENT: u32 = 32;
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: 0,
            trailing_newline: true,
            max_nest_level: Some(100),
        }
    }
}

#[cfg_attr(feature = "std", derive(Debug, PartialEq, Eq))]
#[derive(Clone)]
pub struct WriterContext {
    nest_level: u32,
    options: WriterOptions,
}

impl WriterContext {
    pub fn new(options: WriterOptions) -> Result<Self> {
        if options.indent > WriterOptions::MAX_INDENT {
            return Err(Error::InvalidIndent {
                indent: options.indent,
            });
        }
        Ok(Self {
            nest_level: 0,
            options,
        })
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn nest_level(&self) -> u32 {
        self.nest_level
    }

    pub fn nest(&self) -> Result<Self> {
        if Some(self.nest_level) == self.options.max_nest_level {
            Err(Error::ExceededNestLevel {
                level: self.nest_level,
            })
        } else {
            Ok(Self {
                nest_level: self.nest_level + 1,
                options: self.options.clone(),
            })
        }
    }

    fn pretty(&self) -> bool {
        self.options.indent > 0
    }

    fn write_indent(&self, buffer: &mut Vec<u8>) {
        if self.pretty() {
            buffer.push(b'\n');
            let width = (self.nest_level as usize).saturating_mul(self.options.indent as usize);
            buffer.extend(core::iter::repeat(b' ').take(width));
        }
    }
}

const HEX: &[u8; 16] = b"0123456789abcdef";

pub fn write_string(value: &str, buffer: &mut Vec<u8>) {
    buffer.push(b'"');
    for c in value.chars() {
        match c {
            '"' => buffer.extend_from_slice(b"\\\""),
            '\\' => buffer.extend_from_slice(b"\\\\"),
            '\u{0008}' => buffer.extend_from_slice(b"\\b"),
            '\u{000C}' => buffer.extend_from_slice(b"\\f"),
            '\n' => buffer.extend_from_slice(b"\\n"),
            '\r' => buffer.extend_from_slice(b"\\r"),
            '\t' => buffer.extend_from_slice(b"\\t"),
            c if (c as u32) < 0x20 => {
                let b = c as u8;
                buffer.extend_from_slice(b"\\u00");
                buffer.push(HEX[(b >> 4) as usize]);
                buffer.push(HEX[(b & 0xf) as usize]);
            }
            c => {
                let mut utf8 = [0u8; 4];
                buffer.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buffer.push(b'"');
}

pub(crate) fn write_object<'a, I>(
    members: I,
    buffer: &mut Vec<u8>,
    context: &WriterContext,
) -> Result<()>
where
    I: ExactSizeIterator<Item = (&'a str, &'a JsonValue)>,
{
    let inner = context.nest()?;
    buffer.push(b'{');
    if members.len() == 0 {
        buffer.push(b'}');
        return Ok(());
    }
    for (i, (key, value)) in members.enumerate() {
        if i > 0 {
            buffer.push(b',');
        }
        inner.write_indent(buffer);
        write_string(key, buffer);
        buffer.push(b':');
        if inner.pretty() {
            buffer.push(b' ');
        }
        value.serialize_to(buffer, &inner)?;
    }
    context.write_indent(buffer);
    buffer.push(b'}');
    Ok(())
}

fn write_array(elements: &[JsonValue], buffer: &mut Vec<u8>, context: &WriterContext) -> Result<()> {
    let inner = context.nest()?;
    buffer.push(b'[');
    if elements.is_empty() {
        buffer.push(b']');
        return Ok(());
    }
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            buffer.push(b',');
        }
        inner.write_indent(buffer);
        element.serialize_to(buffer, &inner)?;
    }
    context.write_indent(buffer);
    buffer.push(b']');
    Ok(())
}

impl Serialize for NumberValue {
    fn serialize_to(&self, buffer: &mut Vec<u8>, _context: &WriterContext) -> Result<()> {
        let text = match *self {
            NumberValue::Integer(i) => i.to_string(),
            NumberValue::Unsigned(u) => u.to_string(),
            NumberValue::Float(f) => {
                if !f.is_finite() {
                    return Err(Error::NonFiniteNumber { value: f });
                }
                // Display never uses exponent notation, so integral floats lack a '.'
                let mut text = f.to_string();
                if !text.contains('.') {
                    text.push_str(".0");
                }
                text
            }
        };
        buffer.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

impl Serialize for JsonValue {
    fn serialize_to(&self, buffer: &mut Vec<u8>, context: &WriterContext) -> Result<()> {
        match self {
            JsonValue::Object(obj) => {
                write_object(obj.iter().map(|(k, v)| (k.as_str(), v)), buffer, context)
            }
            JsonValue::Array(arr) => write_array(arr, buffer, context),
            JsonValue::String(s) => {
                write_string(s, buffer);
                Ok(())
            }
            JsonValue::Number(n) => n.serialize_to(buffer, context),
            JsonValue::Boolean(true) => {
                buffer.extend_from_slice(b"true");
                Ok(())
            }
            JsonValue::Boolean(false) => {
                buffer.extend_from_slice(b"false");
                Ok(())
            }
            JsonValue::Null => {
                buffer.extend_from_slice(b"null");
                Ok(())
            }
        }
    }
}
