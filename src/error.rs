#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::string::FromUtf8Error;
#[cfg(feature = "std")]
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures raised while rendering collected fields to JSON text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// NaN and the infinities have no JSON representation.
    #[error("cannot serialize non-finite number {value}")]
    NonFiniteNumber { value: f64 },

    #[error("exceeded nest level {level}")]
    ExceededNestLevel { level: u32 },

    #[error("indent {indent} exceeds the maximum of {} spaces", crate::writer::WriterOptions::MAX_INDENT)]
    InvalidIndent { indent: u32 },

    #[error("rendered text is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = core::result::Result<T, Error>;
