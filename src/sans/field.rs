//! Field identifiers and errors shared by length-prefixed states.

use core::{char::DecodeUtf16Error, fmt, str::Utf8Error};

use thiserror::Error;

/// A variable-length field of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Coordinates,
    CommandLog,
    /// An entry of the command log, by position.
    Command(u32),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Coordinates => f.write_str("coordinates"),
            Field::CommandLog => f.write_str("command log"),
            Field::Command(index) => write!(f, "command {index}"),
        }
    }
}

/// An error advancing over a text length prefix.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Negative length ({length}) for {field}.")]
pub struct LengthError {
    pub field: Field,
    pub length: i32,
}

/// The reason text could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextCause {
    /// Unpaired surrogate in UTF-16 text.
    #[error(transparent)]
    Utf16(#[from] DecodeUtf16Error),
    /// Invalid UTF-8 text.
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

/// An error advancing over the text of a field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Malformed text for {field}: {cause}.")]
pub struct TextError {
    pub field: Field,
    #[source]
    pub cause: TextCause,
}

/// Decode a signed 32-bit length prefix, rejecting negative values.
pub(super) fn length(field: Field, r: [u8; 4]) -> Result<u32, LengthError> {
    let length = i32::from_le_bytes(r);
    u32::try_from(length).map_err(|_| LengthError { field, length })
}

/// Decode a signed 32-bit count prefix. Negative counts read as zero.
pub(super) fn count(r: [u8; 4]) -> u32 {
    i32::from_le_bytes(r).max(0) as u32
}
