//! Slice-based decoder implementation.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    sans::{
        Decoder,
        field::{Field, LengthError, TextCause, TextError},
        header::HeaderError,
    },
    state::RobotState,
};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Unrecognised protocol version.
    #[error("Unsupported protocol version ({got}).")]
    UnsupportedVersion { got: i32 },
    /// A read would pass the end of the slice.
    #[error("Buffer too short: needed {needed} bytes, found {available}.")]
    BufferTooShort { needed: usize, available: usize },
    /// Text of a field could not be decoded.
    #[error("Malformed text for {field}: {cause}.")]
    MalformedText {
        field: Field,
        #[source]
        cause: TextCause,
    },
    /// A text length prefix was negative.
    #[error("Negative length ({length}) for {field}.")]
    NegativeLength { field: Field, length: i32 },
}

impl From<HeaderError> for Error {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::UnsupportedVersion(got) => Self::UnsupportedVersion { got },
        }
    }
}

impl From<LengthError> for Error {
    fn from(LengthError { field, length }: LengthError) -> Self {
        Self::NegativeLength { field, length }
    }
}

impl From<TextError> for Error {
    fn from(TextError { field, cause }: TextError) -> Self {
        Self::MalformedText { field, cause }
    }
}

/// Decode a snapshot from a slice.
///
/// Bytes past the trailing point are ignored.
///
/// This method is also re-exported as `robot_state::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Result<RobotState, Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    debug!(size = r.len(), leading = ?&r[..r.len().min(4)], "Decoding robot state.");

    let (protocol_version, state) = Decoder::advance(take(r, i)?)?;
    let (id, state) = state.advance(take(r, i)?);
    let (position_x, state) = state.advance(take(r, i)?);
    let (position_y, state) = state.advance(take(r, i)?);
    let (is_active, name_presence) = state.advance(take(r, i)?);

    let (name, coordinate_count) = match name_presence.advance(take(r, i)?) {
        Left(state) => {
            let state = state.advance(take(r, i)?)?;
            let size = state.size();
            trace!(offset = *i, size, "Decoding name.");

            let (name, successor) = state.advance(take_slice(r, i, size)?)?;
            (Some(name), successor)
        }
        Right(state) => (None, state),
    };

    let mut coordinates = Vec::new();

    let command_count = match coordinate_count.advance(take(r, i)?) {
        Left(mut state) => {
            trace!(offset = *i, count = state.remaining(), "Decoding coordinates.");

            // Never reserve more than the rest of the slice could hold.
            coordinates.reserve((state.remaining() as usize).min((r.len() - *i) / 8));

            loop {
                let (value, successor) = state.advance(take(r, i)?);
                coordinates.push(value);

                state = match successor {
                    Left(state) => state,
                    Right(state) => break state,
                };
            }
        }
        Right(state) => state,
    };

    let mut command_log = Vec::new();

    let trailer = match command_count.advance(take(r, i)?) {
        Left(mut state) => {
            trace!(offset = *i, count = state.remaining(), "Decoding command log.");

            command_log.reserve((state.remaining() as usize).min(r.len() - *i));

            loop {
                let successor = match state.advance(take(r, i)?) {
                    Left(state) => {
                        let state = state.advance(take(r, i)?)?;
                        let size = state.size();

                        let (command, successor) = state.advance(take_slice(r, i, size)?)?;
                        command_log.push(Some(command));
                        successor
                    }
                    Right(successor) => {
                        command_log.push(None);
                        successor
                    }
                };

                state = match successor {
                    Left(state) => state,
                    Right(state) => break state,
                };
            }
        }
        Right(state) => state,
    };

    let point = trailer.advance(take(r, i)?);

    Ok(RobotState {
        protocol_version,
        id,
        position_x,
        position_y,
        is_active,
        name,
        coordinates,
        command_log,
        point,
    })
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    buf.copy_from_slice(take_slice(r, i, N)?);

    Ok(buf)
}

/// Take `n` bytes from an offset in a slice, advancing the offset.
///
/// The offset is left untouched if fewer than `n` bytes remain.
fn take_slice<'a>(r: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8], Error> {
    let end = i.saturating_add(n);

    let bytes = r.get(*i..end).ok_or(Error::BufferTooShort {
        needed: end,
        available: r.len(),
    })?;
    *i = end;

    Ok(bytes)
}
