//! Encoder producing the snapshot wire format.
//!
//! The output of [`to_vec`] decodes back to an equal record, provided its
//! protocol version is [`PROTOCOL_VERSION`](crate::sans::header::PROTOCOL_VERSION).
//! The version is written as given, so the decoder remains the only version
//! gate.

use alloc::vec::Vec;

use thiserror::Error;

use crate::{sans::field::Field, state::RobotState};

/// Errors occurring while encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// A string or sequence is too long for its signed 32-bit prefix.
    #[error("Length ({length}) of {field} exceeds the 32-bit prefix.")]
    LengthOverflow { field: Field, length: usize },
    /// An error from the supplied writer.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Encode a snapshot into a new buffer.
pub fn to_vec(state: &RobotState) -> Result<Vec<u8>, Error> {
    let mut o = Vec::new();

    o.extend_from_slice(&state.protocol_version.to_le_bytes());
    o.extend_from_slice(&state.id.to_le_bytes());
    o.extend_from_slice(&state.position_x.to_le_bytes());
    o.extend_from_slice(&state.position_y.to_le_bytes());
    o.push(state.is_active.into());

    match &state.name {
        Some(name) => {
            o.push(1);
            put_length(&mut o, Field::Name, name.encode_utf16().count())?;
            for unit in name.encode_utf16() {
                o.extend_from_slice(&unit.to_le_bytes());
            }
        }
        None => o.push(0),
    }

    put_length(&mut o, Field::Coordinates, state.coordinates.len())?;
    for value in &state.coordinates {
        o.extend_from_slice(&value.to_le_bytes());
    }

    put_length(&mut o, Field::CommandLog, state.command_log.len())?;
    for (index, command) in state.command_log.iter().enumerate() {
        match command {
            Some(command) => {
                o.push(1);
                // The log length already fits an i32, so the index does too.
                put_length(&mut o, Field::Command(index as u32), command.len())?;
                o.extend_from_slice(command.as_bytes());
            }
            None => o.push(0),
        }
    }

    o.extend_from_slice(&state.point.x.to_le_bytes());
    o.extend_from_slice(&state.point.y.to_le_bytes());

    Ok(o)
}

/// Encode a snapshot to a writer.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn to_writer(w: &mut impl std::io::Write, state: &RobotState) -> Result<(), Error> {
    w.write_all(&to_vec(state)?)?;

    Ok(())
}

/// Append a signed 32-bit length prefix.
fn put_length(o: &mut Vec<u8>, field: Field, length: usize) -> Result<(), Error> {
    let prefix = i32::try_from(length).map_err(|_| Error::LengthOverflow { field, length })?;
    o.extend_from_slice(&prefix.to_le_bytes());

    Ok(())
}
