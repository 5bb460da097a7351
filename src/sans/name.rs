//! States processing the optional name.

use alloc::string::String;

use either::Either::{self, Left, Right};

use super::{
    field::{Field, LengthError, TextError, length},
    sequence::CoordinateCount,
};

/// State token to decode the name presence byte.
#[derive(Debug)]
pub struct NamePresence(pub(super) ());

impl NamePresence {
    /// Transition to another state by decoding the name presence byte.
    ///
    /// Any nonzero byte marks the name as present. An absent name has no
    /// length or text, so the successor skips straight to the coordinates.
    pub fn advance(self, r: [u8; 1]) -> Either<NameLength, CoordinateCount> {
        if r[0] != 0 {
            Left(NameLength(()))
        } else {
            Right(CoordinateCount(()))
        }
    }
}

/// State token to decode the length of a present name.
#[derive(Debug)]
pub struct NameLength(pub(super) ());

impl NameLength {
    /// Transition to another state by decoding the name length, counted in
    /// UTF-16 code units.
    pub fn advance(self, r: [u8; 4]) -> Result<NameText, LengthError> {
        let units = length(Field::Name, r)?;

        Ok(NameText { units })
    }
}

/// State token to decode the UTF-16 text of a name.
#[derive(Debug)]
pub struct NameText {
    units: u32,
}

impl NameText {
    /// Number of bytes expected by [`NameText::advance`].
    pub fn size(&self) -> usize {
        self.units as usize * 2
    }

    /// Transition to another state by decoding little-endian UTF-16 text.
    ///
    /// `r` must hold exactly [`NameText::size`] bytes.
    ///
    /// Returns the name, and a successor state token.
    pub fn advance(self, r: &[u8]) -> Result<(String, CoordinateCount), TextError> {
        debug_assert_eq!(r.len(), self.size());

        let units = r.chunks_exact(2).map(|u| u16::from_le_bytes([u[0], u[1]]));

        let name = char::decode_utf16(units)
            .collect::<Result<String, _>>()
            .map_err(|cause| TextError {
                field: Field::Name,
                cause: cause.into(),
            })?;

        Ok((name, CoordinateCount(())))
    }
}
