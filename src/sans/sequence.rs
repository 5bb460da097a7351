//! States processing the coordinates and the command log.

use alloc::string::String;

use either::Either::{self, Left, Right};

use super::{
    field::{Field, LengthError, TextError, count, length},
    trailer::Trailer,
};

/// State token to decode the coordinate count.
#[derive(Debug)]
pub struct CoordinateCount(pub(super) ());

impl CoordinateCount {
    /// Transition to another state by decoding the coordinate count.
    ///
    /// A negative count reads as an empty sequence.
    ///
    /// Returns a successor state token, skipping to the command log if there
    /// are no coordinates.
    pub fn advance(self, r: [u8; 4]) -> Either<Coordinate, CommandCount> {
        let remaining = count(r);

        if remaining != 0 {
            Left(Coordinate { remaining })
        } else {
            Right(CommandCount(()))
        }
    }
}

/// State token to decode a coordinate.
#[derive(Debug)]
pub struct Coordinate {
    remaining: u32,
}

impl Coordinate {
    /// Number of coordinates left to decode, including this one.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Transition to another state by decoding a coordinate.
    ///
    /// Returns the coordinate, and a successor state token.
    pub fn advance(self, r: [u8; 8]) -> (f64, Either<Coordinate, CommandCount>) {
        let value = f64::from_le_bytes(r);

        let successor = if self.remaining > 1 {
            Left(Coordinate {
                remaining: self.remaining - 1,
            })
        } else {
            Right(CommandCount(()))
        };

        (value, successor)
    }
}

/// State token to decode the command count.
#[derive(Debug)]
pub struct CommandCount(pub(super) ());

impl CommandCount {
    /// Transition to another state by decoding the command count.
    ///
    /// A negative count reads as an empty log.
    ///
    /// Returns a successor state token, skipping to the trailer if the log is
    /// empty.
    pub fn advance(self, r: [u8; 4]) -> Either<Command, Trailer> {
        next_command(0, count(r))
    }
}

/// State token to decode the presence byte of a command log entry.
#[derive(Debug)]
pub struct Command {
    index: u32,
    count: u32,
}

impl Command {
    /// Position of this entry in the command log.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Number of entries left to decode, including this one.
    pub fn remaining(&self) -> u32 {
        self.count - self.index
    }

    /// Transition to another state by decoding an entry's presence byte.
    ///
    /// Any nonzero byte marks the entry as present. For an absent entry,
    /// returns the successor of the whole entry, as nothing more is encoded.
    pub fn advance(self, r: [u8; 1]) -> Either<CommandLength, Either<Command, Trailer>> {
        if r[0] != 0 {
            Left(CommandLength {
                index: self.index,
                count: self.count,
            })
        } else {
            Right(next_command(self.index + 1, self.count))
        }
    }
}

/// State token to decode the length of a present command.
#[derive(Debug)]
pub struct CommandLength {
    index: u32,
    count: u32,
}

impl CommandLength {
    /// Transition to another state by decoding the command length, counted in
    /// bytes.
    pub fn advance(self, r: [u8; 4]) -> Result<CommandText, LengthError> {
        let bytes = length(Field::Command(self.index), r)?;

        Ok(CommandText {
            index: self.index,
            count: self.count,
            bytes,
        })
    }
}

/// State token to decode the UTF-8 text of a command.
#[derive(Debug)]
pub struct CommandText {
    index: u32,
    count: u32,
    bytes: u32,
}

impl CommandText {
    /// Number of bytes expected by [`CommandText::advance`].
    pub fn size(&self) -> usize {
        self.bytes as usize
    }

    /// Transition to another state by decoding UTF-8 text.
    ///
    /// `r` must hold exactly [`CommandText::size`] bytes.
    ///
    /// Returns the command, and a successor state token.
    pub fn advance(self, r: &[u8]) -> Result<(String, Either<Command, Trailer>), TextError> {
        debug_assert_eq!(r.len(), self.size());

        let command = core::str::from_utf8(r).map_err(|cause| TextError {
            field: Field::Command(self.index),
            cause: cause.into(),
        })?;

        Ok((command.into(), next_command(self.index + 1, self.count)))
    }
}

fn next_command(index: u32, count: u32) -> Either<Command, Trailer> {
    if index < count {
        Left(Command { index, count })
    } else {
        Right(Trailer(()))
    }
}
