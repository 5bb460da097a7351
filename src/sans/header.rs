//! States processing the version header and fixed-size fields.

use thiserror::Error;

use super::name::NamePresence;

/// The only protocol version understood by the decoder.
pub const PROTOCOL_VERSION: i32 = 1;

/// An error advancing over a version header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Unrecognised protocol version.
    #[error("Unsupported protocol version ({0}).")]
    UnsupportedVersion(i32),
}

/// State token to decode a version header.
#[derive(Debug)]
pub struct Header;

impl Header {
    /// Transition to another state by decoding a version header.
    ///
    /// Returns the protocol version, and a successor state token.
    pub fn advance(r: [u8; 4]) -> Result<(i32, Identity), HeaderError> {
        let version = i32::from_le_bytes(r);

        if version != PROTOCOL_VERSION {
            Err(HeaderError::UnsupportedVersion(version))?;
        }

        Ok((version, Identity(())))
    }
}

/// State token to decode the identifier.
#[derive(Debug)]
pub struct Identity(pub(super) ());

impl Identity {
    /// Transition to another state by decoding the identifier.
    pub fn advance(self, r: [u8; 4]) -> (i32, PositionX) {
        (i32::from_le_bytes(r), PositionX(()))
    }
}

/// State token to decode the first position component.
#[derive(Debug)]
pub struct PositionX(pub(super) ());

impl PositionX {
    /// Transition to another state by decoding the first position component.
    pub fn advance(self, r: [u8; 8]) -> (f64, PositionY) {
        (f64::from_le_bytes(r), PositionY(()))
    }
}

/// State token to decode the second position component.
#[derive(Debug)]
pub struct PositionY(pub(super) ());

impl PositionY {
    /// Transition to another state by decoding the second position component.
    pub fn advance(self, r: [u8; 8]) -> (f64, Activity) {
        (f64::from_le_bytes(r), Activity(()))
    }
}

/// State token to decode the activity flag.
#[derive(Debug)]
pub struct Activity(pub(super) ());

impl Activity {
    /// Transition to another state by decoding the activity flag.
    ///
    /// The flag is set only by a byte equal to one; any other value reads as
    /// inactive.
    pub fn advance(self, r: [u8; 1]) -> (bool, NamePresence) {
        (r[0] == 1, NamePresence(()))
    }
}
