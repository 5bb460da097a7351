//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that manage their own buffering.
//! See [`crate::avec`] for a complete decoder over byte slices.
//!
//! # Architecture
//!
//! All states are represented by a small, non-copy token. Once enough bytes
//! are ready, transition to another state by calling the token's `advance`
//! method. This will return a successor state token, along with any extracted
//! data.
//!
//! Most tokens consume a fixed-size array, so the number of bytes to supply is
//! visible in the signature of `advance`. Text states consume a slice instead;
//! their `size` method reports how many bytes they expect.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. The states visit the snapshot in wire order:
//!
//! 1. [`header::Header`] checks the protocol version.
//! 2. [`header::Identity`], [`header::PositionX`], [`header::PositionY`] and
//!    [`header::Activity`] decode the fixed-size fields one at a time.
//! 3. [`name::NamePresence`], then optionally [`name::NameLength`] and
//!    [`name::NameText`], decode the name.
//! 4. [`sequence::CoordinateCount`] and [`sequence::Coordinate`] decode the
//!    coordinates.
//! 5. [`sequence::CommandCount`], [`sequence::Command`],
//!    [`sequence::CommandLength`] and [`sequence::CommandText`] decode the
//!    command log.
//! 6. [`trailer::Trailer`] decodes the point and ends the machine.
//!
//! The machine does not see the buffer, so some areas of the decoding process
//! must be carefully written by the driver:
//!
//! - Reading bytes from the correct place in the buffer, and checking that
//! enough bytes remain before handing them to a token.
//!
//! - Bounding any allocation made from a decoded count by the bytes actually
//! available.

pub mod field;
pub mod header;
pub mod name;
pub mod sequence;
pub mod trailer;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::Header;
