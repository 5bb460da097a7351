#![no_std]

//! A bounds-checked decoder for versioned robot state snapshots.
//!
//! A snapshot is a little-endian record holding scalar fields, an optional
//! UTF-16 name, a sequence of coordinates, a log of optional UTF-8 commands,
//! and a trailing fixed-size point. Decoding either yields a complete
//! [`RobotState`] or an error; no partial record is ever produced.
//!
//! Most users should begin with [`avec::decode_slice`], or with
//! [`source::decode_file`] when the snapshot lives on disk (possibly
//! gzip-compressed). The underlying finite-state machine is exposed in the
//! [`sans`] module for applications that manage their own buffering.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable file loading, gzip decompression and writer-based encoding
//!   (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod avec;
pub mod sans;
#[cfg(feature = "std")]
pub mod source;
pub mod state;

pub use state::{Point, RobotState};
