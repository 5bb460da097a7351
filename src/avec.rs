//! Convenience interfaces for decoding and encoding snapshots.
//!
//! [`decode_slice`] walks the finite-state machine in [`crate::sans`] over a
//! fully loaded buffer, producing an owned [`RobotState`](crate::RobotState).
//! The [`encode`] module writes the same wire format back out.

pub mod encode;
pub mod slice;

pub use slice::{Error as DecodeError, decode as decode_slice};
