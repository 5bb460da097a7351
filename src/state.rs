//! Decoded snapshot records.

use alloc::{string::String, vec::Vec};

/// A decoded robot state snapshot.
///
/// The record owns all of its data. Fields appear in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotState {
    /// Protocol version discriminator. Always
    /// [`PROTOCOL_VERSION`](crate::sans::header::PROTOCOL_VERSION) once decoded.
    pub protocol_version: i32,
    /// Robot identifier (`int32`).
    pub id: i32,
    /// Horizontal position (`float64`).
    pub position_x: f64,
    /// Vertical position (`float64`).
    pub position_y: f64,
    /// Activity flag, set only by a wire byte of one.
    pub is_active: bool,
    /// Optional name, encoded as length-prefixed UTF-16LE.
    pub name: Option<String>,
    /// Count-prefixed sequence of `float64` values.
    pub coordinates: Vec<f64>,
    /// Commands in the order they were logged, each length-prefixed UTF-8;
    /// `None` marks an absent entry.
    pub command_log: Vec<Option<String>>,
    /// Trailing fixed-size point.
    pub point: Point,
}

/// The fixed trailing sub-record of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal component (`int32`).
    pub x: i32,
    /// Vertical component (`int32`).
    pub y: i32,
}
