//! State processing the trailing point.

use zerocopy::FromBytes;

use crate::state::Point;

/// State token to decode the trailing point.
#[derive(Debug)]
pub struct Trailer(pub(super) ());

impl Trailer {
    /// Leave the finite-state machine by decoding the trailing point.
    ///
    /// Both coordinates are taken as one block, so a driver checks for all
    /// eight bytes before either is decoded.
    pub fn advance(self, r: [u8; 8]) -> Point {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct PointBytes {
            x: [u8; 4],
            y: [u8; 4],
        }

        let PointBytes { x, y } = zerocopy::transmute!(r);

        Point {
            x: i32::from_le_bytes(x),
            y: i32::from_le_bytes(y),
        }
    }
}
