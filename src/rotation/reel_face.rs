#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement of one digit face on a spinning reel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelFace {
    /// Vertical offset in percent of the face's own height.
    pub y_percent: f64,
    pub opacity: f64,
}

/// Project the face showing `face` (0-9) for a reel currently at `position`.
///
/// Faces are arranged cyclically around the reel; the face being shown sits
/// at offset 0, neighbours above and below fade out over one face height.
#[must_use]
pub fn reel_face(face: u8, position: f64) -> ReelFace {
    let mut offset = (f64::from(face) - position).rem_euclid(10.0);
    if offset > 5.0 {
        offset -= 10.0;
    }

    ReelFace {
        y_percent: -offset * 100.0,
        opacity: (1.0 - offset.abs()).max(0.0),
    }
}
