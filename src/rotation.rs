mod column_rotation;
mod reel_face;
mod reel_set;

pub use column_rotation::{ColumnRotation, SPIN_DISTANCE, rotation_delta};
pub use reel_face::{ReelFace, reel_face};
pub use reel_set::{ReelExit, ReelSet};
