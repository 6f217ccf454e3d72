mod alignment;
mod calligraph;
mod config;
mod numeric;
mod reconcile;
mod rotation;
mod types;
mod utils;

pub use alignment::{AlignedPair, align_sequences};
pub use calligraph::{Calligraph, DIGIT_DISTANCE, Frame, Glyph, Offset, ReelFrame, SlotKey};
pub use config::{
    Animation, CalligraphConfig, ConfigError, DEFAULT_STAGGER, Drift, Transition, Variant,
};
pub use numeric::parse_magnitude;
pub use reconcile::{DigitReconciliation, TextReconciliation, reconcile_digits, reconcile_text};
pub use rotation::{
    ColumnRotation, ReelExit, ReelFace, ReelSet, SPIN_DISTANCE, reel_face, rotation_delta,
};
pub use types::{
    content::Content, direction::Direction, identity_key::IdentityKey, identity_map::IdentityMap,
};

#[cfg(feature = "wasm")]
pub mod wasm;
