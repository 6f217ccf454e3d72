#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::{Transition, Variant},
    rotation::ReelExit,
    types::{direction::Direction, identity_key::IdentityKey},
};

/// Everything a renderer needs to draw the current text and animate the
/// transition that led to it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub variant: Variant,
    /// One glyph per character of `text`.
    pub glyphs: Vec<Glyph>,
    /// Keys that disappeared with the last update and should animate out.
    pub retired: Vec<IdentityKey>,
    /// Reels that disappeared with the last update (slots variant only).
    pub retired_reels: Vec<ReelExit>,
    pub change_ratio: f64,
    pub direction: Direction,
    pub transition: Transition,
}

/// A single rendered character.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Identity of this character occurrence.
    pub key: IdentityKey,
    /// Key of the element wrapping the character in a keyed list.
    pub slot: SlotKey,
    pub character: char,
    /// Seconds to wait before animating.
    pub delay: f64,
    /// Offset the glyph starts from when it enters.
    pub enter: Offset,
    /// Offset the glyph moves to when it exits.
    pub exit: Offset,
    pub reel: Option<ReelFrame>,
    /// Set on the glyph whose finished animation ends the whole transition.
    pub completes: bool,
}

/// Layout key of the element holding a glyph.
///
/// Text is keyed by character identity. Numbers keep one element per prefix
/// position and per column counted from the right, and swap the characters
/// inside them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Character(IdentityKey),
    Prefix(usize),
    Column(usize),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn vertical(y: f64) -> Self { Self { x: 0.0, y } }
}

/// Reel motion of a slot-machine digit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelFrame {
    pub column: usize,
    pub digit: u8,
    /// Position to spin in from; `None` when the reel is already in place.
    pub from: Option<f64>,
    /// Position to animate towards.
    pub target: f64,
}
