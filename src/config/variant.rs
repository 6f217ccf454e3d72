use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::config_error::ConfigError;

/// How the displayed string is treated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Prose: characters are matched with an LCS alignment and fade/drift in
    /// and out.
    #[default]
    Text,
    /// Formatted numbers: digits are matched by column and roll vertically in
    /// the direction of the change.
    Number,
    /// Formatted numbers rendered as slot-machine reels that keep spinning
    /// across updates.
    Slots,
}

impl Variant {
    /// Whether strings are reconciled column-wise as numbers.
    #[must_use]
    pub fn is_numeric(self) -> bool { matches!(self, Variant::Number | Variant::Slots) }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Variant::Text),
            "number" => Ok(Variant::Number),
            "slots" => Ok(Variant::Slots),
            other => Err(ConfigError::UnknownVariant(other.to_owned())),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Text => write!(f, "text"),
            Variant::Number => write!(f, "number"),
            Variant::Slots => write!(f, "slots"),
        }
    }
}
