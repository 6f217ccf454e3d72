use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::config_error::ConfigError;

/// Named timing presets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    Default,
    Smooth,
    Snappy,
    Bouncy,
}

/// Plain description of a timing curve, handed to whatever animation engine
/// drives the rendering.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Fixed-duration tween along a cubic bezier easing curve.
    Tween { duration: f64, ease: [f64; 4] },
    /// Spring with a perceived duration and a bounce in `[0, 1]`.
    Spring { duration: f64, bounce: f64 },
}

impl Animation {
    #[must_use]
    pub fn transition(self) -> Transition {
        match self {
            Animation::Default => Transition::Tween {
                duration: 0.38,
                ease: [0.19, 1.0, 0.22, 1.0],
            },
            Animation::Smooth => Transition::Spring {
                duration: 0.5,
                bounce: 0.0,
            },
            Animation::Snappy => Transition::Spring {
                duration: 0.35,
                bounce: 0.15,
            },
            Animation::Bouncy => Transition::Spring {
                duration: 0.5,
                bounce: 0.3,
            },
        }
    }
}

impl Transition {
    #[must_use]
    pub fn duration(&self) -> f64 {
        match self {
            Transition::Tween { duration, .. } | Transition::Spring { duration, .. } => *duration,
        }
    }
}

impl FromStr for Animation {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "default" => Ok(Animation::Default),
            "smooth" => Ok(Animation::Smooth),
            "snappy" => Ok(Animation::Snappy),
            "bouncy" => Ok(Animation::Bouncy),
            other => Err(ConfigError::UnknownAnimation(other.to_owned())),
        }
    }
}

impl Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Animation::Default => write!(f, "default"),
            Animation::Smooth => write!(f, "smooth"),
            Animation::Snappy => write!(f, "snappy"),
            Animation::Bouncy => write!(f, "bouncy"),
        }
    }
}
