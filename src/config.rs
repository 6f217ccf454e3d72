mod animation;
mod config_error;
mod variant;

pub use animation::{Animation, Transition};
pub use config_error::ConfigError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use variant::Variant;

/// Seconds of delay between neighbouring characters.
pub const DEFAULT_STAGGER: f64 = 0.02;

/// Maximum spread in pixels of entering and exiting characters of the text
/// variant. The actual spread is scaled by the change ratio of each update.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub x: f64,
    pub y: f64,
}

impl Default for Drift {
    fn default() -> Self { Self { x: 15.0, y: 0.0 } }
}

/// Settings of one `Calligraph` instance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct CalligraphConfig {
    pub variant: Variant,
    /// Timing preset; when unset it's chosen based on the variant.
    pub animation: Option<Animation>,
    pub drift: Drift,
    pub stagger: f64,
    /// Whether the characters of the very first text animate in.
    pub animate_initial: bool,
}

impl Default for CalligraphConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            animation: None,
            drift: Drift::default(),
            stagger: DEFAULT_STAGGER,
            animate_initial: false,
        }
    }
}

impl CalligraphConfig {
    #[must_use]
    pub fn with_variant(self, variant: Variant) -> Self { Self { variant, ..self } }

    #[must_use]
    pub fn with_animation(self, animation: Animation) -> Self {
        Self {
            animation: Some(animation),
            ..self
        }
    }

    #[must_use]
    pub fn with_drift(self, x: f64, y: f64) -> Self {
        Self {
            drift: Drift { x, y },
            ..self
        }
    }

    #[must_use]
    pub fn with_stagger(self, stagger: f64) -> Self { Self { stagger, ..self } }

    #[must_use]
    pub fn with_animate_initial(self, animate_initial: bool) -> Self {
        Self {
            animate_initial,
            ..self
        }
    }

    /// The timing curve to animate with: the explicit preset if there's one,
    /// otherwise `Snappy` for numbers and `Default` for text.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.animation
            .unwrap_or(if self.variant.is_numeric() {
                Animation::Snappy
            } else {
                Animation::Default
            })
            .transition()
    }

    /// Check that every numeric setting is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStagger` for a negative or non-finite
    /// stagger and `ConfigError::InvalidDrift` for a non-finite drift.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(ConfigError::InvalidStagger(self.stagger));
        }

        if !self.drift.x.is_finite() || !self.drift.y.is_finite() {
            return Err(ConfigError::InvalidDrift {
                x: self.drift.x,
                y: self.drift.y,
            });
        }

        Ok(())
    }
}
