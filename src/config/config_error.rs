use thiserror::Error;

/// Error type for invalid component configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The variant name isn't one of `text`, `number` or `slots`
    #[error("Unknown variant '{0}', expected one of: text, number, slots")]
    UnknownVariant(String),

    /// The animation name isn't one of the presets
    #[error("Unknown animation '{0}', expected one of: default, smooth, snappy, bouncy")]
    UnknownAnimation(String),

    /// The stagger must be a finite, non-negative number of seconds
    #[error("Invalid stagger of {0} seconds, it must be finite and non-negative")]
    InvalidStagger(f64),

    /// The drift must be finite on both axes
    #[error("Invalid drift ({x}, {y}), both components must be finite")]
    InvalidDrift {
        /// Horizontal drift in pixels
        x: f64,
        /// Vertical drift in pixels
        y: f64,
    },
}
