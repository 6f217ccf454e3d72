use std::{borrow::Cow, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a `Calligraph` is asked to show: either text or a raw number that
/// gets formatted the way JavaScript's `String(n)` would.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Content {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Content::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Integer(value) => write!(f, "{value}"),
            Content::Float(value) => write_float(f, *value),
            Content::Text(text) => write!(f, "{text}"),
        }
    }
}

// Exponent notation kicks in outside [1e-6, 1e21), `-0` prints as `0`.
fn write_float(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    if value.is_nan() {
        return write!(f, "NaN");
    }
    if value.is_infinite() {
        return write!(f, "{}Infinity", if value < 0.0 { "-" } else { "" });
    }
    if value == 0.0 {
        return write!(f, "0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{value}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => write!(f, "{scientific}"),
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self { Content::Integer(value) }
}

impl From<f64> for Content {
    fn from(value: f64) -> Self { Content::Float(value) }
}

impl From<String> for Content {
    fn from(value: String) -> Self { Content::Text(value) }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self { Content::Text(value.to_owned()) }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self { Content::Text(value.clone()) }
}

impl<'a> From<Cow<'a, str>> for Content {
    fn from(value: Cow<'a, str>) -> Self { Content::Text(value.into_owned()) }
}
