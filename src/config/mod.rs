//! Run settings, read once from an INI file and validated up front.

mod raw;

pub use raw::{RawSettings, DEFAULT_SECTION};

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::star::{StarParameters, DEFAULT_OUTER_RADIUS};

/// Setting keys, as spelled in the settings file.
pub mod keys {
    pub const STAR_LABEL: &str = "StarLabel";
    pub const STAR_PATH_DURATION: &str = "StarPathDuration";
    pub const GREEN_POLYGON_DURATION: &str = "GreenPolygonDuration";
    pub const BLUE_POLYGON_DURATION: &str = "BluePolygonDuration";
    pub const ANIMATION_DURATION: &str = "AnimationDuration";
    pub const ANIMATION_REPEATS: &str = "AnimationRepeats";
    pub const OUTER_RADIUS: &str = "OuterRadius";
}

/// Validated settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    /// The star, reduced to lowest terms.
    pub star: StarParameters,
    /// Seconds to trace the whole star path.
    pub star_path_duration: f64,
    /// Seconds to sample the green polygon.
    pub green_polygon_duration: f64,
    /// Seconds to sample the blue polygon.
    pub blue_polygon_duration: f64,
    /// Seconds per lap of the final travel.
    pub animation_duration: f64,
    /// Laps of the final travel.
    pub animation_repeats: u32,
    /// Radius of the fixed outer circle.
    pub outer_radius: f64,
}

impl Settings {
    /// Reads and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns an invalid-config error if the file cannot be read, is not
    /// valid INI, or any setting is missing or out of range.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "read settings file");
        Self::from_ini_str(&text)
    }

    /// Parses and validates INI text.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_path`].
    pub fn from_ini_str(text: &str) -> Result<Self> {
        let raw = RawSettings::from_ini_str(text)?;
        Ok(Self::from_raw(&raw)?)
    }

    /// Validates settings read from the `[DEFAULT]` section.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid setting.
    pub fn from_raw(raw: &RawSettings) -> std::result::Result<Self, ConfigError> {
        let star_label = required(raw.star_label.as_deref(), keys::STAR_LABEL)?;
        let settings = Self {
            star: StarParameters::from_label(star_label)?,
            star_path_duration: positive_f64(
                raw.star_path_duration.as_deref(),
                keys::STAR_PATH_DURATION,
            )?,
            green_polygon_duration: positive_f64(
                raw.green_polygon_duration.as_deref(),
                keys::GREEN_POLYGON_DURATION,
            )?,
            blue_polygon_duration: positive_f64(
                raw.blue_polygon_duration.as_deref(),
                keys::BLUE_POLYGON_DURATION,
            )?,
            animation_duration: positive_f64(
                raw.animation_duration.as_deref(),
                keys::ANIMATION_DURATION,
            )?,
            animation_repeats: positive_u32(
                raw.animation_repeats.as_deref(),
                keys::ANIMATION_REPEATS,
            )?,
            outer_radius: match raw.outer_radius.as_deref() {
                Some(value) => positive_f64(Some(value), keys::OUTER_RADIUS)?,
                None => DEFAULT_OUTER_RADIUS,
            },
        };
        debug!(
            star = %settings.star,
            repeats = settings.animation_repeats,
            "loaded settings"
        );
        Ok(settings)
    }
}

fn required<'a>(
    value: Option<&'a str>,
    key: &'static str,
) -> std::result::Result<&'a str, ConfigError> {
    value.ok_or(ConfigError::MissingKey(key))
}

fn positive_f64(value: Option<&str>, key: &'static str) -> std::result::Result<f64, ConfigError> {
    let raw = required(value, key)?;
    let invalid = || ConfigError::InvalidValue {
        key,
        value: raw.to_owned(),
        expected: "a positive number of seconds",
    };
    let parsed: f64 = raw.parse().map_err(|_| invalid())?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

fn positive_u32(value: Option<&str>, key: &'static str) -> std::result::Result<u32, ConfigError> {
    let raw = required(value, key)?;
    match raw.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
            expected: "a positive integer",
        }),
    }
}
