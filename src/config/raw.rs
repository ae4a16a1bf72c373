use configparser::ini::Ini;
use serde::Deserialize;

use crate::error::ConfigError;

/// Section the settings are read from. Section names are lowercased on read,
/// so this matches `[DEFAULT]`, `[default]` and pairs before any header.
pub const DEFAULT_SECTION: &str = "default";

/// The `[DEFAULT]` section as written, before any validation.
///
/// Keys are case-insensitive; unknown keys and other sections are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSettings {
    #[serde(rename = "starlabel")]
    pub star_label: Option<String>,
    #[serde(rename = "starpathduration")]
    pub star_path_duration: Option<String>,
    #[serde(rename = "greenpolygonduration")]
    pub green_polygon_duration: Option<String>,
    #[serde(rename = "bluepolygonduration")]
    pub blue_polygon_duration: Option<String>,
    #[serde(rename = "animationduration")]
    pub animation_duration: Option<String>,
    #[serde(rename = "animationrepeats")]
    pub animation_repeats: Option<String>,
    #[serde(rename = "outerradius")]
    pub outer_radius: Option<String>,
}

impl RawSettings {
    /// Reads the `[DEFAULT]` section of INI text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid INI.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let mut ini = Ini::new();
        let mut sections = ini.read(text.to_owned()).map_err(ConfigError::Parse)?;
        let section = sections.remove(DEFAULT_SECTION).unwrap_or_default();
        let value =
            serde_json::to_value(section).map_err(|e| ConfigError::Parse(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reads_default_section() {
        let raw =
            RawSettings::from_ini_str("[DEFAULT]\nStarLabel = {5/2}\nAnimationRepeats: 3\n")
                .unwrap();
        assert_eq!(raw.star_label.as_deref(), Some("{5/2}"));
        assert_eq!(raw.animation_repeats.as_deref(), Some("3"));
        assert!(raw.star_path_duration.is_none());
    }

    #[test]
    fn keys_and_section_are_case_insensitive() {
        let raw = RawSettings::from_ini_str("[default]\nSTARPATHDURATION = 4\n").unwrap();
        assert_eq!(raw.star_path_duration.as_deref(), Some("4"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# settings\n\n[DEFAULT]\n; a note\nStarPathDuration = 4\n";
        let raw = RawSettings::from_ini_str(text).unwrap();
        assert_eq!(raw.star_path_duration.as_deref(), Some("4"));
    }

    #[test]
    fn ignores_other_sections_and_unknown_keys() {
        let text = "[DEFAULT]\nColour = red\n[extra]\nStarLabel = {7/3}\n";
        let raw = RawSettings::from_ini_str(text).unwrap();
        assert_eq!(raw, RawSettings::default());
    }
}
