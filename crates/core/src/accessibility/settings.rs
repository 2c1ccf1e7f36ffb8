//! The accessibility settings record and partial updates to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::{SettingsError, SettingsResult};

/// Fully populated accessibility preferences.
///
/// Serialised with camelCase keys, matching the document stored by the web front end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Font scale multiplier, clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
    pub font_size: f32,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    /// Verbose announcements for screen readers.
    pub screen_reader_mode: bool,
    pub large_touch_targets: bool,
    /// Replace medical jargon with plain language.
    pub simple_language: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            high_contrast: false,
            reduced_motion: false,
            screen_reader_mode: false,
            large_touch_targets: false,
            simple_language: true,
        }
    }
}

impl AccessibilitySettings {
    /// Apply every field the patch sets. The patch must already be validated.
    pub(crate) fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(v) = patch.high_contrast {
            self.high_contrast = v;
        }
        if let Some(v) = patch.reduced_motion {
            self.reduced_motion = v;
        }
        if let Some(v) = patch.screen_reader_mode {
            self.screen_reader_mode = v;
        }
        if let Some(v) = patch.large_touch_targets {
            self.large_touch_targets = v;
        }
        if let Some(v) = patch.simple_language {
            self.simple_language = v;
        }
    }

    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::HighContrast => self.high_contrast,
            Preference::ReducedMotion => self.reduced_motion,
            Preference::ScreenReaderMode => self.screen_reader_mode,
            Preference::LargeTouchTargets => self.large_touch_targets,
            Preference::SimpleLanguage => self.simple_language,
        }
    }

    /// Classes toggled on the document root for the enabled preferences.
    pub fn root_classes(&self) -> Vec<&'static str> {
        Preference::ALL
            .iter()
            .filter(|p| self.get(**p))
            .map(|p| p.as_str())
            .collect()
    }

    /// Inline style for the document root carrying the font scale.
    pub fn font_scale_style(&self) -> String {
        format!("--font-scale: {}", self.font_size)
    }
}

/// A boolean accessibility preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    HighContrast,
    ReducedMotion,
    ScreenReaderMode,
    LargeTouchTargets,
    SimpleLanguage,
}

impl Preference {
    pub const ALL: [Preference; 5] = [
        Preference::HighContrast,
        Preference::ReducedMotion,
        Preference::ScreenReaderMode,
        Preference::LargeTouchTargets,
        Preference::SimpleLanguage,
    ];

    /// Kebab-case name, also used as the root CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::HighContrast => "high-contrast",
            Preference::ReducedMotion => "reduced-motion",
            Preference::ScreenReaderMode => "screen-reader-mode",
            Preference::LargeTouchTargets => "large-touch-targets",
            Preference::SimpleLanguage => "simple-language",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preference::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| SettingsError::UnknownPreference(s.to_string()))
    }
}

/// A partial settings record.
///
/// Used both for user updates and for reading stored documents, which may predate newer
/// fields or have been written by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_reader_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_touch_targets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_language: Option<bool>,
}

impl SettingsPatch {
    /// Patch setting a single boolean preference.
    pub fn preference(preference: Preference, value: bool) -> Self {
        let mut patch = Self::default();
        patch.set(preference, value);
        patch
    }

    pub fn font_size(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    pub(crate) fn set(&mut self, preference: Preference, value: bool) {
        let field = match preference {
            Preference::HighContrast => &mut self.high_contrast,
            Preference::ReducedMotion => &mut self.reduced_motion,
            Preference::ScreenReaderMode => &mut self.screen_reader_mode,
            Preference::LargeTouchTargets => &mut self.large_touch_targets,
            Preference::SimpleLanguage => &mut self.simple_language,
        };
        *field = Some(value);
    }

    /// Overlay every field `other` sets.
    pub(crate) fn merge(&mut self, other: &SettingsPatch) {
        self.font_size = other.font_size.or(self.font_size);
        self.high_contrast = other.high_contrast.or(self.high_contrast);
        self.reduced_motion = other.reduced_motion.or(self.reduced_motion);
        self.screen_reader_mode = other.screen_reader_mode.or(self.screen_reader_mode);
        self.large_touch_targets = other.large_touch_targets.or(self.large_touch_targets);
        self.simple_language = other.simple_language.or(self.simple_language);
    }

    /// Clamp the font size into range, rejecting non-finite values.
    pub(crate) fn validated(mut self) -> SettingsResult<Self> {
        if let Some(font_size) = self.font_size {
            self.font_size = Some(clamp_font_size(font_size)?);
        }
        Ok(self)
    }
}

pub(crate) fn clamp_font_size(font_size: f32) -> SettingsResult<f32> {
    if !font_size.is_finite() {
        return Err(SettingsError::InvalidFontSize(font_size));
    }
    Ok(font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = AccessibilitySettings::default();
        assert_eq!(settings.font_size, 1.0);
        assert!(!settings.high_contrast);
        assert!(!settings.reduced_motion);
        assert!(!settings.screen_reader_mode);
        assert!(!settings.large_touch_targets);
        assert!(settings.simple_language);
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let value = serde_json::to_value(AccessibilitySettings::default()).expect("serialise");
        assert_eq!(value["fontSize"], 1.0);
        assert_eq!(value["simpleLanguage"], true);
        assert_eq!(value["largeTouchTargets"], false);
    }

    #[test]
    fn partial_document_parses_into_patch() {
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"highContrast": true, "legacyField": 3}"#).expect("parse");
        assert_eq!(patch.high_contrast, Some(true));
        assert_eq!(patch.font_size, None);
        assert_eq!(patch.simple_language, None);
    }

    #[test]
    fn root_classes_follow_enabled_preferences() {
        let mut settings = AccessibilitySettings::default();
        assert_eq!(settings.root_classes(), vec!["simple-language"]);

        settings.apply(&SettingsPatch {
            high_contrast: Some(true),
            simple_language: Some(false),
            ..SettingsPatch::default()
        });
        assert_eq!(settings.root_classes(), vec!["high-contrast"]);
        assert_eq!(settings.font_scale_style(), "--font-scale: 1");
    }

    #[test]
    fn merge_keeps_fields_the_overlay_leaves_unset() {
        let mut choices = SettingsPatch::font_size(1.5);
        choices.merge(&SettingsPatch::preference(Preference::HighContrast, true));
        choices.merge(&SettingsPatch::preference(Preference::HighContrast, false));

        assert_eq!(choices.font_size, Some(1.5));
        assert_eq!(choices.high_contrast, Some(false));
        assert_eq!(choices.reduced_motion, None);
        assert_eq!(
            serde_json::to_string(&choices).expect("serialise"),
            r#"{"fontSize":1.5,"highContrast":false}"#
        );
    }

    #[test]
    fn preference_parses_kebab_and_snake_case() {
        assert_eq!(
            "large-touch-targets".parse::<Preference>().expect("parse"),
            Preference::LargeTouchTargets
        );
        assert_eq!(
            "Reduced_Motion".parse::<Preference>().expect("parse"),
            Preference::ReducedMotion
        );
        assert!(matches!(
            "font-size".parse::<Preference>(),
            Err(SettingsError::UnknownPreference(_))
        ));
    }

    #[test]
    fn font_size_is_clamped_and_must_be_finite() {
        assert_eq!(clamp_font_size(5.0).expect("clamp"), MAX_FONT_SIZE);
        assert_eq!(clamp_font_size(0.1).expect("clamp"), MIN_FONT_SIZE);
        assert_eq!(clamp_font_size(1.25).expect("clamp"), 1.25);
        assert!(clamp_font_size(f32::NAN).is_err());
        assert!(clamp_font_size(f32::INFINITY).is_err());
    }
}
