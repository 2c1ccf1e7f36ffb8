//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Functions here take the raw environment values as arguments and never read process-wide
//! environment variables themselves, which keeps tests independent of the host environment.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::accessibility::SystemPreferences;
use crate::constants::SETTINGS_FILE_NAME;
use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    settings_path: PathBuf,
    preferences: SystemPreferences,
}

impl CoreConfig {
    pub fn new(settings_path: PathBuf, preferences: SystemPreferences) -> CoreResult<Self> {
        if settings_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidInput(
                "settings path cannot be empty".into(),
            ));
        }

        Ok(Self {
            settings_path,
            preferences,
        })
    }

    /// Build a configuration from raw environment values.
    ///
    /// * `settings_path` - value of `CAREORBIT_SETTINGS_PATH`
    /// * `reduced_motion` - value of `CAREORBIT_PREFERS_REDUCED_MOTION`
    /// * `high_contrast` - value of `CAREORBIT_PREFERS_HIGH_CONTRAST`
    pub fn from_env_values(
        settings_path: Option<String>,
        reduced_motion: Option<String>,
        high_contrast: Option<String>,
    ) -> CoreResult<Self> {
        let settings_path = resolve_settings_path(settings_path.map(PathBuf::from))?;
        let preferences = SystemPreferences {
            reduced_motion: parse_flag(reduced_motion)?,
            high_contrast: parse_flag(high_contrast)?,
        };

        Self::new(settings_path, preferences)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn preferences(&self) -> SystemPreferences {
        self.preferences
    }
}

/// Resolve where accessibility settings are persisted.
///
/// An explicit override wins; otherwise the platform configuration directory is used
/// (for example `~/.config/careorbit/` on Linux).
pub fn resolve_settings_path(override_path: Option<PathBuf>) -> CoreResult<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
        if path.is_dir() {
            return Ok(path.join(SETTINGS_FILE_NAME));
        }
        return Ok(path);
    }

    let dirs = ProjectDirs::from("org", "CareOrbit", "careorbit").ok_or(CoreError::NoConfigDir)?;
    Ok(dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Parse an optional boolean flag value.
///
/// Missing or blank values are `false`.
pub fn parse_flag(value: Option<String>) -> CoreResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(CoreError::InvalidInput(format!(
            "expected a boolean flag, got '{other}'"
        ))),
    }
}
