//! Constants shared across the core crate.

/// Storage key under which the serialised accessibility settings live.
pub const SETTINGS_STORAGE_KEY: &str = "careorbit-accessibility-settings";

/// Filename used by [`crate::FileStorage`] when no explicit path is configured.
pub const SETTINGS_FILE_NAME: &str = "careorbit-accessibility-settings.json";

/// Default font scale (1.0 = browser default size).
pub const DEFAULT_FONT_SIZE: f32 = 1.0;

/// Smallest font scale accepted; smaller values are clamped.
pub const MIN_FONT_SIZE: f32 = 0.75;

/// Largest font scale accepted; larger values are clamped.
pub const MAX_FONT_SIZE: f32 = 2.0;

/// Increment used by the font size step helpers.
pub const FONT_SIZE_STEP: f32 = 0.125;

/// Environment variable overriding the settings file path.
pub const SETTINGS_PATH_ENV: &str = "CAREORBIT_SETTINGS_PATH";

/// Environment probe standing in for the `prefers-reduced-motion` media query.
pub const PREFERS_REDUCED_MOTION_ENV: &str = "CAREORBIT_PREFERS_REDUCED_MOTION";

/// Environment probe standing in for the `prefers-contrast: more` media query.
pub const PREFERS_HIGH_CONTRAST_ENV: &str = "CAREORBIT_PREFERS_HIGH_CONTRAST";
