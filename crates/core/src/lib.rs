//! # CareOrbit Core
//!
//! Client-side logic for the CareOrbit patient companion:
//! - Plain-language substitution of medical terms (`plain_language`)
//! - Accessibility preferences with injected persistence (`accessibility`)
//! - Tooltip annotation of medical text (`tooltip`)
//!
//! **No transport concerns**: talking to the CareOrbit service belongs in `careorbit-client`.

pub mod accessibility;
pub mod config;
pub mod constants;
pub mod error;
pub mod plain_language;
pub mod tooltip;

pub use accessibility::{
    AccessibilitySettings, AccessibilityStore, FileStorage, MemoryStorage, Preference,
    SettingsPatch, SettingsStorage, SystemPreferences,
};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult, SettingsError, SettingsResult};
pub use plain_language::{MedicalTerm, PlainLanguageDictionary, TermCategory, TermMatch};
pub use tooltip::{Segment, TooltipState};
