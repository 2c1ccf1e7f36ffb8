//! Accessibility preferences.
//!
//! The settings record is held by an explicit [`AccessibilityStore`] that callers own and pass
//! to whatever renders the UI. Persistence is injected through [`SettingsStorage`] so the
//! store can be driven by a file, an in-memory slot or any other backend.

mod probe;
mod settings;
mod storage;
mod store;

pub use probe::SystemPreferences;
pub use settings::{AccessibilitySettings, Preference, SettingsPatch};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::AccessibilityStore;
