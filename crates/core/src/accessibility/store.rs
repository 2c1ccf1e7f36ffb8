//! The accessibility settings state holder.

use crate::accessibility::settings::clamp_font_size;
use crate::accessibility::{
    AccessibilitySettings, Preference, SettingsPatch, SettingsStorage, SystemPreferences,
};
use crate::constants::FONT_SIZE_STEP;
use crate::{SettingsError, SettingsResult};

/// Owns the current accessibility settings and persists every change.
///
/// Lifecycle: defaults, then the stored record (read once at construction), then any number
/// of user changes, optionally back to defaults via [`reset`](Self::reset).
///
/// Only the fields the user has explicitly chosen are persisted. Reduced motion and high
/// contrast fall back to the system preferences of the current session when unchosen, so a
/// change in the OS preference is picked up on the next load unless the user overrode it.
///
/// Every mutating method updates the in-memory settings first and then writes the choices
/// to storage. A write failure is returned to the caller but the in-memory change stands, so
/// a session can continue without persistence if the caller accepts that.
#[derive(Debug)]
pub struct AccessibilityStore<S: SettingsStorage> {
    storage: S,
    preferences: SystemPreferences,
    choices: SettingsPatch,
    settings: AccessibilitySettings,
}

impl<S: SettingsStorage> AccessibilityStore<S> {
    /// Load the user's choices from storage and resolve them over defaults.
    ///
    /// System preferences fill in reduced motion and high contrast only when the stored record
    /// does not set them, so an explicit user choice always wins over the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if storage cannot be read or the document is not valid JSON.
    pub fn load(storage: S, preferences: SystemPreferences) -> SettingsResult<Self> {
        let stored = match storage.read()? {
            Some(document) => serde_json::from_str::<SettingsPatch>(&document)
                .map_err(SettingsError::Deserialization)?,
            None => SettingsPatch::default(),
        };
        // Out-of-range stored font sizes are clamped rather than rejected.
        let choices = stored.validated()?;

        Ok(Self::with_choices(storage, preferences, choices))
    }

    /// Like [`load`](Self::load), but falls back to defaults (plus system preferences) when the
    /// stored record cannot be read.
    pub fn load_or_default(storage: S, preferences: SystemPreferences) -> Self
    where
        S: Clone,
    {
        match Self::load(storage.clone(), preferences) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("using default accessibility settings: {}", e);
                Self::with_choices(storage, preferences, SettingsPatch::default())
            }
        }
    }

    fn with_choices(storage: S, preferences: SystemPreferences, choices: SettingsPatch) -> Self {
        let mut store = Self {
            storage,
            preferences,
            choices,
            settings: AccessibilitySettings::default(),
        };
        store.resolve();
        store
    }

    pub fn settings(&self) -> &AccessibilitySettings {
        &self.settings
    }

    /// The fields the user has explicitly set; this is what gets persisted.
    pub fn choices(&self) -> &SettingsPatch {
        &self.choices
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply a partial update.
    ///
    /// An invalid font size rejects the whole patch without changing anything.
    pub fn update(&mut self, patch: SettingsPatch) -> SettingsResult<()> {
        let patch = patch.validated()?;
        self.choices.merge(&patch);
        self.resolve();
        self.persist()
    }

    /// Flip a boolean preference and return its new value.
    pub fn toggle(&mut self, preference: Preference) -> SettingsResult<bool> {
        let value = !self.settings.get(preference);
        self.choices.set(preference, value);
        self.resolve();
        self.persist()?;
        Ok(value)
    }

    /// Set the font scale, clamped into the supported range.
    pub fn set_font_size(&mut self, font_size: f32) -> SettingsResult<()> {
        self.choices.font_size = Some(clamp_font_size(font_size)?);
        self.resolve();
        self.persist()
    }

    pub fn increase_font_size(&mut self) -> SettingsResult<()> {
        self.set_font_size(self.settings.font_size + FONT_SIZE_STEP)
    }

    pub fn decrease_font_size(&mut self) -> SettingsResult<()> {
        self.set_font_size(self.settings.font_size - FONT_SIZE_STEP)
    }

    /// Forget every choice, returning each preference to its default.
    ///
    /// Reduced motion and high contrast return to the system preferences, as on first run.
    pub fn reset(&mut self) -> SettingsResult<()> {
        self.choices = SettingsPatch::default();
        self.resolve();
        self.persist()
    }

    fn resolve(&mut self) {
        let mut settings = AccessibilitySettings::default();
        settings.reduced_motion = self.preferences.reduced_motion;
        settings.high_contrast = self.preferences.high_contrast;
        settings.apply(&self.choices);
        self.settings = settings;
    }

    fn persist(&self) -> SettingsResult<()> {
        let document =
            serde_json::to_string(&self.choices).map_err(SettingsError::Serialization)?;
        self.storage.write(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::{FileStorage, MemoryStorage};
    use crate::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Storage whose writes always fail.
    #[derive(Clone, Default)]
    struct ReadOnlyStorage {
        writes: std::rc::Rc<Cell<usize>>,
    }

    impl SettingsStorage for ReadOnlyStorage {
        fn read(&self) -> SettingsResult<Option<String>> {
            Ok(None)
        }

        fn write(&self, _document: &str) -> SettingsResult<()> {
            self.writes.set(self.writes.get() + 1);
            Err(SettingsError::StorageWrite(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "quota exceeded",
            )))
        }
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let store = AccessibilityStore::load(MemoryStorage::new(), SystemPreferences::default())
            .expect("load");
        assert_eq!(*store.settings(), AccessibilitySettings::default());
    }

    #[test]
    fn partial_update_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        let mut store =
            AccessibilityStore::load(storage.clone(), SystemPreferences::default()).expect("load");

        store
            .update(SettingsPatch {
                font_size: Some(1.25),
                large_touch_targets: Some(true),
                ..SettingsPatch::default()
            })
            .expect("update");

        let reloaded =
            AccessibilityStore::load(storage, SystemPreferences::default()).expect("reload");
        let expected = AccessibilitySettings {
            font_size: 1.25,
            large_touch_targets: true,
            ..AccessibilitySettings::default()
        };
        assert_eq!(*reloaded.settings(), expected);
    }

    #[test]
    fn round_trip_through_file_storage() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");

        let mut store =
            AccessibilityStore::load(FileStorage::new(&path), SystemPreferences::default())
                .expect("load");
        assert!(!store.toggle(Preference::SimpleLanguage).expect("toggle"));
        assert!(store.toggle(Preference::ScreenReaderMode).expect("toggle"));

        let reloaded =
            AccessibilityStore::load(FileStorage::new(&path), SystemPreferences::default())
                .expect("reload");
        assert!(!reloaded.settings().simple_language);
        assert!(reloaded.settings().screen_reader_mode);
    }

    #[test]
    fn stored_partial_document_merges_over_defaults() {
        let storage = MemoryStorage::with_document(r#"{"highContrast": true}"#);
        let store =
            AccessibilityStore::load(storage, SystemPreferences::default()).expect("load");

        assert!(store.settings().high_contrast);
        assert!(store.settings().simple_language);
        assert_eq!(store.settings().font_size, 1.0);
    }

    #[test]
    fn reset_restores_every_default() {
        let storage = MemoryStorage::new();
        let mut store =
            AccessibilityStore::load(storage.clone(), SystemPreferences::default()).expect("load");
        for preference in Preference::ALL {
            store.toggle(preference).expect("toggle");
        }
        store.set_font_size(1.75).expect("font size");

        store.reset().expect("reset");
        assert_eq!(*store.settings(), AccessibilitySettings::default());

        assert_eq!(*store.choices(), SettingsPatch::default());
        assert_eq!(storage.document().as_deref(), Some("{}"));
    }

    #[test]
    fn reset_returns_to_system_preferences() {
        let preferences = SystemPreferences {
            reduced_motion: true,
            high_contrast: false,
        };
        let mut store = AccessibilityStore::load(MemoryStorage::new(), preferences).expect("load");
        store.toggle(Preference::ReducedMotion).expect("toggle");
        assert!(!store.settings().reduced_motion);

        store.reset().expect("reset");
        assert!(store.settings().reduced_motion);
    }

    #[test]
    fn system_preference_is_not_persisted_as_a_choice() {
        let storage = MemoryStorage::new();
        let first_run = SystemPreferences {
            reduced_motion: true,
            high_contrast: true,
        };
        let mut store = AccessibilityStore::load(storage.clone(), first_run).expect("load");
        assert!(store.settings().reduced_motion);
        store.set_font_size(1.25).expect("font size");

        let document = storage.document().expect("document");
        let stored: SettingsPatch = serde_json::from_str(&document).expect("parse");
        assert_eq!(stored, SettingsPatch::font_size(1.25));

        let reloaded =
            AccessibilityStore::load(storage, SystemPreferences::default()).expect("reload");
        assert!(!reloaded.settings().reduced_motion);
        assert!(!reloaded.settings().high_contrast);
        assert_eq!(reloaded.settings().font_size, 1.25);
    }

    #[test]
    fn system_preferences_apply_only_to_unset_fields() {
        let preferences = SystemPreferences {
            reduced_motion: true,
            high_contrast: true,
        };

        let fresh = AccessibilityStore::load(MemoryStorage::new(), preferences).expect("load");
        assert!(fresh.settings().reduced_motion);
        assert!(fresh.settings().high_contrast);

        let storage = MemoryStorage::with_document(r#"{"reducedMotion": false}"#);
        let explicit = AccessibilityStore::load(storage, preferences).expect("load");
        assert!(!explicit.settings().reduced_motion);
        assert!(explicit.settings().high_contrast);
    }

    #[test]
    fn user_choice_survives_reload_with_preferences() {
        let preferences = SystemPreferences {
            reduced_motion: true,
            high_contrast: false,
        };
        let storage = MemoryStorage::new();
        let mut store = AccessibilityStore::load(storage.clone(), preferences).expect("load");
        assert!(store.settings().reduced_motion);

        assert!(!store.toggle(Preference::ReducedMotion).expect("toggle"));

        let reloaded = AccessibilityStore::load(storage, preferences).expect("reload");
        assert!(!reloaded.settings().reduced_motion);
    }

    #[test]
    fn loading_does_not_write() {
        let storage = MemoryStorage::new();
        let _store =
            AccessibilityStore::load(storage.clone(), SystemPreferences::default()).expect("load");
        assert_eq!(storage.document(), None);
    }

    #[test]
    fn corrupt_document_is_an_error_and_degrades_with_load_or_default() {
        let storage = MemoryStorage::with_document("{not json");
        let err = AccessibilityStore::load(storage.clone(), SystemPreferences::default())
            .expect_err("should reject corrupt document");
        assert!(matches!(err, SettingsError::Deserialization(_)));

        let store = AccessibilityStore::load_or_default(
            storage,
            SystemPreferences {
                reduced_motion: false,
                high_contrast: true,
            },
        );
        assert!(store.settings().high_contrast);
        assert!(store.settings().simple_language);
    }

    #[test]
    fn write_failure_keeps_in_memory_change() {
        let storage = ReadOnlyStorage::default();
        let mut store =
            AccessibilityStore::load(storage.clone(), SystemPreferences::default()).expect("load");

        let err = store
            .toggle(Preference::HighContrast)
            .expect_err("write should fail");
        assert!(matches!(err, SettingsError::StorageWrite(_)));
        assert!(store.settings().high_contrast);
        assert_eq!(storage.writes.get(), 1);
    }

    #[test]
    fn invalid_font_size_rejects_whole_patch() {
        let storage = MemoryStorage::new();
        let mut store =
            AccessibilityStore::load(storage.clone(), SystemPreferences::default()).expect("load");

        let err = store
            .update(SettingsPatch {
                font_size: Some(f32::NAN),
                high_contrast: Some(true),
                ..SettingsPatch::default()
            })
            .expect_err("NaN font size");
        assert!(matches!(err, SettingsError::InvalidFontSize(_)));
        assert!(!store.settings().high_contrast);
        assert_eq!(storage.document(), None);
    }

    #[test]
    fn font_size_steps_stay_in_range() {
        let mut store = AccessibilityStore::load(MemoryStorage::new(), SystemPreferences::default())
            .expect("load");

        store.increase_font_size().expect("increase");
        assert_eq!(store.settings().font_size, 1.125);

        for _ in 0..20 {
            store.increase_font_size().expect("increase");
        }
        assert_eq!(store.settings().font_size, MAX_FONT_SIZE);

        for _ in 0..20 {
            store.decrease_font_size().expect("decrease");
        }
        assert_eq!(store.settings().font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn stored_out_of_range_font_size_is_clamped() {
        let storage = MemoryStorage::with_document(r#"{"fontSize": 9}"#);
        let store =
            AccessibilityStore::load(storage, SystemPreferences::default()).expect("load");
        assert_eq!(store.settings().font_size, MAX_FONT_SIZE);
    }
}
