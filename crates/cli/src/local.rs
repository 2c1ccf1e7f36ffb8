//! Commands that run without the CareOrbit service.

use careorbit_core::config::parse_flag;
use careorbit_core::plain_language::{self, PlainLanguageDictionary};
use careorbit_core::{
    AccessibilitySettings, AccessibilityStore, CoreConfig, CoreResult, FileStorage, SettingsPatch,
};

use crate::{SettingsCommands, TermCommands};

/// Open the settings store, degrading to defaults if the stored record is unusable.
pub fn open_store(config: &CoreConfig) -> AccessibilityStore<FileStorage> {
    AccessibilityStore::load_or_default(
        FileStorage::new(config.settings_path()),
        config.preferences(),
    )
}

/// Whether output should be simplified, defaulting to on when settings can't be resolved.
pub fn prefers_simple_language(config: CoreResult<CoreConfig>) -> bool {
    match config {
        Ok(config) => open_store(&config).settings().simple_language,
        Err(e) => {
            tracing::warn!("ignoring accessibility settings: {}", e);
            AccessibilitySettings::default().simple_language
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_terms(cmd: TermCommands) -> anyhow::Result<()> {
    match cmd {
        TermCommands::Lookup { term } => {
            match PlainLanguageDictionary::builtin().find(&term) {
                Some(entry) => print_json(entry)?,
                None => println!("{}", plain_language::lookup(&term)),
            }
        }
        TermCommands::Simplify { text } => {
            println!("{}", plain_language::simplify(&text));
        }
        TermCommands::Detect { text } => {
            print_json(&plain_language::detect(&text))?;
        }
        TermCommands::List { category } => {
            let dictionary = PlainLanguageDictionary::builtin();
            let entries: Vec<_> = match category {
                Some(category) => dictionary.by_category(category).collect(),
                None => dictionary.entries().iter().collect(),
            };
            print_json(&entries)?;
        }
    }
    Ok(())
}

pub fn run_settings(config: &CoreConfig, cmd: SettingsCommands) -> anyhow::Result<()> {
    let mut store = open_store(config);

    match cmd {
        SettingsCommands::Show => {}
        SettingsCommands::Set { preference, value } => {
            store.update(SettingsPatch::preference(preference, parse_flag(Some(value))?))?;
        }
        SettingsCommands::Toggle { preference } => {
            let value = store.toggle(preference)?;
            tracing::info!("{} is now {}", preference, if value { "on" } else { "off" });
        }
        SettingsCommands::FontSize { value } => {
            store.set_font_size(value)?;
        }
        SettingsCommands::Reset => {
            store.reset()?;
        }
    }

    let settings = store.settings();
    print_json(settings)?;
    println!("classes: {}", settings.root_classes().join(" "));
    println!("style: {}", settings.font_scale_style());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careorbit_core::{CoreError, SystemPreferences};
    use tempfile::TempDir;

    #[test]
    fn bad_settings_config_falls_back_to_simple_language() {
        let err = CoreConfig::from_env_values(
            Some("careorbit-settings.json".into()),
            Some("maybe".into()),
            None,
        )
        .expect_err("malformed flag");
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(prefers_simple_language(Err(err)));
    }

    #[test]
    fn stored_choice_controls_simplification() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"simpleLanguage": false}"#).expect("write settings");

        let config = CoreConfig::new(path, SystemPreferences::default()).expect("config");
        assert!(!prefers_simple_language(Ok(config)));
    }

    #[test]
    fn terms_commands_need_no_settings() {
        run_terms(TermCommands::Simplify {
            text: "hypertension".to_string(),
        })
        .expect("simplify");
        run_terms(TermCommands::List { category: None }).expect("list");
    }
}
