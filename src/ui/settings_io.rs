use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ecolearn");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    if let Err(e) = save_to(&settings_path(), settings) {
        warn!(error = %e, "could not save ui settings");
    }
}

fn load_from(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn save_to(path: &Path, settings: &UiSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ecolearn-settings-{}-{name}", std::process::id()));
        path.push("ui_settings.json");
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_file("missing");
        assert_eq!(load_from(&path), UiSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let path = temp_file("saved");
        let settings = UiSettings {
            ui_scale: 1.25,
            chat_reply_delay_ms: 0,
            ..UiSettings::default()
        };

        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let path = temp_file("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "ui_scale = 3").unwrap();

        assert_eq!(load_from(&path), UiSettings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
