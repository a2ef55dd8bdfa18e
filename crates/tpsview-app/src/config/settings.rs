//! Settings parser for .tpsview/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use tpsview_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const TPSVIEW_DIR: &str = ".tpsview";

/// Default settings path below `base_dir`
pub fn settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(TPSVIEW_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.tpsview/config.toml` below `base_dir`
///
/// Never fails: a missing file yields defaults, an unreadable or invalid
/// file yields defaults and a warning.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = settings_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path
///
/// Unlike [`load_settings`], problems are reported to the caller.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(base: &Path, content: &str) {
        let dir = base.join(TPSVIEW_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rankings.limit, 5);
        assert!(settings.behavior.show_warning);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[chart]
hover_radius = 12.0

[rankings]
limit = 3

[behavior]
show_warning = false
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.chart.hover_radius, 12.0);
        assert_eq!(settings.chart.width, 1200.0);
        assert_eq!(settings.rankings.limit, 3);
        assert!(!settings.behavior.show_warning);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "not valid toml {{{{");

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_from_missing_path() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = load_settings_from(&missing).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_settings_from_invalid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[rankings]\nlimit = \"many\"\n").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_settings_from_valid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[rankings]\nlimit = 10\n").unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.rankings.limit, 10);
    }
}
