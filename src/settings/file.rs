//! Settings file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::Result;

pub fn path(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data + "\n")?;
    Ok(())
}

/// Read-only load. Missing files give `None`, unparsable ones an error.
pub fn read(path: &Path) -> Result<Option<Settings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut settings: Settings = serde_json::from_str(&raw)?;
    settings.normalize();
    Ok(Some(settings))
}

/// Missing files are created with defaults; unparsable ones are replaced.
pub fn load(path: &Path) -> Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let settings = Settings::default();
            save(&settings, path)?;
            return Ok(settings);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Settings>(&raw) {
        Ok(mut settings) => {
            settings.normalize();
            Ok(settings)
        }
        Err(e) => {
            log::warn!("resetting unreadable settings file {}: {e}", path.display());
            let settings = Settings::default();
            save(&settings, path)?;
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Locale;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(&dir.path().join("cfg"));
        let settings = load(&p).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(p.exists());
    }

    #[test]
    fn read_never_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(&dir.path().join("cfg"));
        assert_eq!(read(&p).unwrap(), None);
        assert!(!p.exists());

        let saved = Settings {
            locale: Locale::Ru,
            ..Default::default()
        };
        save(&saved, &p).unwrap();
        assert_eq!(read(&p).unwrap(), Some(saved));
    }

    #[test]
    fn read_reports_corrupt_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(dir.path());
        fs::write(&p, "{ nope").unwrap();
        assert!(read(&p).is_err());
        assert_eq!(fs::read_to_string(&p).unwrap(), "{ nope");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(dir.path());
        let settings = Settings {
            length: 32,
            digits: false,
            locale: Locale::Ru,
            ..Default::default()
        };
        save(&settings, &p).unwrap();
        assert_eq!(load(&p).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(dir.path());
        fs::write(&p, r#"{"length": 500, "locale": "ru"}"#).unwrap();
        let settings = load(&p).unwrap();
        assert_eq!(settings.length, crate::pass::MAX_LENGTH);
        assert_eq!(settings.locale, Locale::Ru);
        assert!(settings.symbols);
    }

    #[test]
    fn corrupt_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let p = path(dir.path());
        fs::write(&p, "12,true,false").unwrap();
        assert_eq!(load(&p).unwrap(), Settings::default());
        let rewritten = fs::read_to_string(&p).unwrap();
        assert!(rewritten.contains("\"length\""));
    }
}
