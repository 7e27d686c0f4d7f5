//! Reading and writing `preferences.json`

use super::EditorPreferences;
use directories::ProjectDirs;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug)]
pub enum PreferencesError {
    /// The platform has no per-user config directory
    NoConfigDir,
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::NoConfigDir => f.write_str("no config directory on this platform"),
            PreferencesError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            PreferencesError::Json(e) => write!(f, "malformed preferences: {}", e),
        }
    }
}

impl std::error::Error for PreferencesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferencesError::NoConfigDir => None,
            PreferencesError::Io { source, .. } => Some(source),
            PreferencesError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PreferencesError {
    fn from(e: serde_json::Error) -> Self {
        PreferencesError::Json(e)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> PreferencesError + '_ {
    move |source| PreferencesError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl EditorPreferences {
    /// `<config dir>/preferences.json` for this user
    pub fn default_path() -> Result<PathBuf, PreferencesError> {
        ProjectDirs::from("com", "tile_grid", "tile_grid_editor")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .ok_or(PreferencesError::NoConfigDir)
    }

    /// Stored preferences, or defaults when there are none or they cannot be read
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_else(|e| {
                bevy::log::warn!("Using default preferences ({})", e);
                Self::default()
            })
    }

    /// Read preferences from `path`; a file that does not exist yet gives defaults
    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(io_error(path)(e)),
        }
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(io_error(dir))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(io_error(path))?;
        bevy::log::debug!("Wrote preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut prefs = EditorPreferences::default();
        prefs.auto_advance = true;
        prefs.grid.rows = 20;
        prefs.save_to(&path).unwrap();

        assert_eq!(EditorPreferences::load_from(&path).unwrap(), prefs);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = EditorPreferences::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(prefs, EditorPreferences::default());
    }

    #[test]
    fn test_invalid_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            EditorPreferences::load_from(&path),
            Err(PreferencesError::Json(_))
        ));
    }

    #[test]
    fn test_unreadable_path_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        let err = EditorPreferences::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, PreferencesError::Io { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
