//! Runtime settings
//!
//! Presentation and runtime options read from a RON file at startup.
//! Gameplay numbers are not here; see `game::tuning`.
//!
//! Example `hero_arena.ron`:
//!
//! ```ron
//! (
//!     fps_limit: Fps60,
//!     seed: Some(1234),
//!     show_debug_overlay: false,
//!     sprites: (
//!         hero: Some("assets/sprites/hero.png"),
//!         monster: Some("assets/sprites/monster.png"),
//!         treasure: None,
//!     ),
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "hero_arena.ron";

/// Environment variable that overrides the settings path
pub const SETTINGS_ENV: &str = "HERO_ARENA_SETTINGS";

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS
    Fps30,
    /// 60 FPS (the game was tuned for this: movement is per frame)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Sprite image paths. Missing entries are drawn as coloured boxes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
    pub hero: Option<String>,
    pub monster: Option<String>,
    pub treasure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps_limit: FpsLimit,
    /// Fixed RNG seed; None picks one from the system clock
    pub seed: Option<u64>,
    pub show_debug_overlay: bool,
    pub sprites: SpriteSettings,
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::IoError(e) => Some(e),
            SettingsError::ParseError(e) => Some(e),
        }
    }
}

impl Settings {
    /// Where to look for the settings file
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    /// Load settings from a file that must exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load settings, falling back to defaults when the file is absent.
    /// A file that exists but can't be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("nope.ron")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.fps_limit, FpsLimit::Fps60);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(fps_limit: Fps30, seed: Some(7), sprites: (hero: Some(\"hero.png\")))").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.fps_limit, FpsLimit::Fps30);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.sprites.hero.as_deref(), Some("hero.png"));
        assert!(settings.sprites.monster.is_none());
        assert!(!settings.show_debug_overlay);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(fps_limit: Fps45)").unwrap();

        let err = Settings::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_load_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, SettingsError::IoError(_)));
    }

    #[test]
    fn test_frame_time() {
        assert_eq!(FpsLimit::Fps30.frame_time(), Some(1.0 / 30.0));
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
    }
}
