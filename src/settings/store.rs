use super::record::Settings;
use crate::error::{MurmurError, Result};
use crate::paths::{exe_dir, SETTINGS_FILE};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads and saves the settings record at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store for `config.json` inside `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::at(base_dir.as_ref().join(SETTINGS_FILE))
    }

    /// Store next to the running executable
    pub fn from_exe_dir() -> Result<Self> {
        Ok(Self::new(exe_dir()?))
    }

    /// Store for an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, creating the file with defaults if it doesn't exist
    ///
    /// Missing recognized keys are filled in memory only. A file that is not
    /// a JSON object is an error and is left untouched.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            let settings = Settings::defaults();
            self.save(&settings)?;
            tracing::info!("Created settings file with defaults at {}", self.path.display());
            return Ok(settings);
        }

        let content = fs::read(&self.path)?;

        let value: Value = serde_json::from_slice(&content)
            .map_err(|e| MurmurError::Parse(format!("{}: {e}", self.path.display())))?;

        let Value::Object(map) = value else {
            return Err(MurmurError::Parse(format!(
                "{}: expected a JSON object",
                self.path.display()
            )));
        };

        let mut settings = Settings::from_map(map);
        let filled = settings.backfill();
        if filled > 0 {
            tracing::debug!("Backfilled {filled} missing settings with defaults");
        }

        Ok(settings)
    }

    /// Overwrite the settings file with the whole record
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| MurmurError::Other(format!("Failed to serialize settings: {e}")))?;

        fs::write(&self.path, content)?;
        tracing::debug!("Saved settings to {}", self.path.display());

        Ok(())
    }
}
