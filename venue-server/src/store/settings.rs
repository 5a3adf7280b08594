//! 设备设置存储
//!
//! 打印机设置和 PIN 偏好。单写者、读后写，无需事务。

use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::{VenueSettings, VenueSettingsUpdate};

/// Persistence boundary for device settings
pub trait SettingsRepository: Send + Sync + std::fmt::Debug {
    fn load(&self) -> AppResult<VenueSettings>;

    fn save(&self, settings: &VenueSettings) -> AppResult<()>;

    /// Read, apply a partial update, write back
    fn update(&self, update: VenueSettingsUpdate) -> AppResult<VenueSettings> {
        let mut settings = self.load()?;
        settings.apply(update);
        self.save(&settings)?;
        Ok(settings)
    }
}

/// JSON file under the work directory
#[derive(Debug, Clone)]
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for FileSettingsRepository {
    /// A missing file yields defaults
    fn load(&self) -> AppResult<VenueSettings> {
        if !self.path.exists() {
            return Ok(VenueSettings::default());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AppError::storage(format!("Failed to read settings: {}", e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::storage(format!("Invalid settings file: {}", e)))
    }

    /// Write to a sibling temp file, then rename over the old one
    fn save(&self, settings: &VenueSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::storage(format!("Failed to create settings dir: {}", e)))?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::internal(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| AppError::storage(format!("Failed to write settings: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// In-memory settings (tests, ephemeral devices)
#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    inner: RwLock<VenueSettings>,
}

impl MemorySettingsRepository {
    pub fn new(settings: VenueSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }
}

impl SettingsRepository for MemorySettingsRepository {
    fn load(&self) -> AppResult<VenueSettings> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, settings: &VenueSettings) -> AppResult<()> {
        *self.inner.write() = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::PrinterSettings;

    #[test]
    fn test_file_missing_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));
        assert_eq!(repo.load().unwrap(), VenueSettings::default());
    }

    #[test]
    fn test_file_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let repo = FileSettingsRepository::new(&path);

        let printer = PrinterSettings {
            name: Some("Kitchen".into()),
            address: Some("192.168.1.50:9100".into()),
            paper_width: 32,
        };
        repo.update(VenueSettingsUpdate {
            printer: Some(printer.clone()),
            require_pin: Some(true),
        })
        .unwrap();

        let reopened = FileSettingsRepository::new(&path).load().unwrap();
        assert_eq!(reopened.printer, printer);
        assert!(reopened.require_pin);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_corrupt_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let err = FileSettingsRepository::new(&path).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_memory_repository() {
        let repo = MemorySettingsRepository::default();
        let updated = repo
            .update(VenueSettingsUpdate {
                printer: None,
                require_pin: Some(true),
            })
            .unwrap();
        assert!(updated.require_pin);
        assert_eq!(repo.load().unwrap(), updated);
    }
}
