use crate::constants::SETTINGS_FILE_NAME;
use crate::settings::Settings;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors surfaced by the host application's file and settings APIs.
///
/// The migration runner treats `AlreadyExists` on folder creation as success;
/// every other variant is fatal for the operation that produced it.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("already exists: {path}")]
    AlreadyExists { path: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("settings serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Host(String),
}

/// The host application's vault file API.
///
/// Paths are vault-relative strings, matching how the host addresses notes
/// and plugin data. `create_folder` must report `AlreadyExists` for a folder
/// that is already present so callers can treat it as idempotent.
#[allow(async_fn_in_trait)]
pub trait Vault {
    async fn create_folder(&self, path: &str) -> Result<(), HostError>;

    async fn create(&self, path: &str, content: &str) -> Result<(), HostError>;
}

/// The host application's settings persistence mechanism.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    async fn save_settings(&mut self, settings: &Settings) -> Result<(), HostError>;
}

/// Disk-backed host adapter for standalone use and tests.
///
/// All vault paths resolve relative to `root`. Settings are written with a
/// write-then-rename so a crash mid-save never truncates `data.json`.
pub struct DiskHost {
    root: PathBuf,
}

impl DiskHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load settings from `data.json`, falling back to defaults when the
    /// file does not exist yet (first launch).
    pub async fn load_settings(&self) -> Result<Settings, HostError> {
        let path = self.root.join(SETTINGS_FILE_NAME);
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(error) => Err(error.into()),
        }
    }
}

impl Vault for DiskHost {
    async fn create_folder(&self, path: &str) -> Result<(), HostError> {
        let full = self.root.join(path);
        if fs::try_exists(&full).await? {
            return Err(HostError::AlreadyExists {
                path: path.to_string(),
            });
        }
        fs::create_dir_all(&full).await?;
        Ok(())
    }

    async fn create(&self, path: &str, content: &str) -> Result<(), HostError> {
        let full = self.root.join(path);
        if fs::try_exists(&full).await? {
            return Err(HostError::AlreadyExists {
                path: path.to_string(),
            });
        }
        fs::write(&full, content).await?;
        Ok(())
    }
}

impl SettingsStore for DiskHost {
    async fn save_settings(&mut self, settings: &Settings) -> Result<(), HostError> {
        let payload = serde_json::to_string_pretty(settings)?;
        let target = self.root.join(SETTINGS_FILE_NAME);
        let staging = self.root.join(format!("{SETTINGS_FILE_NAME}.tmp"));
        fs::write(&staging, payload).await?;
        fs::rename(&staging, &target).await?;
        Ok(())
    }
}
