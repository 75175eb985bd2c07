use crate::constants::{BACKUP_FOLDER_PATH, BACKUP_TIMESTAMP_FORMAT, PRE_MIGRATION_BACKUP_LABEL};
use crate::host::{HostError, Vault};
use crate::settings::Settings;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime};

// "DD-MM-YY_HH-mm-ss"
const TIMESTAMP_LEN: usize = 17;

/// Build a backup file path like
/// `.vault/plugins/vaultadd/backup/04-08-26_13-22-05_preMigrationBackup.json`.
pub fn backup_path(timestamp: DateTime<Local>, label: &str) -> String {
    format!(
        "{}/{}_{}.json",
        BACKUP_FOLDER_PATH,
        timestamp.format(BACKUP_TIMESTAMP_FORMAT),
        label
    )
}

/// Parse a backup file name back into its timestamp and label, so hosts can
/// enumerate recovery points. Returns `None` for anything that does not
/// follow the backup naming scheme.
pub fn parse_backup_file_name(file_name: &str) -> Option<(NaiveDateTime, String)> {
    let stem = file_name.strip_suffix(".json")?;
    if stem.len() < TIMESTAMP_LEN + 2 || !stem.is_char_boundary(TIMESTAMP_LEN) {
        return None;
    }

    let (raw_timestamp, rest) = stem.split_at(TIMESTAMP_LEN);
    let label = rest.strip_prefix('_')?;
    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, BACKUP_TIMESTAMP_FORMAT).ok()?;
    Some((timestamp, label.to_string()))
}

/// Serialize the current settings and write them to a freshly timestamped
/// backup file, creating the backup folder first. Returns the written path.
pub async fn write_pre_migration_backup<V: Vault>(
    vault: &V,
    settings: &Settings,
) -> Result<String> {
    make_backup_folder_if_missing(vault).await?;

    let snapshot =
        serde_json::to_string_pretty(settings).context("failed to serialize settings snapshot")?;
    let path = backup_path(Local::now(), PRE_MIGRATION_BACKUP_LABEL);
    vault
        .create(&path, &snapshot)
        .await
        .with_context(|| format!("failed to write settings backup {path}"))?;
    Ok(path)
}

/// Folder creation is idempotent: "already exists" is success, anything
/// else is fatal for the migration session.
async fn make_backup_folder_if_missing<V: Vault>(vault: &V) -> Result<()> {
    match vault.create_folder(BACKUP_FOLDER_PATH).await {
        Ok(()) | Err(HostError::AlreadyExists { .. }) => Ok(()),
        Err(error) => Err(error)
            .with_context(|| format!("failed to create backup folder {BACKUP_FOLDER_PATH}")),
    }
}
