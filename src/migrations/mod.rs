pub mod backup;

mod increment_file_name_default;
mod insert_after_exclusivity;
mod macro_id_from_embedded;
mod template_folder;

use crate::constants::BACKUP_FOLDER_PATH;
use crate::host::{SettingsStore, Vault};
use crate::plugin::Plugin;
use crate::settings::Settings;
use anyhow::Result;
use futures_util::future::BoxFuture;
use tracing::{error, info};

/// One migration: a stable key (used in the persisted status map), a
/// human-readable description, and the routine itself.
pub struct Migration<H> {
    pub key: &'static str,
    pub description: &'static str,
    pub run: for<'a> fn(&'a mut Plugin<H>) -> BoxFuture<'a, Result<()>>,
}

/// The built-in migrations, in the order they must run: later migrations
/// may depend on the settings shape earlier ones produce.
pub fn registry<H: Send>() -> Vec<Migration<H>> {
    vec![
        macro_id_from_embedded::migration(),
        template_folder::migration(),
        increment_file_name_default::migration(),
        insert_after_exclusivity::migration(),
    ]
}

/// The subset of `registry` whose status flag is not yet set, in registry
/// order. A key missing from the status map counts as not applied.
pub fn pending_migrations<'a, H>(
    settings: &Settings,
    registry: &'a [Migration<H>],
) -> Vec<&'a Migration<H>> {
    registry
        .iter()
        .filter(|migration| !settings.migrations.get(migration.key).copied().unwrap_or(false))
        .collect()
}

/// Run all pending built-in migrations. Called once at plugin startup.
pub async fn migrate<H>(plugin: &mut Plugin<H>) -> Result<()>
where
    H: Vault + SettingsStore + Send,
{
    run_migrations(plugin, &registry()).await
}

/// Run the pending subset of `registry` against the plugin.
///
/// A full settings backup is written before anything runs; if that fails,
/// the session aborts with nothing changed. Each migration gets its own
/// settings snapshot and is rolled back to it on failure. Earlier successes
/// in the same session are kept, and a failed migration's status flag stays
/// unset so it retries on the next run. Failures never propagate to the
/// caller; they surface through the log only, so plugin startup is never
/// interrupted. Settings are persisted once, after the loop.
pub async fn run_migrations<H>(plugin: &mut Plugin<H>, registry: &[Migration<H>]) -> Result<()>
where
    H: Vault + SettingsStore,
{
    let pending = pending_migrations(&plugin.settings, registry);
    if pending.is_empty() {
        info!("no migrations to run");
        return Ok(());
    }

    match backup::write_pre_migration_backup(&plugin.host, &plugin.settings).await {
        Ok(path) => info!("settings backed up to {path}"),
        Err(error) => {
            error!(
                "unable to back up settings before migrating: {error:#}. \
                 Your settings are untouched; no migration runs without a backup."
            );
            return Ok(());
        }
    }

    for migration in pending {
        info!("running migration {}: {}", migration.key, migration.description);

        let snapshot = plugin.settings.clone();
        match (migration.run)(plugin).await {
            Ok(()) => {
                plugin.settings.migrations.insert(migration.key.to_string(), true);
                info!("migration {} successful", migration.key);
            }
            Err(error) => {
                error!(
                    "migration '{}' failed: {error:#}. Reverting to the settings captured \
                     before it ran; a full pre-migration backup is in \"{}\".",
                    migration.key, BACKUP_FOLDER_PATH
                );
                plugin.settings = snapshot;
            }
        }
    }

    plugin.save_settings().await
}
