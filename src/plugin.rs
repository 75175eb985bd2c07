use crate::host::SettingsStore;
use crate::settings::Settings;
use anyhow::{Context, Result};

/// The plugin instance: the live settings object plus a handle to the host
/// application. Migration routines receive this and mutate `settings`
/// field-by-field; only the migration runner reassigns it wholesale (on
/// rollback).
pub struct Plugin<H> {
    pub host: H,
    pub settings: Settings,
}

impl<H> Plugin<H> {
    pub fn new(host: H, settings: Settings) -> Self {
        Self { host, settings }
    }
}

impl<H: SettingsStore> Plugin<H> {
    pub async fn save_settings(&mut self) -> Result<()> {
        self.host
            .save_settings(&self.settings)
            .await
            .context("failed to persist plugin settings")
    }
}
