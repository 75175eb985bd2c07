//! Automation core of the VaultAdd note-taking plugin: a single-macro
//! runner with qualified member-access references, and a settings-migration
//! runner that backs up, applies, and rolls back plugin settings changes.

pub mod constants;
pub mod engine;
pub mod host;
pub mod macros;
pub mod migrations;
pub mod plugin;
pub mod settings;

pub use engine::{MacroExecutor, ScriptHost, SingleMacroRunner};
pub use host::{DiskHost, HostError, SettingsStore, Vault};
pub use macros::{Command, Macro, MacroReference};
pub use migrations::{Migration, migrate, run_migrations};
pub use plugin::Plugin;
pub use settings::Settings;
