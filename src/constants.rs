// Backup file naming conventions
pub const BACKUP_FOLDER_PATH: &str = ".vault/plugins/vaultadd/backup";
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%d-%m-%y_%H-%M-%S";
pub const PRE_MIGRATION_BACKUP_LABEL: &str = "preMigrationBackup";

// Settings persistence file name (relative to the plugin data folder)
pub const SETTINGS_FILE_NAME: &str = "data.json";

// Qualified macro reference syntax: "MacroName::path.to.member"
pub const MACRO_NAME_SEPARATOR: &str = "::";
pub const MEMBER_PATH_SEPARATOR: char = '.';
