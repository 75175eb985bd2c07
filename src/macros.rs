use crate::constants::{MACRO_NAME_SEPARATOR, MEMBER_PATH_SEPARATOR};
use serde::{Deserialize, Serialize};

/// A named, ordered sequence of commands. Macros live in the plugin-wide
/// registry (`Settings::macros`) and are looked up by exact name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Macro {
    pub id: String,
    pub name: String,
    pub commands: Vec<Command>,
}

/// One step of a macro. The migration runner treats commands as opaque;
/// execution semantics live in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Run a user script through the host; its return value feeds the
    /// engine's export handling.
    UserScript { path: String },
    /// Set a variable visible to subsequent script invocations.
    SetVariable { name: String, value: String },
    /// Suspend for the given number of milliseconds.
    Wait { delay_ms: u64 },
    /// Execute another choice by name through the host.
    Choice { name: String },
}

/// A parsed qualified macro reference: `Name` or `Name::path.to.member`.
///
/// Segments after the first `::` are split on `.` into member keys. The
/// parsed path travels through the call chain as an explicit value; it is
/// never stored on the runner, so nothing leaks between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroReference {
    pub name: String,
    pub member_path: Option<Vec<String>>,
}

impl MacroReference {
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(MACRO_NAME_SEPARATOR);
        let name = segments.next().unwrap_or_default().to_string();
        let keys: Vec<String> = segments
            .flat_map(|segment| segment.split(MEMBER_PATH_SEPARATOR))
            .map(str::to_string)
            .collect();

        Self {
            name,
            member_path: if keys.is_empty() { None } else { Some(keys) },
        }
    }
}
