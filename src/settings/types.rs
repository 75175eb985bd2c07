use crate::macros::Macro;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted plugin settings object.
///
/// Every field carries a serde default so settings written by any earlier
/// plugin version still deserialize; migrations then bring the loaded value
/// up to the current shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub input_prompt: InputPrompt,
    pub dev_mode: bool,
    /// Deprecated, replaced by `template_folder_path`.
    pub template_folder: String,
    pub template_folder_path: String,
    pub announce_updates: bool,
    pub version: String,
    pub choices: Vec<Choice>,
    pub macros: Vec<Macro>,
    /// Migration key -> "already applied". Missing keys count as not applied.
    pub migrations: BTreeMap<String, bool>,
}

impl Settings {
    /// Visit every choice, including those nested inside multi-choice
    /// groups, in declaration order.
    pub fn walk_choices_mut<F: FnMut(&mut Choice)>(&mut self, visit: &mut F) {
        walk(&mut self.choices, visit);
    }
}

fn walk<F: FnMut(&mut Choice)>(choices: &mut Vec<Choice>, visit: &mut F) {
    for choice in choices {
        visit(choice);
        if let Choice::Multi(group) = choice {
            walk(&mut group.choices, visit);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputPrompt {
    #[default]
    SingleLine,
    MultiLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Choice {
    Template(TemplateChoice),
    Capture(CaptureChoice),
    Macro(MacroChoice),
    Multi(MultiChoice),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateChoice {
    pub id: String,
    pub name: String,
    pub template_path: String,
    pub file_exists_behavior: FileExistsBehavior,
    /// Deprecated, folded into `file_exists_behavior`.
    pub increment_file_name: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureChoice {
    pub id: String,
    pub name: String,
    pub capture_to: String,
    pub insert_after: InsertAfter,
    pub write_to_bottom: bool,
    pub file_exists_behavior: FileExistsBehavior,
    /// Deprecated, folded into `file_exists_behavior`.
    pub increment_file_name: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertAfter {
    pub enabled: bool,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MacroChoice {
    pub id: String,
    pub name: String,
    pub macro_id: Option<String>,
    /// Deprecated, hoisted into `Settings::macros` by migration.
    pub embedded_macro: Option<Macro>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiChoice {
    pub id: String,
    pub name: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileExistsBehavior {
    #[default]
    Increment,
    Overwrite,
    AppendLink,
    Nothing,
}
