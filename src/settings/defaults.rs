use super::types::{InputPrompt, Settings};
use std::collections::BTreeMap;

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_prompt: InputPrompt::SingleLine,
            dev_mode: false,
            template_folder: String::new(),
            template_folder_path: String::new(),
            announce_updates: true,
            version: String::new(),
            choices: Vec::new(),
            macros: Vec::new(),
            migrations: BTreeMap::new(),
        }
    }
}
