mod defaults;
mod types;

pub use types::{
    CaptureChoice, Choice, FileExistsBehavior, InputPrompt, InsertAfter, MacroChoice, MultiChoice,
    Settings, TemplateChoice,
};
