pub mod executor;
pub mod member_path;
pub mod single;

pub use executor::{MacroExecutor, ScriptHost};
pub use single::SingleMacroRunner;
