use crate::engine::executor::{MacroExecutor, ScriptHost};
use crate::macros::{Macro, MacroReference};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Runs one macro addressed by a qualified reference and returns its output.
///
/// Lookup is lenient: an unregistered macro name yields `Ok(None)` without
/// executing anything. Everything after the lookup is strict; command
/// failures and member-path mismatches propagate as errors.
pub struct SingleMacroRunner<H: ScriptHost> {
    executor: MacroExecutor<H>,
    macros: Vec<Macro>,
}

impl<H: ScriptHost> SingleMacroRunner<H> {
    pub fn new(host: H, macros: Vec<Macro>) -> Self {
        Self::with_variables(host, macros, BTreeMap::new())
    }

    pub fn with_variables(
        host: H,
        macros: Vec<Macro>,
        variables: BTreeMap<String, String>,
    ) -> Self {
        Self {
            executor: MacroExecutor::with_variables(host, variables),
            macros,
        }
    }

    pub fn host(&self) -> &H {
        self.executor.host()
    }

    /// Resolve `qualified_name` ("Name" or "Name::path.to.member"), execute
    /// the named macro's commands, and return the accumulated output.
    pub async fn run_and_get_output(&mut self, qualified_name: &str) -> Result<Option<String>> {
        let reference = MacroReference::parse(qualified_name);
        let Some(found) = self.macros.iter().find(|m| m.name == reference.name) else {
            debug!("macro '{}' is not registered, nothing to run", reference.name);
            return Ok(None);
        };

        self.executor
            .execute_commands(&found.commands, reference.member_path.as_deref())
            .await
            .with_context(|| format!("macro '{}' failed", reference.name))?;

        Ok(self.executor.output().map(str::to_string))
    }
}
