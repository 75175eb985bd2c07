use crate::engine::member_path;
use crate::macros::Command;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// The host-side collaborators the engine delegates to: script execution,
/// nested-choice execution, and the user-script delegation hook that
/// receives member-path-resolved export values.
#[allow(async_fn_in_trait)]
pub trait ScriptHost {
    /// Run a user script and return its exported value. Scripts see the
    /// current variables map.
    async fn run_script(
        &mut self,
        path: &str,
        variables: &BTreeMap<String, String>,
    ) -> Result<Value>;

    /// Execute another choice by name.
    async fn run_choice(&mut self, name: &str) -> Result<()>;

    /// Receive a member-path-resolved export value. A returned string
    /// becomes the engine output.
    async fn delegate_export(&mut self, value: &Value) -> Result<Option<String>>;
}

/// Executes a macro's command sequence against a [`ScriptHost`], holding the
/// variables map and the output accumulator for one invocation.
pub struct MacroExecutor<H: ScriptHost> {
    host: H,
    variables: BTreeMap<String, String>,
    output: Option<String>,
}

impl<H: ScriptHost> MacroExecutor<H> {
    pub fn new(host: H) -> Self {
        Self::with_variables(host, BTreeMap::new())
    }

    pub fn with_variables(host: H, variables: BTreeMap<String, String>) -> Self {
        Self {
            host,
            variables,
            output: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// The accumulated output of the last `execute_commands` call.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Run a command sequence in order. `member_path` is the parsed member
    /// access of the current invocation; it only affects how structured
    /// script exports are handled.
    pub async fn execute_commands(
        &mut self,
        commands: &[Command],
        member_path: Option<&[String]>,
    ) -> Result<()> {
        debug!("executing {} macro commands", commands.len());
        for command in commands {
            match command {
                Command::SetVariable { name, value } => {
                    self.variables.insert(name.clone(), value.clone());
                }
                Command::Wait { delay_ms } => {
                    tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                }
                Command::Choice { name } => {
                    self.host
                        .run_choice(name)
                        .await
                        .with_context(|| format!("nested choice '{name}' failed"))?;
                }
                Command::UserScript { path } => {
                    let exported = self
                        .host
                        .run_script(path, &self.variables)
                        .await
                        .with_context(|| format!("user script '{path}' failed"))?;
                    self.export(exported, member_path).await?;
                }
            }
        }
        Ok(())
    }

    async fn export(&mut self, value: Value, member_path: Option<&[String]>) -> Result<()> {
        match value {
            Value::Null => {}
            Value::String(text) => self.output = Some(text),
            Value::Bool(flag) => self.output = Some(flag.to_string()),
            Value::Number(number) => self.output = Some(number.to_string()),
            structured @ (Value::Object(_) | Value::Array(_)) => {
                self.export_structured(structured, member_path).await?;
            }
        }
        Ok(())
    }

    /// Structured exports default to being serialized into the output.
    /// With a member path, the resolved value is handed to the host's
    /// delegation hook instead.
    async fn export_structured(
        &mut self,
        value: Value,
        member_path: Option<&[String]>,
    ) -> Result<()> {
        let Some(path) = member_path else {
            self.output = Some(serde_json::to_string(&value)?);
            return Ok(());
        };

        let resolved = member_path::resolve(&value, path)?;
        if let Some(text) = self.host.delegate_export(resolved).await? {
            self.output = Some(text);
        }
        Ok(())
    }
}
