use crate::helpers::scripts::ScriptedHost;
use anyhow::Result;
use serde_json::json;
use vaultadd::engine::SingleMacroRunner;
use vaultadd::macros::{Command, Macro};

fn macro_named(name: &str, commands: Vec<Command>) -> Macro {
    Macro {
        id: format!("m-{name}"),
        name: name.to_string(),
        commands,
    }
}

fn stats_runner(host: ScriptedHost) -> SingleMacroRunner<ScriptedHost> {
    SingleMacroRunner::new(
        host,
        vec![macro_named(
            "Stats",
            vec![Command::UserScript {
                path: "scripts/stats.js".into(),
            }],
        )],
    )
}

#[tokio::test]
async fn test_plain_reference_returns_raw_output() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/greet.js", json!("Hello"));
    let mut runner = SingleMacroRunner::new(
        host,
        vec![macro_named(
            "Greeting",
            vec![
                Command::SetVariable {
                    name: "who".into(),
                    value: "world".into(),
                },
                Command::UserScript {
                    path: "scripts/greet.js".into(),
                },
            ],
        )],
    );

    let output = runner.run_and_get_output("Greeting").await?;
    assert_eq!(output.as_deref(), Some("Hello"));
    assert!(runner.host().delegated.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_set_variable_is_visible_to_scripts() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/greet.js", json!("Hello"));
    let mut runner = SingleMacroRunner::new(
        host,
        vec![macro_named(
            "Greeting",
            vec![
                Command::SetVariable {
                    name: "who".into(),
                    value: "world".into(),
                },
                Command::UserScript {
                    path: "scripts/greet.js".into(),
                },
            ],
        )],
    );

    runner.run_and_get_output("Greeting").await?;
    assert_eq!(
        runner.host().seen_variables[0].get("who").map(String::as_str),
        Some("world")
    );
    Ok(())
}

#[tokio::test]
async fn test_member_access_delegates_resolved_value() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/stats.js", json!({"a": {"b": 42}}));
    let mut runner = stats_runner(host);

    runner.run_and_get_output("Stats::a.b").await?;
    assert_eq!(runner.host().delegated, vec![json!(42)]);
    Ok(())
}

#[tokio::test]
async fn test_delegation_reply_becomes_output() -> Result<()> {
    let host = ScriptedHost::new()
        .export("scripts/stats.js", json!({"a": {"b": 42}}))
        .delegate_reply("42");
    let mut runner = stats_runner(host);

    let output = runner.run_and_get_output("Stats::a.b").await?;
    assert_eq!(output.as_deref(), Some("42"));
    Ok(())
}

#[tokio::test]
async fn test_structured_export_serialized_without_member_access() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/stats.js", json!({"a": {"b": 42}}));
    let mut runner = stats_runner(host);

    let output = runner.run_and_get_output("Stats").await?;
    assert_eq!(output.as_deref(), Some(r#"{"a":{"b":42}}"#));
    assert!(runner.host().delegated.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_member_access_does_not_leak_between_invocations() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/stats.js", json!({"a": {"b": 42}}));
    let mut runner = stats_runner(host);

    runner.run_and_get_output("Stats::a.b").await?;
    let output = runner.run_and_get_output("Stats").await?;

    assert_eq!(output.as_deref(), Some(r#"{"a":{"b":42}}"#));
    assert_eq!(runner.host().delegated.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unknown_macro_is_silent_no_op() -> Result<()> {
    let host = ScriptedHost::new().export("scripts/greet.js", json!("Hello"));
    let mut runner = SingleMacroRunner::new(
        host,
        vec![macro_named(
            "Greeting",
            vec![Command::UserScript {
                path: "scripts/greet.js".into(),
            }],
        )],
    );

    let output = runner.run_and_get_output("Missing").await?;
    assert_eq!(output, None);
    assert!(runner.host().script_runs.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_member_is_fatal() {
    let host = ScriptedHost::new().export("scripts/stats.js", json!({"a": {"b": 42}}));
    let mut runner = stats_runner(host);

    let error = runner
        .run_and_get_output("Stats::a.missing")
        .await
        .unwrap_err();
    assert!(format!("{error:#}").contains("not found"));
}

#[tokio::test]
async fn test_nested_choice_commands_delegate_to_host() -> Result<()> {
    let host = ScriptedHost::new();
    let mut runner = SingleMacroRunner::new(
        host,
        vec![macro_named(
            "Routine",
            vec![Command::Choice {
                name: "Capture Inbox".into(),
            }],
        )],
    );

    runner.run_and_get_output("Routine").await?;
    assert_eq!(runner.host().choices, vec!["Capture Inbox"]);
    Ok(())
}
