use crate::macros::Macro;
use crate::migrations::Migration;
use crate::plugin::Plugin;
use crate::settings::Choice;
use anyhow::Result;
use uuid::Uuid;

pub(super) fn migration<H: Send>() -> Migration<H> {
    Migration {
        key: "macroIdFromEmbeddedMacro",
        description: "reference macros by id instead of embedding them in macro choices",
        run: |plugin| Box::pin(apply(plugin)),
    }
}

/// Macro choices historically carried their macro inline. Hoist each
/// embedded macro into the plugin-wide registry, minting an id where the
/// embedded copy has none, and point the choice at that id.
async fn apply<H: Send>(plugin: &mut Plugin<H>) -> Result<()> {
    let settings = &mut plugin.settings;

    let mut hoisted: Vec<Macro> = Vec::new();
    fn hoist(choices: &mut Vec<Choice>, hoisted: &mut Vec<Macro>) {
        for choice in choices {
            match choice {
                Choice::Macro(macro_choice) => {
                    if let Some(mut embedded) = macro_choice.embedded_macro.take() {
                        if embedded.id.is_empty() {
                            embedded.id = Uuid::new_v4().to_string();
                        }
                        macro_choice.macro_id = Some(embedded.id.clone());
                        hoisted.push(embedded);
                    }
                }
                Choice::Multi(group) => hoist(&mut group.choices, hoisted),
                _ => {}
            }
        }
    }
    hoist(&mut settings.choices, &mut hoisted);

    for hoisted_macro in hoisted {
        if !settings.macros.iter().any(|m| m.id == hoisted_macro.id) {
            settings.macros.push(hoisted_macro);
        }
    }
    Ok(())
}
