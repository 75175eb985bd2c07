use crate::migrations::Migration;
use crate::plugin::Plugin;
use crate::settings::Choice;
use anyhow::Result;

pub(super) fn migration<H: Send>() -> Migration<H> {
    Migration {
        key: "mutualExclusionInsertAfterAndWriteToBottom",
        description: "capture choices cannot both insert after a line and write to the bottom of the file",
        run: |plugin| Box::pin(apply(plugin)),
    }
}

// Insert-after wins: it is the more specific placement.
async fn apply<H: Send>(plugin: &mut Plugin<H>) -> Result<()> {
    plugin.settings.walk_choices_mut(&mut |choice| {
        if let Choice::Capture(capture) = choice
            && capture.insert_after.enabled
            && capture.write_to_bottom
        {
            capture.write_to_bottom = false;
        }
    });
    Ok(())
}
