use crate::migrations::Migration;
use crate::plugin::Plugin;
use crate::settings::{Choice, FileExistsBehavior};
use anyhow::Result;

pub(super) fn migration<H: Send>() -> Migration<H> {
    Migration {
        key: "incrementFileNameToFileExistsBehavior",
        description: "fold the incrementFileName toggle into the fileExistsBehavior policy",
        run: |plugin| Box::pin(apply(plugin)),
    }
}

async fn apply<H: Send>(plugin: &mut Plugin<H>) -> Result<()> {
    plugin.settings.walk_choices_mut(&mut |choice| match choice {
        Choice::Template(template) => {
            if template.increment_file_name {
                template.file_exists_behavior = FileExistsBehavior::Increment;
                template.increment_file_name = false;
            }
        }
        Choice::Capture(capture) => {
            if capture.increment_file_name {
                capture.file_exists_behavior = FileExistsBehavior::Increment;
                capture.increment_file_name = false;
            }
        }
        _ => {}
    });
    Ok(())
}
