use crate::migrations::Migration;
use crate::plugin::Plugin;
use anyhow::Result;

pub(super) fn migration<H: Send>() -> Migration<H> {
    Migration {
        key: "useTemplateFolderPath",
        description: "move the template folder from the deprecated templateFolder key to templateFolderPath",
        run: |plugin| Box::pin(apply(plugin)),
    }
}

async fn apply<H: Send>(plugin: &mut Plugin<H>) -> Result<()> {
    let settings = &mut plugin.settings;
    if settings.template_folder_path.is_empty() && !settings.template_folder.is_empty() {
        settings.template_folder_path = settings.template_folder.clone();
    }
    settings.template_folder.clear();
    Ok(())
}
