//! Tag commands - list, add, delete, and rename.

use anyhow::Result;

use super::{runtime, Context};
use crate::cli::args::TagAction;
use crate::core::select::Selection;
use crate::ops::tags::{add_tag, delete_tags, fetch_tags, rename_tag, resolve_tags};
use crate::ui::{output, render};

/// Run one tag action.
pub fn tags(ctx: &Context, action: &TagAction) -> Result<()> {
    let rt = runtime()?;
    let client = ctx.client();

    rt.block_on(async {
        match action {
            TagAction::List => {}

            TagAction::Add { text } => {
                add_tag(&client, text).await?;
            }

            TagAction::Delete { ids } => {
                let selection = Selection::parse(ids);
                output::debug(format!("selection: {:?}", selection), ctx.verbosity);
                let snapshot = fetch_tags(&client).await?;
                if let Selection::Names(names) = &selection {
                    for name in names {
                        if !snapshot.iter().any(|tag| &tag.name == name) {
                            output::warn(format!("no tag named '{}'", name), ctx.verbosity);
                        }
                    }
                }
                let resolved = resolve_tags(&selection, &snapshot)?;
                delete_tags(&client, &resolved).await?;
            }

            TagAction::Rename { ids, text } => {
                let selection = Selection::parse(ids);
                let snapshot = fetch_tags(&client).await?;
                let resolved = resolve_tags(&selection, &snapshot)?;
                rename_tag(&client, &resolved, text).await?;
            }
        }

        let tags = fetch_tags(&client).await?;
        if !tags.is_empty() {
            output::print(render::render_tags(&tags), ctx.verbosity);
        }
        Ok(())
    })
}
