//! status command - show HP, XP, party, quest, and more.

use anyhow::Result;

use super::{runtime, Context};
use crate::core::cache;
use crate::ops::status::fetch_status;
use crate::ui::{output, render};

/// Fetch and print the account status panel.
pub fn status(ctx: &Context) -> Result<()> {
    let rt = runtime()?;
    let client = ctx.client();
    let cache_path = cache::default_path()?;

    let report = rt.block_on(fetch_status(&client, &cache_path, ctx.verbosity))?;
    output::print(render::render_status(&report), ctx.verbosity);
    Ok(())
}
