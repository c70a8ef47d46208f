//! reset command - delete all of the account's tasks.
//!
//! Destructive and irreversible, so it prompts for confirmation unless
//! `--force` is given.

use std::io::{self, Write};

use anyhow::Result;
use reqwest::Method;

use super::{runtime, Context};
use crate::api::RequestSpec;
use crate::ui::output;

/// Reset the account after confirmation.
pub fn reset(ctx: &Context, force: bool) -> Result<()> {
    if !force && !confirm("Delete ALL of the account's tasks?")? {
        output::print("Aborted.", ctx.verbosity);
        return Ok(());
    }

    let rt = runtime()?;
    let client = ctx.client();
    rt.block_on(client.send(
        RequestSpec::new("user")
            .aspect("reset")
            .method(Method::POST),
    ))?;

    output::print("Account tasks deleted.", ctx.verbosity);
    Ok(())
}

/// Ask a yes/no question on the terminal, defaulting to no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
