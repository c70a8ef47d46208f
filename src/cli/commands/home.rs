//! home command - open the service's task page in a browser.

use anyhow::{Context as _, Result};

use super::Context;
use crate::ui::output;

/// Web path of the task page, relative to the configured base URL.
const TASKS_PAGE: &str = "/#/tasks";

/// Open the task page in the default browser.
pub fn home(ctx: &Context) -> Result<()> {
    let url = format!("{}{}", ctx.config.base_url(), TASKS_PAGE);
    output::print(format!("Opening {}", url), ctx.verbosity);
    open::that(&url).with_context(|| format!("failed to open '{}'", url))?;
    Ok(())
}
