//! server command - check whether the service is reachable and up.

use anyhow::Result;
use serde_json::Value;

use super::{runtime, Context};
use crate::api::RequestSpec;
use crate::ui::output;

/// Query the service's status endpoint and report the result.
pub fn server(ctx: &Context) -> Result<()> {
    let rt = runtime()?;
    let client = ctx.client();

    let data = rt.block_on(client.send(RequestSpec::new("status")))?;
    if data.get("status").and_then(Value::as_str) == Some("up") {
        output::print("Service is up", ctx.verbosity);
    } else {
        output::print(
            "Service is down... or your computer cannot connect",
            ctx.verbosity,
        );
    }
    Ok(())
}
