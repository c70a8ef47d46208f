//! Binary entry point for `ql`.

use anyhow::Result;

fn main() -> Result<()> {
    questline::cli::run()
}
