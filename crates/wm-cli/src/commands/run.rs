//! `wm run` — start the WM API.
//!
//! The API server does not exist yet; this prints a banner and returns so
//! the command surface is stable for scripts that will eventually call it.

use tracing::info;

use crate::error::CliResult;
use crate::output::OutputManager;

pub fn execute(output: OutputManager) -> CliResult<()> {
    info!("run command invoked");
    output.print("Running the WM API");
    Ok(())
}
