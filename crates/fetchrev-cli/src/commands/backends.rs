//! Implementation of the `fetchrev backends` command.

use fetchrev_core::application::{BackendInfo, CloneService};

use crate::{
    cli::{BackendsArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: BackendsArgs, output: OutputManager) -> CliResult<()> {
    let backends = CloneService::list_backends();

    // The global JSON format overrides the table default.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Supported version-control systems:")?;
            for backend in &backends {
                output.print(&table_row(backend))?;
            }
        }
        ListFormat::Json => output.json(&backends)?,
        ListFormat::List => {
            for backend in &backends {
                output.print(&backend.tag)?;
            }
        }
    }

    Ok(())
}

fn table_row(backend: &BackendInfo) -> String {
    format!(
        "  {:<4} {:<11} schemes: {:<24} update: {}",
        backend.tag,
        backend.name,
        backend.schemes.join(", "),
        backend.update_template
    )
}
