//! Implementation of the `fetchrev clone` command.
//!
//! Responsibility: resolve defaults, call the core clone service, and
//! display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use fetchrev_core::domain::Vcs;

use crate::{
    cli::{CloneArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct CloneReport<'a> {
    vcs: Vcs,
    repo: &'a str,
    revision: &'a str,
    root: PathBuf,
}

/// Execute the `fetchrev clone` command.
#[instrument(skip_all, fields(repo = %args.repo, tag = %args.tag))]
pub fn execute(
    args: CloneArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let vcs = super::resolve_vcs(args.vcs, &config)?;
    let root = args.root.unwrap_or(config.defaults.root);

    debug!(vcs = %vcs, root = %root.display(), "Arguments resolved");

    let spinner = output.spinner(format!(
        "Cloning {} ({}) at {}",
        args.repo,
        vcs.kind().display_name(),
        args.tag
    ));
    let result = super::service().clone(vcs, &args.repo, &args.tag, &root, global.show_vcs_output());
    spinner.finish_and_clear();
    result?;

    if output.format() == OutputFormat::Json {
        output.json(&CloneReport {
            vcs,
            repo: args.repo.as_str(),
            revision: args.tag.as_str(),
            root,
        })?;
    } else {
        output.success(&format!(
            "Cloned {} at {} into {}",
            args.repo,
            args.tag,
            root.display()
        ))?;
    }

    Ok(())
}
