//! `fetchrev update`: move an existing working copy to another revision.

use tracing::instrument;

use crate::{
    cli::{UpdateArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dir = %args.dir.display(), tag = %args.tag))]
pub fn execute(
    args: UpdateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let vcs = super::resolve_vcs(args.vcs, &config)?;

    let spinner = output.spinner(format!("Updating {} to {}", args.dir.display(), args.tag));
    let result = super::service().update(vcs, &args.dir, &args.tag, global.show_vcs_output());
    spinner.finish_and_clear();
    result?;

    output.success(&format!("{} is now at {}", args.dir.display(), args.tag))?;
    Ok(())
}
