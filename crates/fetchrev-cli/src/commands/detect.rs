//! `fetchrev detect`: report the scheme a repository answers on.

use serde::Serialize;

use fetchrev_core::domain::Vcs;

use crate::{
    cli::{DetectArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Detection<'a> {
    vcs: Vcs,
    repo: &'a str,
    scheme: &'static str,
    url: String,
}

pub fn execute(
    args: DetectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let vcs = super::resolve_vcs(args.vcs, &config)?;

    let spinner = output.spinner(format!("Probing {}", args.repo));
    let result = super::service().detect_scheme(vcs, &args.repo, global.show_vcs_output());
    spinner.finish_and_clear();
    let scheme = result?;

    let url = args.repo.qualified(scheme);
    match output.format() {
        OutputFormat::Json => output.json(&Detection {
            vcs,
            repo: args.repo.as_str(),
            scheme,
            url,
        })?,
        // Scripts read the bare URL.
        OutputFormat::Plain => output.print(&url)?,
        _ => output.success(&format!("{} answers on {url}", vcs.kind().display_name()))?,
    }

    Ok(())
}
