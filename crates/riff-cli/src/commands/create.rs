//! Implementation of the `riff create` command.
//!
//! Resolve, then scaffold, build and apply. The language subcommand (if any)
//! pins the variant; otherwise it is inferred from the artifact.

use tracing::instrument;

use crate::{
    cli::LanguageSelectArgs,
    commands::{CommandContext, report},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: LanguageSelectArgs,
    ctx: &CommandContext,
    output: &OutputManager,
) -> CliResult<()> {
    let (language, function) = args.into_parts();
    let pipeline = ctx.pipeline(&function)?;
    let outcome = pipeline.create(&function.to_request(), language)?;

    if output.is_json() {
        return output.json(&outcome);
    }

    if function.dry_run() {
        report::dry_run_banner(output)?;
    }
    report::options(output, &outcome.options)?;
    report::scaffold(output, &outcome.scaffold)?;
    report::build(output, &outcome.build)?;
    report::apply(output, &outcome.apply)?;

    if !function.dry_run() {
        output.success(&format!("Function {} created", outcome.options.name))?;
    }
    Ok(())
}
