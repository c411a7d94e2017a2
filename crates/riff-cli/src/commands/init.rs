//! Implementation of the `riff init` command: write the descriptor only.

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
    let outcome = ctx
        .pipeline(&function)?
        .init(&function.to_request(), language)?;

    if output.is_json() {
        return output.json(&outcome);
    }
    if function.dry_run() {
        report::dry_run_banner(output)?;
    }
    report::options(output, &outcome.options)?;
    report::scaffold(output, &outcome.scaffold)
}
