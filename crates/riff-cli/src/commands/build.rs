//! Implementation of the `riff build` command.

use tracing::instrument;

use crate::{
    cli::FunctionArgs,
    commands::{CommandContext, report},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: FunctionArgs, ctx: &CommandContext, output: &OutputManager) -> CliResult<()> {
    let outcome = ctx.pipeline(&args)?.build(&args.to_request())?;

    if output.is_json() {
        return output.json(&outcome);
    }
    if args.dry_run() {
        report::dry_run_banner(output)?;
    }
    report::build(output, &outcome.build)
}
