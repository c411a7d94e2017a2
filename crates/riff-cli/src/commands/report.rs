//! Human-readable rendering of stage outcomes.

use riff_core::application::{ApplyReport, BuildReport, FileAction, ScaffoldReport};
use riff_core::domain::InitOptions;

use crate::{error::CliResult, output::OutputManager};

pub fn dry_run_banner(output: &OutputManager) -> CliResult<()> {
    output.header("Dry run: nothing is written, built or applied")?;
    Ok(())
}

pub fn options(output: &OutputManager, options: &InitOptions) -> CliResult<()> {
    output.info(&format!(
        "Function {} ({}) in {}",
        options.name,
        options.language,
        options.file_path.display()
    ))?;
    output.field("artifact", &options.artifact.display().to_string())?;
    if let Some(handler) = &options.handler {
        output.field("handler", handler)?;
    }
    output.field("protocol", options.protocol.as_str())?;
    output.field("input", &options.input)?;
    if let Some(topic) = &options.output {
        output.field("output", topic)?;
    }
    output.field("image", &options.image().to_string())?;
    output.field("invoker", &options.invoker_image())?;
    if let Some(namespace) = &options.namespace {
        output.field("namespace", namespace)?;
    }
    Ok(())
}

pub fn scaffold(output: &OutputManager, report: &ScaffoldReport) -> CliResult<()> {
    for file in &report.files {
        let path = file.path.display();
        match file.action {
            FileAction::Written => output.success(&format!("Wrote {path}"))?,
            FileAction::Skipped => {
                output.warning(&format!("Skipped {path} (exists; use --force to overwrite)"))?
            }
            FileAction::Previewed => {
                output.info(&format!("Would write {path}:"))?;
                output.block(&file.content)?;
            }
        }
    }
    Ok(())
}

pub fn build(output: &OutputManager, report: &BuildReport) -> CliResult<()> {
    if report.dry_run {
        for command in &report.commands {
            output.info(&format!("Would run: {command}"))?;
        }
    } else {
        output.success(&format!("Built image {}", report.image))?;
        if report.pushed {
            output.success(&format!("Pushed image {}", report.image))?;
        }
    }
    Ok(())
}

pub fn apply(output: &OutputManager, report: &ApplyReport) -> CliResult<()> {
    if report.dry_run {
        for command in &report.commands {
            output.info(&format!("Would run: {command}"))?;
        }
    } else {
        for manifest in &report.applied {
            output.success(&format!("Applied {}", manifest.display()))?;
        }
    }
    Ok(())
}
