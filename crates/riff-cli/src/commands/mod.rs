//! Command handlers.
//!
//! Each handler turns parsed arguments into a core request, runs it through a
//! [`CreatePipeline`] wired for real or dry-run execution, and reports the
//! outcome. No resolution rules live here.

pub mod apply;
pub mod build;
pub mod completions;
pub mod create;
pub mod init;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use riff_adapters::{
    DockerBuilder, DryRunApplier, DryRunBuilder, DryRunFilesystem, InvokerRenderer,
    KubectlApplier, LocalFilesystem,
};
use riff_core::application::{CreatePipeline, Resolver, ScaffoldService};

use crate::{cli::FunctionArgs, config::AppConfig, error::CliResult};

/// Process-level state shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: AppConfig,
    /// Captured once at startup; relative function paths are joined onto it.
    pub working_dir: PathBuf,
}

impl CommandContext {
    /// Wire a pipeline for `args`. `--dry-run` swaps every port for its
    /// side-effect-free variant.
    pub fn pipeline(&self, args: &FunctionArgs) -> CliResult<CreatePipeline> {
        let resolver = Resolver::new(self.config.resolve_context(
            self.working_dir.clone(),
            args.common.invoker_version.clone(),
        ));
        let renderer = Box::new(InvokerRenderer::new());

        let pipeline = if args.dry_run() {
            debug!("wiring dry-run pipeline");
            CreatePipeline::new(
                resolver,
                ScaffoldService::new(renderer, Arc::new(DryRunFilesystem::new())),
                Box::new(DryRunBuilder::new()),
                Box::new(DryRunApplier::new()),
            )?
        } else {
            CreatePipeline::new(
                resolver,
                ScaffoldService::new(renderer, Arc::new(LocalFilesystem::new())),
                Box::new(DockerBuilder::new()),
                Box::new(KubectlApplier::new()),
            )?
        };
        Ok(pipeline)
    }
}
