//! Image build engines.

use riff_core::{
    application::{BuildOptions, BuildReport, ExecutionMode, Stage, ports::ImageBuilder},
    error::RiffResult,
};
use tracing::{info, instrument};

use super::{Invocation, locate, run};

fn build_invocation(options: &BuildOptions) -> Invocation {
    Invocation::new("docker")
        .arg("build")
        .arg("-t")
        .arg(options.image.to_string())
        .arg(options.function_root.display().to_string())
}

fn push_invocation(options: &BuildOptions) -> Invocation {
    Invocation::new("docker")
        .arg("push")
        .arg(options.image.to_string())
}

fn invocations(options: &BuildOptions) -> Vec<Invocation> {
    let mut all = vec![build_invocation(options)];
    if options.push {
        all.push(push_invocation(options));
    }
    all
}

/// Builds with the local `docker` CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerBuilder;

impl DockerBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageBuilder for DockerBuilder {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Real
    }

    #[instrument(skip_all, fields(image = %options.image))]
    fn build(&self, options: &BuildOptions) -> RiffResult<BuildReport> {
        let docker = locate(Stage::Build, "docker")?;
        let invocations = invocations(options);
        for invocation in &invocations {
            info!(command = %invocation.display(), "running");
            run(Stage::Build, &docker, invocation)?;
        }
        Ok(BuildReport {
            image: options.image.clone(),
            commands: invocations.iter().map(Invocation::display).collect(),
            pushed: options.push,
            dry_run: false,
        })
    }
}

/// Derives the docker commands without running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunBuilder;

impl DryRunBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageBuilder for DryRunBuilder {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::DryRun
    }

    fn build(&self, options: &BuildOptions) -> RiffResult<BuildReport> {
        Ok(BuildReport {
            image: options.image.clone(),
            commands: invocations(options).iter().map(Invocation::display).collect(),
            pushed: false,
            dry_run: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use riff_core::domain::ImageRef;

    use super::*;

    fn options(push: bool) -> BuildOptions {
        BuildOptions {
            function_root: PathBuf::from("/work/echo"),
            image: ImageRef::new("me", "echo", "0.0.1"),
            push,
            dry_run: true,
        }
    }

    #[test]
    fn dry_run_reports_would_be_commands() {
        let report = DryRunBuilder::new().build(&options(false)).unwrap();
        assert_eq!(report.commands, vec!["docker build -t me/echo:0.0.1 /work/echo"]);
        assert!(report.dry_run);
        assert!(!report.pushed);
    }

    #[test]
    fn push_adds_a_second_command() {
        let report = DryRunBuilder::new().build(&options(true)).unwrap();
        assert_eq!(report.commands.len(), 2);
        assert_eq!(report.commands[1], "docker push me/echo:0.0.1");
    }

    #[test]
    fn dry_run_is_deterministic() {
        let a = DryRunBuilder::new().build(&options(true)).unwrap();
        let b = DryRunBuilder::new().build(&options(true)).unwrap();
        assert_eq!(a, b);
    }
}
