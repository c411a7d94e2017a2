//! Build and apply engines.
//!
//! Real engines shell out to `docker` and `kubectl`; dry-run engines derive
//! the same commands and return them without spawning anything.

mod docker;
mod kubectl;

pub use docker::{DockerBuilder, DryRunBuilder};
pub use kubectl::{DryRunApplier, KubectlApplier};

use std::path::{Path, PathBuf};
use std::process::Command;

use riff_core::{
    application::{ApplicationError, Stage},
    error::RiffResult,
};
use tracing::{debug, instrument};

/// One engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub tool: &'static str,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(tool: &'static str) -> Self {
        Self {
            tool,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Shell-style rendering for reports and logs.
    pub fn display(&self) -> String {
        std::iter::once(self.tool.to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Locate `tool` on `PATH`.
pub(crate) fn locate(stage: Stage, tool: &'static str) -> RiffResult<PathBuf> {
    which::which(tool).map_err(|_| ApplicationError::ToolNotFound { stage, tool }.into())
}

/// Run `invocation` to completion. A non-zero exit becomes a stage failure
/// carrying the tool's own stderr.
#[instrument(skip_all, fields(command = %invocation.display()))]
pub(crate) fn run(stage: Stage, program: &Path, invocation: &Invocation) -> RiffResult<()> {
    let output = Command::new(program)
        .args(&invocation.args)
        .output()
        .map_err(|e| ApplicationError::stage(stage, format!("failed to run {}: {e}", invocation.tool)))?;

    debug!(status = %output.status, "engine exited");
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = if stderr.is_empty() {
        format!("{} exited with {}", invocation.tool, output.status)
    } else {
        stderr
    };
    Err(ApplicationError::stage(stage, message).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display() {
        let inv = Invocation::new("docker").arg("push").arg("me/echo:0.0.1");
        assert_eq!(inv.display(), "docker push me/echo:0.0.1");
    }

    #[test]
    fn missing_tool_is_reported() {
        let err = locate(Stage::Build, "riff-no-such-engine-binary").unwrap_err();
        assert_eq!(err.to_string(), "riff-no-such-engine-binary not found on PATH");
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_keeps_stderr() {
        let sh = locate(Stage::Build, "sh").unwrap();
        let inv = Invocation::new("sh").arg("-c").arg("echo 'denied: nope' >&2; exit 1");
        let err = run(Stage::Build, &sh, &inv).unwrap_err();
        assert_eq!(err.to_string(), "denied: nope");
    }
}
