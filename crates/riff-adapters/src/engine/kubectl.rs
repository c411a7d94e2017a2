//! Manifest apply engines.

use riff_core::{
    application::{
        ApplicationError, ApplyOptions, ApplyReport, ExecutionMode, Stage, ports::ManifestApplier,
    },
    error::RiffResult,
};
use tracing::{info, instrument};

use super::{Invocation, locate, run};

fn apply_invocation(options: &ApplyOptions) -> RiffResult<Invocation> {
    if options.manifests.is_empty() {
        return Err(ApplicationError::stage(Stage::Apply, "no manifests to apply").into());
    }
    let mut invocation = Invocation::new("kubectl").arg("apply");
    if let Some(namespace) = &options.namespace {
        invocation = invocation.arg("--namespace").arg(namespace.clone());
    }
    for manifest in &options.manifests {
        invocation = invocation.arg("-f").arg(manifest.display().to_string());
    }
    Ok(invocation)
}

/// Applies with the local `kubectl` CLI against the current context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubectlApplier;

impl KubectlApplier {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestApplier for KubectlApplier {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Real
    }

    #[instrument(skip_all, fields(image = %options.image))]
    fn apply(&self, options: &ApplyOptions) -> RiffResult<ApplyReport> {
        let invocation = apply_invocation(options)?;
        let kubectl = locate(Stage::Apply, "kubectl")?;
        info!(command = %invocation.display(), "running");
        run(Stage::Apply, &kubectl, &invocation)?;
        Ok(ApplyReport {
            commands: vec![invocation.display()],
            applied: options.manifests.clone(),
            dry_run: false,
        })
    }
}

/// Validates the apply request and reports the command; contacts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunApplier;

impl DryRunApplier {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestApplier for DryRunApplier {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::DryRun
    }

    fn apply(&self, options: &ApplyOptions) -> RiffResult<ApplyReport> {
        let invocation = apply_invocation(options)?;
        Ok(ApplyReport {
            commands: vec![invocation.display()],
            applied: Vec::new(),
            dry_run: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use riff_core::domain::ImageRef;

    use super::*;

    fn options(namespace: Option<&str>, manifests: &[&str]) -> ApplyOptions {
        ApplyOptions {
            function_root: PathBuf::from("/work/echo"),
            manifests: manifests.iter().map(PathBuf::from).collect(),
            namespace: namespace.map(str::to_string),
            image: ImageRef::new("me", "echo", "0.0.1"),
            dry_run: true,
        }
    }

    #[test]
    fn topics_are_applied_before_the_function() {
        let report = DryRunApplier::new()
            .apply(&options(
                None,
                &["/work/echo/echo-topics.yaml", "/work/echo/echo-function.yaml"],
            ))
            .unwrap();
        assert_eq!(
            report.commands,
            vec![
                "kubectl apply -f /work/echo/echo-topics.yaml -f /work/echo/echo-function.yaml"
            ]
        );
        assert!(report.applied.is_empty());
    }

    #[test]
    fn namespace_is_passed_through() {
        let report = DryRunApplier::new()
            .apply(&options(Some("fns"), &["/a-function.yaml"]))
            .unwrap();
        assert_eq!(
            report.commands[0],
            "kubectl apply --namespace fns -f /a-function.yaml"
        );
    }

    #[test]
    fn empty_manifest_list_is_rejected() {
        let err = DryRunApplier::new().apply(&options(None, &[])).unwrap_err();
        assert_eq!(err.to_string(), "no manifests to apply");
    }
}
