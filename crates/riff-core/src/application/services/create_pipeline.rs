//! The create pipeline: Resolve → Scaffold → Build → Apply.
//!
//! Every entry point resolves first, so `init`, `build` and `apply` accept
//! the same request as `create`. Stages run strictly in order and the first
//! failure stops the pipeline; nothing already done is undone.

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ImageBuilder, ManifestApplier},
        resolver::Resolver,
        services::scaffold_service::{ScaffoldReport, ScaffoldService},
        stages::{ApplyOptions, ApplyReport, BuildOptions, BuildReport, ExecutionMode},
    },
    domain::{FunctionRequest, InitOptions, Language},
    error::{RiffError, RiffResult},
};

/// Outcome of `riff init`.
#[derive(Debug, Clone, Serialize)]
pub struct InitOutcome {
    pub options: InitOptions,
    pub scaffold: ScaffoldReport,
}

/// Outcome of `riff build`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub options: InitOptions,
    pub build: BuildReport,
}

/// Outcome of `riff apply`.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyOutcome {
    pub options: InitOptions,
    pub apply: ApplyReport,
}

/// Outcome of `riff create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    pub options: InitOptions,
    pub scaffold: ScaffoldReport,
    pub build: BuildReport,
    pub apply: ApplyReport,
}

/// Runs the create stages against injected engines.
///
/// All ports must share one [`ExecutionMode`]: a dry-run pipeline never
/// spawns processes or writes files, a real one always does.
pub struct CreatePipeline {
    resolver: Resolver,
    scaffold: ScaffoldService,
    builder: Box<dyn ImageBuilder>,
    applier: Box<dyn ManifestApplier>,
    mode: ExecutionMode,
}

impl CreatePipeline {
    pub fn new(
        resolver: Resolver,
        scaffold: ScaffoldService,
        builder: Box<dyn ImageBuilder>,
        applier: Box<dyn ManifestApplier>,
    ) -> RiffResult<Self> {
        let mode = scaffold.mode();
        if builder.mode() != mode || applier.mode() != mode {
            return Err(RiffError::Internal {
                message: format!(
                    "pipeline ports disagree on execution mode (filesystem: {mode}, builder: {}, applier: {})",
                    builder.mode(),
                    applier.mode()
                ),
            });
        }
        Ok(Self {
            resolver,
            scaffold,
            builder,
            applier,
            mode,
        })
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Resolve only; nothing is touched.
    pub fn resolve(
        &self,
        request: &FunctionRequest,
        language: Option<Language>,
    ) -> RiffResult<InitOptions> {
        self.resolver
            .resolve(self.scaffold.filesystem(), request, language)
    }

    #[instrument(skip_all)]
    pub fn init(
        &self,
        request: &FunctionRequest,
        language: Option<Language>,
    ) -> RiffResult<InitOutcome> {
        let options = self.resolve(request, language)?;
        let scaffold = self.scaffold.scaffold(&options)?;
        Ok(InitOutcome { options, scaffold })
    }

    #[instrument(skip_all)]
    pub fn build(&self, request: &FunctionRequest) -> RiffResult<BuildOutcome> {
        let options = self.resolve(request, None)?;
        let build = self.run_build(&options)?;
        Ok(BuildOutcome { options, build })
    }

    #[instrument(skip_all)]
    pub fn apply(&self, request: &FunctionRequest) -> RiffResult<ApplyOutcome> {
        let options = self.resolve(request, None)?;
        let apply = self.run_apply(&options)?;
        Ok(ApplyOutcome { options, apply })
    }

    /// Resolve, then scaffold, build and apply.
    #[instrument(skip_all, fields(mode = %self.mode))]
    pub fn create(
        &self,
        request: &FunctionRequest,
        language: Option<Language>,
    ) -> RiffResult<CreateOutcome> {
        let options = self.resolve(request, language)?;
        info!(name = %options.name, language = %options.language, "creating function");

        let scaffold = self.scaffold.scaffold(&options)?;
        let build = self.run_build(&options)?;
        let apply = self.run_apply(&options)?;

        info!(image = %build.image, "function created");
        Ok(CreateOutcome {
            options,
            scaffold,
            build,
            apply,
        })
    }

    fn run_build(&self, options: &InitOptions) -> RiffResult<BuildReport> {
        let build_options = BuildOptions::from_init(options, self.mode);
        info!(image = %build_options.image, push = build_options.push, "building image");
        self.builder.build(&build_options)
    }

    fn run_apply(&self, options: &InitOptions) -> RiffResult<ApplyReport> {
        let apply_options = ApplyOptions::from_init(options, options.image(), self.mode);
        if apply_options.manifests.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: "no manifests to apply".into(),
            }
            .into());
        }
        info!(manifests = apply_options.manifests.len(), "applying manifests");
        self.applier.apply(&apply_options)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use mockall::Sequence;

    use super::*;
    use crate::application::{
        Stage,
        ports::{MockDescriptorRenderer, MockImageBuilder, MockManifestApplier},
        resolver::{ResolveContext, tests::FakeFs},
    };
    use crate::domain::{Descriptor, DescriptorKind, ImageRef};

    fn fs(mode: ExecutionMode) -> Arc<FakeFs> {
        let mut fs = FakeFs::with_files(&["/work/demo/demo.py"]);
        fs.mode = Some(mode);
        Arc::new(fs)
    }

    fn renderer() -> MockDescriptorRenderer {
        let mut renderer = MockDescriptorRenderer::new();
        renderer.expect_render().returning(|opts| {
            Ok(Descriptor::new(&opts.function_root)
                .with_file("Dockerfile", DescriptorKind::Dockerfile, "FROM x".into()))
        });
        renderer
    }

    fn build_report(options: &BuildOptions) -> BuildReport {
        BuildReport {
            image: options.image.clone(),
            commands: vec![format!("docker build -t {} .", options.image)],
            pushed: false,
            dry_run: options.dry_run,
        }
    }

    fn apply_report(options: &ApplyOptions) -> ApplyReport {
        ApplyReport {
            commands: vec![],
            applied: options.manifests.clone(),
            dry_run: options.dry_run,
        }
    }

    fn pipeline(
        fs: Arc<FakeFs>,
        builder: MockImageBuilder,
        applier: MockManifestApplier,
    ) -> RiffResult<CreatePipeline> {
        pipeline_with(renderer(), fs, builder, applier)
    }

    fn pipeline_with(
        renderer: MockDescriptorRenderer,
        fs: Arc<FakeFs>,
        builder: MockImageBuilder,
        applier: MockManifestApplier,
    ) -> RiffResult<CreatePipeline> {
        let resolver =
            Resolver::new(ResolveContext::new("/work", "0.0.6").with_user_account("me"));
        CreatePipeline::new(
            resolver,
            ScaffoldService::new(Box::new(renderer), fs),
            Box::new(builder),
            Box::new(applier),
        )
    }

    fn builder(mode: ExecutionMode) -> MockImageBuilder {
        let mut builder = MockImageBuilder::new();
        builder.expect_mode().return_const(mode);
        builder
    }

    fn applier(mode: ExecutionMode) -> MockManifestApplier {
        let mut applier = MockManifestApplier::new();
        applier.expect_mode().return_const(mode);
        applier
    }

    #[test]
    fn stages_run_in_order() {
        let mut seq = Sequence::new();
        let mut b = builder(ExecutionMode::Real);
        b.expect_build()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|o| Ok(build_report(o)));
        let mut a = applier(ExecutionMode::Real);
        a.expect_apply()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|o| {
                o.manifests
                    == vec![
                        PathBuf::from("/work/demo/demo-topics.yaml"),
                        PathBuf::from("/work/demo/demo-function.yaml"),
                    ]
            })
            .returning(|o| Ok(apply_report(o)));

        let fs = fs(ExecutionMode::Real);
        let outcome = pipeline(fs.clone(), b, a)
            .unwrap()
            .create(&FunctionRequest::at("demo"), None)
            .unwrap();

        assert_eq!(outcome.options.handler.as_deref(), Some("demo"));
        assert_eq!(outcome.build.image, ImageRef::new("me", "demo", "0.0.1"));
        assert!(fs.content("/work/demo/Dockerfile").is_some());
    }

    #[test]
    fn resolution_failure_runs_no_stage() {
        let mut b = builder(ExecutionMode::Real);
        b.expect_build().never();
        let mut a = applier(ExecutionMode::Real);
        a.expect_apply().never();

        let fs = fs(ExecutionMode::Real);
        let err = pipeline(fs.clone(), b, a)
            .unwrap()
            .create(
                &FunctionRequest::at("demo").with_artifact("demo.py"),
                Some(Language::Command),
            )
            .unwrap_err();

        assert!(err.is_resolution_error());
        assert!(fs.content("/work/demo/Dockerfile").is_none());
    }

    #[test]
    fn build_failure_skips_apply_and_keeps_descriptors() {
        let mut b = builder(ExecutionMode::Real);
        b.expect_build()
            .returning(|_| Err(ApplicationError::stage(Stage::Build, "daemon not running").into()));
        let mut a = applier(ExecutionMode::Real);
        a.expect_apply().never();

        let fs = fs(ExecutionMode::Real);
        let err = pipeline(fs.clone(), b, a)
            .unwrap()
            .create(&FunctionRequest::at("demo"), None)
            .unwrap_err();

        assert_eq!(err.to_string(), "daemon not running");
        assert!(fs.content("/work/demo/Dockerfile").is_some());
    }

    #[test]
    fn scaffold_failure_skips_build_and_apply() {
        let mut r = MockDescriptorRenderer::new();
        r.expect_render().returning(|_| {
            Err(ApplicationError::RenderingFailed {
                reason: "template missing".into(),
            }
            .into())
        });
        let mut b = builder(ExecutionMode::Real);
        b.expect_build().never();
        let mut a = applier(ExecutionMode::Real);
        a.expect_apply().never();

        let fs = fs(ExecutionMode::Real);
        let err = pipeline_with(r, fs.clone(), b, a)
            .unwrap()
            .create(&FunctionRequest::at("demo"), None)
            .unwrap_err();

        assert_eq!(err.to_string(), "descriptor rendering failed: template missing");
        assert!(!err.is_resolution_error());
        assert!(fs.content("/work/demo/Dockerfile").is_none());
    }

    #[test]
    fn apply_failure_message_is_passed_through() {
        let mut b = builder(ExecutionMode::Real);
        b.expect_build().times(1).returning(|o| Ok(build_report(o)));
        let mut a = applier(ExecutionMode::Real);
        a.expect_apply().times(1).returning(|_| {
            Err(ApplicationError::stage(
                Stage::Apply,
                "error: the server doesn't have a resource type \"functions\"",
            )
            .into())
        });

        let fs = fs(ExecutionMode::Real);
        let err = pipeline(fs.clone(), b, a)
            .unwrap()
            .create(&FunctionRequest::at("demo"), None)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "error: the server doesn't have a resource type \"functions\""
        );
        assert!(matches!(
            err,
            RiffError::Application(ApplicationError::StageFailure {
                stage: Stage::Apply,
                ..
            })
        ));
        assert!(fs.content("/work/demo/Dockerfile").is_some());
    }

    #[test]
    fn dry_run_flags_reach_the_engines() {
        let mut b = builder(ExecutionMode::DryRun);
        b.expect_build()
            .withf(|o| o.dry_run)
            .returning(|o| Ok(build_report(o)));
        let mut a = applier(ExecutionMode::DryRun);
        a.expect_apply()
            .withf(|o| o.dry_run)
            .returning(|o| Ok(apply_report(o)));

        let outcome = pipeline(fs(ExecutionMode::DryRun), b, a)
            .unwrap()
            .create(&FunctionRequest::at("demo"), None)
            .unwrap();

        assert!(outcome.scaffold.dry_run);
        assert!(outcome.build.dry_run);
        assert!(outcome.apply.dry_run);
    }

    #[test]
    fn mixed_modes_are_rejected() {
        let result = pipeline(
            fs(ExecutionMode::DryRun),
            builder(ExecutionMode::Real),
            applier(ExecutionMode::DryRun),
        );
        assert!(matches!(result, Err(RiffError::Internal { .. })));
    }

    #[test]
    fn build_alone_resolves_first() {
        let mut b = builder(ExecutionMode::Real);
        b.expect_build().times(1).returning(|o| Ok(build_report(o)));
        let outcome = pipeline(fs(ExecutionMode::Real), b, applier(ExecutionMode::Real))
            .unwrap()
            .build(&FunctionRequest::at("demo").with_version("2.0.0"))
            .unwrap();
        assert_eq!(outcome.build.image.to_string(), "me/demo:2.0.0");
    }
}
