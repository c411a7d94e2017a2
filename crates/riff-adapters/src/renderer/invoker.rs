//! Descriptor renderer backed by the built-in invoker templates.

use riff_core::{
    application::{ApplicationError, ports::DescriptorRenderer},
    domain::{Descriptor, DescriptorKind, InitOptions, RenderContext},
    error::RiffResult,
};
use tracing::{debug, instrument};

use super::manifest::{FunctionManifest, TopicManifest};
use crate::invoker_templates;

/// Renders a Dockerfile plus Function and Topic manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvokerRenderer;

impl InvokerRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorRenderer for InvokerRenderer {
    #[instrument(skip_all, fields(language = %options.language))]
    fn render(&self, options: &InitOptions) -> RiffResult<Descriptor> {
        let template = invoker_templates::dockerfile_for(options.language).ok_or_else(|| {
            ApplicationError::RenderingFailed {
                reason: format!("no Dockerfile template for {}", options.language),
            }
        })?;
        let ctx = RenderContext::new(options);

        let topics = TopicManifest::for_options(options);
        debug!(topics = topics.len(), "rendering manifests");

        let descriptor = Descriptor::new(&options.function_root)
            .with_file("Dockerfile", DescriptorKind::Dockerfile, ctx.render(template))
            .with_file(
                options.function_manifest(),
                DescriptorKind::FunctionManifest,
                FunctionManifest::from_options(options).to_yaml()?,
            )
            .with_file(
                options.topics_manifest(),
                DescriptorKind::TopicsManifest,
                TopicManifest::to_yaml_documents(&topics)?,
            );

        Ok(descriptor)
    }
}
