//! Function and Topic resource manifests.

use serde::Serialize;

use riff_core::{
    application::ApplicationError,
    domain::InitOptions,
    error::RiffResult,
};

const API_VERSION: &str = "projectriff.io/v1alpha1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionManifest {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: Metadata,
    pub spec: FunctionSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSpec {
    pub protocol: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub container: Container,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicManifest {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: Metadata,
}

impl FunctionManifest {
    pub fn from_options(options: &InitOptions) -> Self {
        Self {
            api_version: API_VERSION,
            kind: "Function",
            metadata: Metadata {
                name: options.name.clone(),
            },
            spec: FunctionSpec {
                protocol: options.protocol.to_string(),
                input: options.input.clone(),
                output: options.output.clone(),
                container: Container {
                    image: options.image().to_string(),
                },
            },
        }
    }

    pub fn to_yaml(&self) -> RiffResult<String> {
        to_yaml(self)
    }
}

impl TopicManifest {
    pub fn named(name: &str) -> Self {
        Self {
            api_version: API_VERSION,
            kind: "Topic",
            metadata: Metadata {
                name: name.to_string(),
            },
        }
    }

    /// The input topic, then the output topic when it is set and distinct.
    pub fn for_options(options: &InitOptions) -> Vec<Self> {
        let mut topics = vec![Self::named(&options.input)];
        if let Some(output) = options.output.as_deref().filter(|o| *o != options.input) {
            topics.push(Self::named(output));
        }
        topics
    }

    /// Multi-document YAML, one document per topic.
    pub fn to_yaml_documents(topics: &[Self]) -> RiffResult<String> {
        let docs = topics.iter().map(to_yaml).collect::<RiffResult<Vec<_>>>()?;
        Ok(docs.join("---\n"))
    }
}

fn to_yaml<T: Serialize>(value: &T) -> RiffResult<String> {
    serde_yaml::to_string(value).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("manifest serialization failed: {e}"),
        }
        .into()
    })
}
