//! Function options: the raw request and the resolved `InitOptions`.
//!
//! A [`FunctionRequest`] is what the user typed — every field optional. The
//! resolver turns it into [`InitOptions`], where every default has been
//! applied and every cross-field rule checked. Stages only ever see
//! `InitOptions`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    capabilities,
    entities::image::ImageRef,
    value_objects::{Language, Protocol},
};

/// Image tag used when `--version` is omitted.
pub const DEFAULT_VERSION: &str = "0.0.1";

// ── Request ───────────────────────────────────────────────────────────────────

/// Unresolved function flags, exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRequest {
    /// `-f/--filepath` or the positional path. `None` means the working directory.
    pub file_path: Option<PathBuf>,
    /// `-a/--artifact`, relative to the function root.
    pub artifact: Option<PathBuf>,
    pub version: Option<String>,
    pub user_account: Option<String>,
    pub handler: Option<String>,
    pub name: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub protocol: Option<Protocol>,
    pub namespace: Option<String>,
    pub force: bool,
    pub push: bool,
}

impl FunctionRequest {
    /// A request rooted at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_user_account(mut self, account: impl Into<String>) -> Self {
        self.user_account = Some(account.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// ── Resolved options ──────────────────────────────────────────────────────────

/// Fully resolved options shared by the scaffold, build and apply stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitOptions {
    /// The function root as supplied (or `.`), never rewritten.
    pub file_path: PathBuf,
    /// `file_path` joined onto the working directory; used for all I/O.
    pub function_root: PathBuf,
    pub user_account: String,
    pub language: Language,
    /// Relative to `function_root`.
    pub artifact: PathBuf,
    pub handler: Option<String>,
    pub version: String,
    pub name: String,
    pub input: String,
    pub output: Option<String>,
    pub protocol: Protocol,
    pub invoker_version: String,
    pub namespace: Option<String>,
    pub force: bool,
    pub push: bool,
}

impl InitOptions {
    /// The image the build stage produces: `<account>/<name>:<version>`.
    pub fn image(&self) -> ImageRef {
        ImageRef::new(&self.user_account, &self.name, &self.version)
    }

    /// The artifact's file name without extension.
    pub fn artifact_base(&self) -> String {
        file_stem(&self.artifact)
    }

    /// The artifact's file name, without any leading directories.
    pub fn artifact_file_name(&self) -> String {
        self.artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Fully tagged invoker base image for this language.
    pub fn invoker_image(&self) -> String {
        format!(
            "{}:{}",
            capabilities::find_language(self.language).invoker_image,
            self.invoker_version
        )
    }

    /// File name of the Function resource manifest.
    pub fn function_manifest(&self) -> PathBuf {
        PathBuf::from(format!("{}-function.yaml", self.name))
    }

    /// File name of the Topic resources manifest.
    pub fn topics_manifest(&self) -> PathBuf {
        PathBuf::from(format!("{}-topics.yaml", self.name))
    }

    /// Manifests in the order they must be applied: topics before the
    /// function that subscribes to them.
    pub fn manifests(&self) -> Vec<PathBuf> {
        vec![self.topics_manifest(), self.function_manifest()]
    }
}

/// File name without extension, or the empty string.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> InitOptions {
        InitOptions {
            file_path: PathBuf::from("../test_data/python/demo"),
            function_root: PathBuf::from("/work/test_data/python/demo"),
            user_account: "me".into(),
            language: Language::Python,
            artifact: PathBuf::from("demo.py"),
            handler: Some("process".into()),
            version: "0.0.1-snapshot".into(),
            name: "demo".into(),
            input: "demo".into(),
            output: None,
            protocol: Protocol::Stdio,
            invoker_version: "0.0.6".into(),
            namespace: None,
            force: false,
            push: false,
        }
    }

    #[test]
    fn image_is_account_name_version() {
        assert_eq!(options().image().to_string(), "me/demo:0.0.1-snapshot");
    }

    #[test]
    fn artifact_helpers() {
        let mut opts = options();
        opts.artifact = PathBuf::from("target/upper-1.0.0.jar");
        assert_eq!(opts.artifact_base(), "upper-1.0.0");
        assert_eq!(opts.artifact_file_name(), "upper-1.0.0.jar");
    }

    #[test]
    fn invoker_image_is_tagged() {
        assert_eq!(
            options().invoker_image(),
            "projectriff/python3-function-invoker:0.0.6"
        );
    }

    #[test]
    fn topics_are_applied_before_function() {
        assert_eq!(
            options().manifests(),
            vec![
                PathBuf::from("demo-topics.yaml"),
                PathBuf::from("demo-function.yaml")
            ]
        );
    }

    #[test]
    fn request_builders() {
        let req = FunctionRequest::at("fn")
            .with_artifact("fn.js")
            .with_handler("h")
            .with_version("1")
            .with_user_account("u")
            .with_name("n");
        assert_eq!(req.file_path, Some(PathBuf::from("fn")));
        assert_eq!(req.artifact, Some(PathBuf::from("fn.js")));
        assert_eq!(req.handler.as_deref(), Some("h"));
        assert_eq!(req.version.as_deref(), Some("1"));
        assert_eq!(req.user_account.as_deref(), Some("u"));
        assert_eq!(req.name.as_deref(), Some("n"));
        assert!(!req.force);
    }
}
