//! The function descriptor: the files `riff init` writes into a function root.
//!
//! A [`Descriptor`] is pure data produced by a `DescriptorRenderer`; the
//! scaffold service decides whether each file is written, skipped or only
//! previewed.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{entities::init_options::InitOptions, error::DomainError};

/// What a descriptor file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorKind {
    Dockerfile,
    FunctionManifest,
    TopicsManifest,
}

/// One rendered file, with a path relative to the function root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorFile {
    pub path: PathBuf,
    pub kind: DescriptorKind,
    pub content: String,
}

/// The full set of rendered files for one function.
#[derive(Debug, Clone, Serialize)]
pub struct Descriptor {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<DescriptorFile>,
}

impl Descriptor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, kind: DescriptorKind, content: String) {
        self.files.push(DescriptorFile {
            path: path.into(),
            kind,
            content,
        });
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        kind: DescriptorKind,
        content: String,
    ) -> Self {
        self.add_file(path, kind, content);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &DescriptorFile> {
        self.files.iter()
    }

    pub fn file(&self, kind: DescriptorKind) -> Option<&DescriptorFile> {
        self.files.iter().find(|f| f.kind == kind)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidDescriptor(
                "descriptor has no files".into(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() {
                return Err(DomainError::InvalidDescriptor(format!(
                    "absolute path not allowed: {}",
                    file.path.display()
                )));
            }
            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::InvalidDescriptor(format!(
                    "duplicate path: {}",
                    file.path.display()
                )));
            }
        }

        Ok(())
    }
}

// ── Render context ────────────────────────────────────────────────────────────

/// Variables available to descriptor templates as `{{KEY}}`.
///
/// | Variable          | Example                                      |
/// |-------------------|----------------------------------------------|
/// | `NAME`            | `demo`                                       |
/// | `ARTIFACT`        | `target/upper-1.0.0.jar`                     |
/// | `ARTIFACT_FILE`   | `upper-1.0.0.jar`                            |
/// | `ARTIFACT_BASE`   | `demo`                                       |
/// | `HANDLER`         | `process` (empty when the language has none) |
/// | `VERSION`         | `0.0.1`                                      |
/// | `PROTOCOL`        | `stdio`                                      |
/// | `INVOKER_IMAGE`   | `projectriff/python3-function-invoker:0.0.6` |
/// | `INVOKER_VERSION` | `0.0.6`                                      |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(options: &InitOptions) -> Self {
        let mut vars = HashMap::new();
        vars.insert("NAME".to_string(), options.name.clone());
        vars.insert(
            "ARTIFACT".to_string(),
            options.artifact.to_string_lossy().replace('\\', "/"),
        );
        vars.insert("ARTIFACT_FILE".to_string(), options.artifact_file_name());
        vars.insert("ARTIFACT_BASE".to_string(), options.artifact_base());
        vars.insert(
            "HANDLER".to_string(),
            options.handler.clone().unwrap_or_default(),
        );
        vars.insert("VERSION".to_string(), options.version.clone());
        vars.insert("PROTOCOL".to_string(), options.protocol.to_string());
        vars.insert("INVOKER_IMAGE".to_string(), options.invoker_image());
        vars.insert(
            "INVOKER_VERSION".to_string(),
            options.invoker_version.clone(),
        );

        Self { variables: vars }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{KEY}}` placeholder. Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Language, Protocol};

    fn options() -> InitOptions {
        InitOptions {
            file_path: PathBuf::from("java"),
            function_root: PathBuf::from("/fn/java"),
            user_account: "me".into(),
            language: Language::Java,
            artifact: PathBuf::from("target/upper-1.0.0.jar"),
            handler: Some("function.Upper".into()),
            version: "0.0.1".into(),
            name: "upper".into(),
            input: "upper".into(),
            output: None,
            protocol: Protocol::Http,
            invoker_version: "0.0.6".into(),
            namespace: None,
            force: false,
            push: false,
        }
    }

    #[test]
    fn render_context_exposes_options() {
        let ctx = RenderContext::new(&options());
        assert_eq!(ctx.get("NAME"), Some("upper"));
        assert_eq!(ctx.get("ARTIFACT"), Some("target/upper-1.0.0.jar"));
        assert_eq!(ctx.get("ARTIFACT_FILE"), Some("upper-1.0.0.jar"));
        assert_eq!(ctx.get("HANDLER"), Some("function.Upper"));
        assert_eq!(
            ctx.get("INVOKER_IMAGE"),
            Some("projectriff/java-function-invoker:0.0.6")
        );
    }

    #[test]
    fn render_replaces_known_and_keeps_unknown() {
        let ctx = RenderContext::new(&options()).with_variable("EXTRA", "x");
        assert_eq!(
            ctx.render("FROM {{INVOKER_IMAGE}} {{EXTRA}} {{MISSING}}"),
            "FROM projectriff/java-function-invoker:0.0.6 x {{MISSING}}"
        );
    }

    #[test]
    fn missing_handler_renders_empty() {
        let mut opts = options();
        opts.handler = None;
        assert_eq!(RenderContext::new(&opts).render("[{{HANDLER}}]"), "[]");
    }

    #[test]
    fn descriptor_validates_duplicates() {
        let d = Descriptor::new("/fn")
            .with_file("Dockerfile", DescriptorKind::Dockerfile, "a".into())
            .with_file("Dockerfile", DescriptorKind::Dockerfile, "b".into());
        assert!(d.validate().is_err());
    }

    #[test]
    fn descriptor_validates_empty_and_absolute() {
        assert!(Descriptor::new("/fn").validate().is_err());
        let d = Descriptor::new("/fn").with_file(
            "/etc/passwd",
            DescriptorKind::Dockerfile,
            String::new(),
        );
        assert!(d.validate().is_err());
    }

    #[test]
    fn descriptor_lookup_by_kind() {
        let d = Descriptor::new("/fn")
            .with_file("Dockerfile", DescriptorKind::Dockerfile, "FROM x".into())
            .with_file(
                "upper-function.yaml",
                DescriptorKind::FunctionManifest,
                "kind: Function".into(),
            );
        assert!(d.validate().is_ok());
        assert_eq!(d.file_count(), 2);
        assert_eq!(
            d.file(DescriptorKind::FunctionManifest).map(|f| f.path.clone()),
            Some(PathBuf::from("upper-function.yaml"))
        );
        assert!(d.file(DescriptorKind::TopicsManifest).is_none());
    }
}
