//! Option resolution: turns a [`FunctionRequest`] into [`InitOptions`].
//!
//! Resolution runs before every stage and is the only place defaults are
//! applied. It reads the function root through the [`Filesystem`] port and
//! never writes.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        DEFAULT_VERSION, DomainError, DomainValidator, FunctionRequest, HandlerRule, InitOptions,
        Language, capabilities, entities::init_options::file_stem,
    },
    error::RiffResult,
};

/// Process-level defaults captured once at startup.
///
/// The working directory is recorded here instead of being changed, so a
/// relative function path always means the same thing for every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    pub working_dir: PathBuf,
    /// Used when `-u/--useraccount` is omitted. May be empty.
    pub default_user_account: String,
    pub invoker_version: String,
    pub default_namespace: Option<String>,
}

impl ResolveContext {
    pub fn new(working_dir: impl Into<PathBuf>, invoker_version: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            default_user_account: String::new(),
            invoker_version: invoker_version.into(),
            default_namespace: None,
        }
    }

    pub fn with_user_account(mut self, account: impl Into<String>) -> Self {
        self.default_user_account = account.into();
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.default_namespace = namespace;
        self
    }
}

/// Applies defaults and cross-field rules.
#[derive(Debug, Clone)]
pub struct Resolver {
    context: ResolveContext,
}

impl Resolver {
    pub fn new(context: ResolveContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ResolveContext {
        &self.context
    }

    /// Resolve `request`, optionally pinned to `language`.
    ///
    /// Nothing is written; a failure here means no stage has run.
    #[instrument(skip_all, fields(language = ?language))]
    pub fn resolve(
        &self,
        fs: &dyn Filesystem,
        request: &FunctionRequest,
        language: Option<Language>,
    ) -> RiffResult<InitOptions> {
        let file_path = request
            .file_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        // An explicit language and artifact must agree before anything is read.
        if let (Some(language), Some(artifact)) = (language, request.artifact.as_ref()) {
            if !capabilities::accepts_artifact(language, artifact) {
                return Err(DomainError::ConflictingInput {
                    command: language.to_string(),
                    artifact: artifact.display().to_string(),
                }
                .into());
            }
        }

        let function_root = normalize(&self.context.working_dir.join(&file_path));
        if !fs.is_dir(&function_root) {
            return Err(DomainError::PathNotFound {
                path: file_path.display().to_string(),
            }
            .into());
        }
        debug!(root = %function_root.display(), "function root");

        let artifact = match &request.artifact {
            Some(artifact) => {
                if !fs.exists(&function_root.join(artifact)) {
                    return Err(DomainError::ArtifactNotFound {
                        artifact: artifact.display().to_string(),
                    }
                    .into());
                }
                artifact.clone()
            }
            None => self.infer_artifact(fs, &function_root, &file_path, language)?,
        };

        let language = match language {
            Some(language) => language,
            None => capabilities::language_for_artifact(&artifact).ok_or_else(|| {
                DomainError::UnsupportedArtifact {
                    artifact: artifact.display().to_string(),
                }
            })?,
        };
        let def = capabilities::find_language(language);
        debug!(%language, artifact = %artifact.display(), "language resolved");

        let name = match &request.name {
            Some(name) => {
                DomainValidator::validate_name(name)?;
                name.clone()
            }
            None => derive_name(&function_root, &artifact, language),
        };

        let handler = request
            .handler
            .clone()
            .filter(|h| !h.is_empty())
            .or_else(|| match def.handler_rule {
                HandlerRule::BaseName => Some(file_stem(&artifact)),
                HandlerRule::NotUsed | HandlerRule::ModuleExport | HandlerRule::Required => None,
            });

        for option in def.required_options {
            let present = match option {
                capabilities::RequiredOption::Handler => handler.is_some(),
            };
            if !present {
                return Err(DomainError::MissingRequiredOption {
                    language: language.to_string(),
                    option: option.as_str(),
                }
                .into());
            }
        }

        let user_account = request
            .user_account
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.context.default_user_account.clone());
        if user_account.is_empty() {
            return Err(DomainError::MissingRequiredOption {
                language: language.to_string(),
                option: "useraccount",
            }
            .into());
        }

        let options = InitOptions {
            file_path,
            function_root,
            user_account,
            language,
            artifact,
            handler,
            version: request
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            input: request.input.clone().unwrap_or_else(|| name.clone()),
            name,
            output: request.output.clone(),
            protocol: request.protocol.unwrap_or(def.default_protocol),
            invoker_version: self.context.invoker_version.clone(),
            namespace: request
                .namespace
                .clone()
                .or_else(|| self.context.default_namespace.clone()),
            force: request.force,
            push: request.push,
        };
        debug!(name = %options.name, image = %options.image(), "options resolved");
        Ok(options)
    }

    /// Pick the single artifact directly inside `root`.
    fn infer_artifact(
        &self,
        fs: &dyn Filesystem,
        root: &Path,
        file_path: &Path,
        language: Option<Language>,
    ) -> RiffResult<PathBuf> {
        let candidates: Vec<PathBuf> = fs
            .list_files(root)?
            .into_iter()
            .filter(|f| match language {
                Some(language) => capabilities::accepts_artifact(language, f),
                None => capabilities::is_known_artifact(f),
            })
            .collect();

        match candidates.len() {
            1 => Ok(candidates.into_iter().next().unwrap_or_default()),
            0 => {
                let exts: Vec<&str> = match language {
                    Some(language) => language.extensions().to_vec(),
                    None => capabilities::LANGUAGE_REGISTRY
                        .iter()
                        .flat_map(|d| d.extensions.iter().copied())
                        .collect(),
                };
                Err(DomainError::NoArtifact {
                    path: file_path.display().to_string(),
                    patterns: exts
                        .iter()
                        .map(|e| format!("*.{e}"))
                        .collect::<Vec<_>>()
                        .join(", "),
                }
                .into())
            }
            _ => Err(DomainError::AmbiguousArtifact {
                path: file_path.display().to_string(),
                candidates: candidates
                    .iter()
                    .map(|c| c.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into()),
        }
    }
}

/// Root base name, else artifact stem, else the language name; each coerced
/// into a valid function name.
fn derive_name(root: &Path, artifact: &Path, language: Language) -> String {
    root.file_name()
        .and_then(|n| DomainValidator::sanitize_name(&n.to_string_lossy()))
        .or_else(|| DomainValidator::sanitize_name(&file_stem(artifact)))
        .unwrap_or_else(|| language.to_string())
}

/// Remove `.` and resolve `..` without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
