//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ResolveContext`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--invoker-version`, `-u`, `--namespace`; applied at the call-site)
//! 2. Environment variables (`RIFF_INVOKER_VERSION`, then `USER` / `USERNAME`
//!    for the account)
//! 3. Config file: `--config <FILE>`, else `$HOME/.riff.{yaml,toml,json}`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use riff_core::application::ResolveContext;

/// Invoker image tag used when nothing else sets one.
pub const DEFAULT_INVOKER_VERSION: &str = "0.0.6";

/// Account used when neither flags, config nor the environment name one.
pub const FALLBACK_USER_ACCOUNT: &str = "riff";

/// Environment variable overriding the config file's invoker version.
pub const INVOKER_VERSION_ENV: &str = "RIFF_INVOKER_VERSION";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub invoker_version: String,
    pub user_account: String,
    pub namespace: Option<String>,
    /// Output settings.
    pub output: OutputConfig,
    /// The file the settings came from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub no_color: bool,
}

/// Keys accepted in the config file.
///
/// Both `invokerVersion` and `invoker-version` are read; the camel-case key
/// wins when both are present.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    #[serde(rename = "invokerVersion", alias = "invokerversion")]
    invoker_version_camel: Option<String>,
    #[serde(rename = "invoker-version")]
    invoker_version_kebab: Option<String>,
    #[serde(rename = "userAccount", alias = "useraccount")]
    user_account: Option<String>,
    namespace: Option<String>,
    #[serde(rename = "noColor", alias = "nocolor", alias = "no-color")]
    no_color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            invoker_version: DEFAULT_INVOKER_VERSION.into(),
            user_account: FALLBACK_USER_ACCOUNT.into(),
            namespace: None,
            output: OutputConfig::default(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the file and the process environment.
    ///
    /// An explicit `config_file` must exist; the default `~/.riff.*` is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (file, required) = match config_file {
            Some(path) => (Some(path.clone()), true),
            None => (Self::default_config_base(), false),
        };
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        let settings = match &file {
            Some(path) => read_settings(path, required)?,
            None => FileSettings::default(),
        };
        Ok(Self::from_parts(
            settings,
            file.filter(|_| required),
            env(INVOKER_VERSION_ENV),
            env("USER").or_else(|| env("USERNAME")),
        ))
    }

    fn from_parts(
        settings: FileSettings,
        source: Option<PathBuf>,
        env_invoker_version: Option<String>,
        env_user: Option<String>,
    ) -> Self {
        let FileSettings {
            invoker_version_camel,
            invoker_version_kebab,
            user_account,
            namespace,
            no_color,
        } = settings;

        Self {
            invoker_version: resolve_invoker_version(
                env_invoker_version,
                invoker_version_camel,
                invoker_version_kebab,
            ),
            user_account: user_account
                .filter(|u| !u.is_empty())
                .or(env_user)
                .unwrap_or_else(|| FALLBACK_USER_ACCOUNT.into()),
            namespace: namespace.filter(|n| !n.is_empty()),
            output: OutputConfig {
                no_color: no_color.unwrap_or(false),
            },
            source,
        }
    }

    /// `$HOME/.riff`, extension resolved by the config loader.
    pub fn default_config_base() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(".riff"))
    }

    /// The resolver defaults for one invocation.
    ///
    /// `invoker_version` comes from `--invoker-version` and overrides everything.
    pub fn resolve_context(
        &self,
        working_dir: PathBuf,
        invoker_version: Option<String>,
    ) -> ResolveContext {
        ResolveContext::new(
            working_dir,
            invoker_version.unwrap_or_else(|| self.invoker_version.clone()),
        )
        .with_user_account(self.user_account.clone())
        .with_namespace(self.namespace.clone())
    }
}

/// Env var > `invokerVersion` > `invoker-version` > built-in default.
fn resolve_invoker_version(
    env: Option<String>,
    camel: Option<String>,
    kebab: Option<String>,
) -> String {
    [env, camel, kebab]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_INVOKER_VERSION.into())
}

fn read_settings(path: &Path, required: bool) -> anyhow::Result<FileSettings> {
    let source = if required {
        File::from(path.to_path_buf()).required(true)
    } else {
        File::with_name(&path.to_string_lossy()).required(false)
    };
    Config::builder()
        .add_source(source)
        .build()
        .and_then(|c| c.try_deserialize::<FileSettings>())
        .with_context(|| format!("failed to read config file {}", path.display()))
}
