//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use riff_core::domain::{FunctionRequest, Language, Protocol};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "riff",
    bin_name = "riff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Commands for creating and managing function resources",
    long_about = "riff is for functions.\n\n\
                  The riff tool is used to create and manage function resources \
                  for the riff FaaS platform https://projectriff.io/",
    after_help = "EXAMPLES:\n\
        \x20 riff create python --handler process ./demo\n\
        \x20 riff create java -a target/upper-1.0.0.jar --handler function.Upper\n\
        \x20 riff create --dry-run ./echo\n\
        \x20 riff completions bash > /usr/share/bash-completion/completions/riff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize, build and apply a function.
    #[command(
        about = "Create a function (init, build and apply)",
        after_help = "EXAMPLES:\n\
            \x20 riff create ./echo                      # infer the language\n\
            \x20 riff create command -f ./echo -u me\n\
            \x20 riff create python --handler process ./demo\n\
            \x20 riff create --dry-run -v 0.0.1-snapshot ./echo\n\n\
            A bare argument that names a language (command, shell, node, python,\n\
            java, go) selects that language. Use -f for a function directory\n\
            with one of those names: riff create -f ./node"
    )]
    Create(LanguageSelectArgs),

    /// Write the function descriptor only.
    #[command(
        about = "Initialize a function (write Dockerfile and manifests)",
        after_help = "EXAMPLES:\n\
            \x20 riff init ./echo\n\
            \x20 riff init node ./square --force\n\n\
            Use -f for a function directory named after a language: riff init -f ./go"
    )]
    Init(LanguageSelectArgs),

    /// Build the function image.
    #[command(about = "Build the function container image")]
    Build(FunctionArgs),

    /// Apply the function manifests.
    #[command(about = "Apply the function resource manifests to the cluster")]
    Apply(FunctionArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 riff completions bash > ~/.local/share/bash-completion/completions/riff\n\
            \x20 riff completions zsh  > ~/.zfunc/_riff\n\
            \x20 riff completions fish > ~/.config/fish/completions/riff.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create / init ─────────────────────────────────────────────────────────────

/// Arguments for `riff create` and `riff init`: an optional language
/// subcommand, with the function flags accepted on either level.
#[derive(Debug, Args)]
pub struct LanguageSelectArgs {
    /// Language variant; inferred from the artifact when omitted.
    #[command(subcommand)]
    pub language: Option<LanguageCommand>,

    #[command(flatten)]
    pub function: FunctionArgs,
}

impl LanguageSelectArgs {
    /// The chosen language and the merged flags. Flags given after the
    /// language subcommand win over those given before it.
    pub fn into_parts(self) -> (Option<Language>, FunctionArgs) {
        match self.language {
            None => (None, self.function),
            Some(LanguageCommand::Command(sub)) => {
                (Some(Language::Command), self.function.merge(sub))
            }
            Some(LanguageCommand::Node(sub)) => (Some(Language::Node), self.function.merge(sub)),
            Some(LanguageCommand::Python(sub)) => {
                (Some(Language::Python), self.function.merge(sub))
            }
            Some(LanguageCommand::Java(sub)) => (Some(Language::Java), self.function.merge(sub)),
            Some(LanguageCommand::Go(sub)) => (Some(Language::Go), self.function.merge(sub)),
        }
    }
}

/// Language variants.
#[derive(Debug, Subcommand)]
pub enum LanguageCommand {
    /// Shell script functions (`.sh`).
    #[command(visible_alias = "shell")]
    Command(CommandFunctionArgs),
    /// JavaScript functions (`.js`).
    Node(FunctionArgs),
    /// Python 3 functions (`.py`); the handler defaults to the module name.
    Python(FunctionArgs),
    /// Java functions (`.jar`); `--handler` names the function class.
    Java(FunctionArgs),
    /// Go plugin functions (`.so`); `--handler` names the exported symbol.
    Go(FunctionArgs),
}

/// Function flags for the `command` variant, which has no handler.
#[derive(Debug, Clone, Default, Args)]
pub struct CommandFunctionArgs {
    #[command(flatten)]
    pub common: CommonFunctionArgs,
}

impl From<CommandFunctionArgs> for FunctionArgs {
    fn from(args: CommandFunctionArgs) -> Self {
        Self {
            common: args.common,
            handler: None,
        }
    }
}

/// Function flags, including `--handler`.
#[derive(Debug, Clone, Default, Args)]
pub struct FunctionArgs {
    #[command(flatten)]
    pub common: CommonFunctionArgs,

    /// Entry point within the artifact.
    #[arg(long = "handler", value_name = "NAME", help = "Function handler")]
    pub handler: Option<String>,
}

impl FunctionArgs {
    /// Overlay `other` onto `self`: set values in `other` win, switches are OR-ed.
    pub fn merge(self, other: impl Into<FunctionArgs>) -> Self {
        let other = other.into();
        let (a, b) = (self.common, other.common);
        Self {
            common: CommonFunctionArgs {
                path: b.path.or(a.path),
                filepath: b.filepath.or(a.filepath),
                artifact: b.artifact.or(a.artifact),
                version: b.version.or(a.version),
                user_account: b.user_account.or(a.user_account),
                name: b.name.or(a.name),
                input: b.input.or(a.input),
                output: b.output.or(a.output),
                protocol: b.protocol.or(a.protocol),
                namespace: b.namespace.or(a.namespace),
                invoker_version: b.invoker_version.or(a.invoker_version),
                force: a.force || b.force,
                push: a.push || b.push,
                dry_run: a.dry_run || b.dry_run,
            },
            handler: other.handler.or(self.handler),
        }
    }

    pub fn dry_run(&self) -> bool {
        self.common.dry_run
    }

    /// The raw request handed to the resolver. `-f` wins over the positional path.
    pub fn to_request(&self) -> FunctionRequest {
        let c = &self.common;
        FunctionRequest {
            file_path: c.filepath.clone().or_else(|| c.path.clone()),
            artifact: c.artifact.clone(),
            version: c.version.clone(),
            user_account: c.user_account.clone(),
            handler: self.handler.clone(),
            name: c.name.clone(),
            input: c.input.clone(),
            output: c.output.clone(),
            protocol: c.protocol.map(Protocol::from),
            namespace: c.namespace.clone(),
            force: c.force,
            push: c.push,
        }
    }
}

/// Flags shared by every function command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonFunctionArgs {
    /// Function root directory (same as `-f`).
    #[arg(value_name = "PATH", help = "Path to the function source directory")]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "filepath",
        value_name = "PATH",
        help = "Path or directory used for the function resources (default: .)"
    )]
    pub filepath: Option<PathBuf>,

    #[arg(
        short = 'a',
        long = "artifact",
        value_name = "FILE",
        help = "Path to the function artifact, source code or jar file"
    )]
    pub artifact: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "version",
        value_name = "TAG",
        help = "Version of the function image (default: 0.0.1)"
    )]
    pub version: Option<String>,

    #[arg(
        short = 'u',
        long = "useraccount",
        visible_alias = "user",
        value_name = "ACCOUNT",
        help = "Docker user account to be used for the image repository"
    )]
    pub user_account: Option<String>,

    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Function name (default: the function directory name)"
    )]
    pub name: Option<String>,

    #[arg(
        short = 'i',
        long = "input",
        value_name = "TOPIC",
        help = "Input topic (default: the function name)"
    )]
    pub input: Option<String>,

    #[arg(short = 'o', long = "output", value_name = "TOPIC", help = "Output topic")]
    pub output: Option<String>,

    #[arg(
        long = "protocol",
        value_enum,
        help = "Protocol used to talk to the invoker (default: per language)"
    )]
    pub protocol: Option<ProtocolArg>,

    #[arg(long = "namespace", value_name = "NS", help = "Kubernetes namespace")]
    pub namespace: Option<String>,

    #[arg(
        long = "invoker-version",
        value_name = "TAG",
        help = "Invoker image version (overrides RIFF_INVOKER_VERSION and config)"
    )]
    pub invoker_version: Option<String>,

    #[arg(long = "force", help = "Overwrite existing Dockerfile and manifests")]
    pub force: bool,

    #[arg(long = "push", help = "Push the image after building it")]
    pub push: bool,

    #[arg(
        long = "dry-run",
        help = "Print generated files and commands without writing or running anything"
    )]
    pub dry_run: bool,
}

/// `--protocol` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    Http,
    Grpc,
    Stdio,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Http => Protocol::Http,
            ProtocolArg::Grpc => Protocol::Grpc,
            ProtocolArg::Stdio => Protocol::Stdio,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `riff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn parts(args: &[&str]) -> (Option<Language>, FunctionArgs) {
        match Cli::parse_from(args).command {
            Commands::Create(args) | Commands::Init(args) => args.into_parts(),
            other => panic!("expected create or init, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_path_without_language() {
        let (language, args) = parts(&["riff", "create", "--dry-run", "-v", "0.0.1-snapshot", "echo"]);
        assert_eq!(language, None);
        assert_eq!(args.common.path, Some(PathBuf::from("echo")));
        assert_eq!(args.common.version.as_deref(), Some("0.0.1-snapshot"));
        assert!(args.dry_run());
    }

    #[test]
    fn language_subcommand_flags() {
        let (language, args) = parts(&[
            "riff", "create", "python", "--dry-run", "-f", "demo", "--handler", "process",
        ]);
        assert_eq!(language, Some(Language::Python));
        assert_eq!(args.handler.as_deref(), Some("process"));
        assert_eq!(args.to_request().file_path, Some(PathBuf::from("demo")));
    }

    #[test]
    fn flags_before_the_language_are_kept() {
        let (language, args) = parts(&["riff", "init", "--dry-run", "-u", "me", "java", "-v", "2"]);
        assert_eq!(language, Some(Language::Java));
        assert!(args.dry_run());
        assert_eq!(args.common.user_account.as_deref(), Some("me"));
        assert_eq!(args.common.version.as_deref(), Some("2"));
    }

    #[test]
    fn subcommand_values_win() {
        let (_, args) = parts(&["riff", "create", "-n", "outer", "node", "-n", "inner"]);
        assert_eq!(args.common.name.as_deref(), Some("inner"));
    }

    #[test]
    fn command_variant_has_no_handler_flag() {
        let result = Cli::try_parse_from(["riff", "create", "command", "--handler", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn filepath_wins_over_positional() {
        let (_, args) = parts(&["riff", "create", "-f", "a", "b"]);
        assert_eq!(args.to_request().file_path, Some(PathBuf::from("a")));
    }

    #[test]
    fn user_alias() {
        let (_, args) = parts(&["riff", "create", "--user", "me"]);
        assert_eq!(args.common.user_account.as_deref(), Some("me"));
    }

    #[test]
    fn protocol_maps_to_core() {
        let (_, args) = parts(&["riff", "create", "--protocol", "grpc"]);
        assert_eq!(args.to_request().protocol, Some(Protocol::Grpc));
    }

    #[test]
    fn language_name_selects_variant_and_filepath_selects_directory() {
        let (language, args) = parts(&["riff", "create", "node"]);
        assert_eq!(language, Some(Language::Node));
        assert_eq!(args.to_request().file_path, None);

        let (language, args) = parts(&["riff", "create", "-f", "node"]);
        assert_eq!(language, None);
        assert_eq!(args.to_request().file_path, Some(PathBuf::from("node")));

        let help = Cli::command()
            .find_subcommand("create")
            .and_then(|c| c.get_after_help().map(|h| h.to_string()))
            .unwrap_or_default();
        assert!(help.contains("riff create -f ./node"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["riff", "--quiet", "--verbose", "create"]);
        assert!(result.is_err());
    }
}
