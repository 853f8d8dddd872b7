//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubsmith",
    bin_name = "stubsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate service, repository interface and trait files from stubs",
    long_about = "Stubsmith turns a base name into service classes, repository \
                  interfaces and traits, placed and namespaced according to \
                  your configuration.",
    after_help = "EXAMPLES:\n\
        \x20 stubsmith init --local\n\
        \x20 stubsmith make invoice --interface --dir billing\n\
        \x20 stubsmith make order --interface=OrderContract --trait\n\
        \x20 stubsmith completions bash > /usr/share/bash-completion/completions/stubsmith",
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
    /// Generate a service and, optionally, its interface and trait.
    #[command(
        visible_alias = "m",
        about = "Generate a service (and interface / trait)",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith make invoice\n\
            \x20 stubsmith make invoice --interface --dir billing/invoices\n\
            \x20 stubsmith make invoice --interface=Billable --trait=HasTotals\n\
            \x20 stubsmith make invoice --trait --dry-run"
    )]
    Make(MakeArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith init           # platform config directory\n\
            \x20 stubsmith init --local   # ./stubsmith.toml"
    )]
    Init(InitArgs),

    /// Copy the built-in stubs into a directory for customisation.
    #[command(
        about = "Publish stubs for customisation",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith publish\n\
            \x20 stubsmith publish --dir resources/stubs --force"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith completions bash > ~/.local/share/bash-completion/completions/stubsmith\n\
            \x20 stubsmith completions zsh  > ~/.zfunc/_stubsmith\n\
            \x20 stubsmith completions fish > ~/.config/fish/completions/stubsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stubsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith config get generator.service_directory\n\
            \x20 stubsmith config list\n\
            \x20 stubsmith config path"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Base name of the service, e.g. `invoice`.
    #[arg(value_name = "NAME", help = "Base name of the service")]
    pub name: String,

    /// Also generate the repository interface, optionally with a custom name.
    #[arg(
        short = 'i',
        long = "interface",
        value_name = "NAME",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        help = "Also generate the interface (--interface=NAME for a custom name)"
    )]
    pub interface: Option<String>,

    /// Also generate a trait, optionally with a custom name.
    #[arg(
        short = 't',
        long = "trait",
        value_name = "NAME",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        help = "Also generate a trait (--trait=NAME for a custom name)"
    )]
    pub trait_name: Option<String>,

    /// Nested sub-directory, slash-delimited.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        help = "Sub-directory inside each kind's directory, e.g. billing/invoices"
    )]
    pub dir: Option<String>,

    /// Output root; overrides `paths.root`.
    #[arg(long = "root", value_name = "DIR", help = "Output root directory")]
    pub root: Option<PathBuf>,

    /// Stub override directory; overrides `paths.stubs`.
    #[arg(long = "stubs", value_name = "DIR", help = "Directory with custom stubs")]
    pub stubs: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `stubsmith.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Target directory; defaults to `paths.stubs`, then `stubs`.
    #[arg(long = "dir", value_name = "DIR", help = "Directory to publish stubs into")]
    pub dir: Option<PathBuf>,

    /// Overwrite stubs that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing stub files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubsmith completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stubsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.service_directory`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_interface_flag_has_no_custom_name() {
        let cli = Cli::parse_from(["stubsmith", "make", "invoice", "--interface"]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.name, "invoice");
        assert_eq!(args.interface.as_deref(), Some(""));
        assert_eq!(args.trait_name, None);
    }

    #[test]
    fn interface_and_trait_accept_names() {
        let cli = Cli::parse_from([
            "stubsmith",
            "make",
            "invoice",
            "--interface=Billable",
            "--trait=HasTotals",
            "--dir",
            "billing/invoices",
        ]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.interface.as_deref(), Some("Billable"));
        assert_eq!(args.trait_name.as_deref(), Some("HasTotals"));
        assert_eq!(args.dir.as_deref(), Some("billing/invoices"));
    }

    #[test]
    fn flag_before_name_does_not_swallow_it() {
        let cli = Cli::parse_from(["stubsmith", "make", "--trait", "invoice"]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.name, "invoice");
        assert_eq!(args.trait_name.as_deref(), Some(""));
    }

    #[test]
    fn make_requires_name() {
        assert!(Cli::try_parse_from(["stubsmith", "make"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stubsmith", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_file_is_global() {
        let cli = Cli::parse_from(["stubsmith", "config", "list", "--log-file", "run.log"]);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    }
}
