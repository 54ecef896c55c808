//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bootforge",
    bin_name = "bootforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Compose features onto a Spring Boot project skeleton",
    long_about = "Bootforge applies named features (web stack, alternate runtime, \
                  exception handling) to a project folder: dependencies and \
                  properties are staged into a manifest, template sources are \
                  written into the main and test trees.",
    after_help = "EXAMPLES:\n\
        \x20 bootforge apply web --dest ./my-app --package com.acme.app\n\
        \x20 bootforge apply undertow --dest ./my-app --config serverPort=9090\n\
        \x20 bootforge features --format json",
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
    /// Apply one or more features to a project folder.
    #[command(
        visible_alias = "a",
        about = "Apply features to a project",
        after_help = "EXAMPLES:\n\
            \x20 bootforge apply web --dest ./my-app --package com.acme.app\n\
            \x20 bootforge apply undertow exception-handling --dest ./my-app\n\
            \x20 bootforge apply web --dest ./my-app --config serverPort=9090"
    )]
    Apply(ApplyArgs),

    /// List the features this build can apply.
    #[command(
        visible_alias = "ls",
        about = "List available features",
        after_help = "EXAMPLES:\n\
            \x20 bootforge features\n\
            \x20 bootforge features --format json"
    )]
    Features(FeaturesArgs),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `bootforge apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Features to apply, in order.
    #[arg(value_name = "FEATURE", required = true, help = "Feature names (see `bootforge features`)")]
    pub features: Vec<String>,

    /// Output folder for the generated project.
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DIR",
        help = "Project output folder"
    )]
    pub dest: PathBuf,

    /// Base package for generated sources.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Base package (e.g. com.acme.app)"
    )]
    pub package: Option<String>,

    /// Configuration entries for the run, as key=value pairs.
    #[arg(
        short = 'C',
        long = "config",
        value_name = "KEY=VALUE",
        help = "Typed config entry (repeatable, e.g. -C serverPort=9090)"
    )]
    pub config: Vec<String>,

    /// Read templates from a directory instead of the embedded catalog.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Use an on-disk template collection"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Preview the staged manifest without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── features ──────────────────────────────────────────────────────────────────

/// Arguments for `bootforge features`.
#[derive(Debug, Args)]
pub struct FeaturesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: FeaturesFormat,
}

/// Output format for the `features` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FeaturesFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_apply_command() {
        let cli = Cli::parse_from([
            "bootforge",
            "apply",
            "web",
            "--dest",
            "./out",
            "--package",
            "com.acme.app",
        ]);
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.features, ["web"]);
                assert_eq!(args.package.as_deref(), Some("com.acme.app"));
            }
            Commands::Features(_) => panic!("expected Apply command"),
        }
    }

    #[test]
    fn apply_accepts_multiple_features_and_config_pairs() {
        let cli = Cli::parse_from([
            "bootforge",
            "apply",
            "undertow",
            "exception-handling",
            "--dest",
            "./out",
            "-C",
            "serverPort=9090",
            "-C",
            "flag=true",
        ]);
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.features.len(), 2);
                assert_eq!(args.config, ["serverPort=9090", "flag=true"]);
            }
            Commands::Features(_) => panic!("expected Apply command"),
        }
    }

    #[test]
    fn apply_requires_a_feature() {
        let result = Cli::try_parse_from(["bootforge", "apply", "--dest", "./out"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["bootforge", "--quiet", "--verbose", "features"]);
        assert!(result.is_err());
    }
}
