//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use enclose_core::domain::GuardStyle;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "enclose",
    bin_name = "enclose",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scope-tracking writer for C and C++ headers",
    long_about = "enclose writes C and C++ header text with guaranteed balanced \
                  scopes and depth-driven indentation.",
    after_help = "EXAMPLES:\n\
        \x20 enclose render defs.toml -o defs.h --dialect c\n\
        \x20 enclose render headers/ -o include/ --guard ifndef\n\
        \x20 enclose demo --out-dir out\n\
        \x20 enclose completions bash > /usr/share/bash-completion/completions/enclose",
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
    /// Render document files into headers.
    #[command(
        visible_alias = "r",
        about = "Render a document (or a directory of documents) into headers",
        after_help = "EXAMPLES:\n\
            \x20 enclose render defs.toml                 # writes defs.h\n\
            \x20 enclose render defs.json -o - --no-header\n\
            \x20 enclose render docs/ -o include/ --create-dirs"
    )]
    Render(RenderArgs),

    /// Write the two sample headers.
    #[command(
        about = "Write the sample c++.h and c.h headers",
        after_help = "EXAMPLES:\n\
            \x20 enclose demo\n\
            \x20 enclose demo --out-dir build --date \"Jan  1 2030\""
    )]
    Demo(DemoArgs),

    /// List the built-in dialects.
    #[command(
        visible_alias = "ls",
        about = "List available dialects",
        after_help = "EXAMPLES:\n\
            \x20 enclose dialects\n\
            \x20 enclose dialects --format json"
    )]
    Dialects(DialectsArgs),

    /// Initialise an enclose configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 enclose init           # default location\n\
            \x20 enclose init --local   # .enclose.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 enclose completions bash > ~/.local/share/bash-completion/completions/enclose\n\
            \x20 enclose completions zsh  > ~/.zfunc/_enclose\n\
            \x20 enclose completions fish > ~/.config/fish/completions/enclose.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the enclose configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 enclose config get defaults.dialect\n\
            \x20 enclose config list\n\
            \x20 enclose config path"
    )]
    Config(ConfigCommands),
}

// ── shared emission flags ─────────────────────────────────────────────────────

/// Dialect and guard overrides; unset flags fall back to the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct EmitArgs {
    /// Target dialect.
    #[arg(
        short = 'd',
        long = "dialect",
        value_name = "DIALECT",
        help = "Target dialect (cpp, c)"
    )]
    pub dialect: Option<String>,

    /// Guard style.
    #[arg(
        short = 'g',
        long = "guard",
        value_name = "STYLE",
        value_enum,
        help = "Header guard style"
    )]
    pub guard: Option<GuardArg>,

    /// Name used by `#ifndef` guards.
    #[arg(long = "guard-name", value_name = "NAME", help = "Macro name for ifndef guards")]
    pub guard_name: Option<String>,

    /// Write no guard at all.
    #[arg(long = "no-header", help = "Omit the header guard")]
    pub no_header: bool,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `enclose render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document file, or a directory searched recursively for documents.
    #[arg(value_name = "INPUT", help = "Document file (.toml/.json) or directory")]
    pub input: PathBuf,

    /// Output file or directory; `-` writes a single document to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path (default: next to the input)"
    )]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub emit: EmitArgs,

    /// Create missing output directories.
    #[arg(long = "create-dirs", help = "Create missing parent directories")]
    pub create_dirs: bool,
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `enclose demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Directory receiving `c++.h` and `c.h`.
    #[arg(
        long = "out-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the generated headers"
    )]
    pub out_dir: PathBuf,

    /// Date stamp written into both headers.
    #[arg(
        long = "date",
        value_name = "TEXT",
        help = "Date stamp to embed (default: today, e.g. \"Oct 19 2026\")"
    )]
    pub date: Option<String>,
}

// ── dialects ──────────────────────────────────────────────────────────────────

/// Arguments for `enclose dialects`.
#[derive(Debug, Args)]
pub struct DialectsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `dialects` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `enclose init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.enclose.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `enclose completions`.
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

/// Subcommands for `enclose config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.dialect` or `layout.struct.inline_brace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Header guard styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GuardArg {
    /// `#pragma once`.
    #[value(alias = "pragma-once")]
    Pragma,
    /// `#ifndef NAME` / `#define NAME` ... `#endif`.
    #[value(alias = "include-guard")]
    Ifndef,
}

impl From<GuardArg> for GuardStyle {
    fn from(arg: GuardArg) -> Self {
        match arg {
            GuardArg::Pragma => Self::Pragma,
            GuardArg::Ifndef => Self::Ifndef,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
