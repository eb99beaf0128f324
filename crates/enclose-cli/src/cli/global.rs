//! Flags accepted by every subcommand, before or after its name.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail to stderr (-v, -vv, -vvv)",
        long_help = "Log more detail to stderr:
    (none)  warnings and errors
    -v      one line per header written
    -vv     scope opens and closes, sink lifecycle
    -vvv    every emitted leaf"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Any non-empty `NO_COLOR` other than a false-like word (`0`, `false`,
    /// `no`, `off`) turns colour off, as <https://no-color.org> asks.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored status lines and logs"
    )]
    pub no_color: bool,

    /// Replaces both the user config and `.enclose.toml` when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "ENCLOSE_CONFIG",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How status lines and reports are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored status lines.
    Human,
    /// Status lines without ANSI codes.
    Plain,
    /// Reports as JSON on stdout, logs as JSON lines on stderr.
    Json,
}
