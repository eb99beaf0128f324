//! Implementation of the `enclose demo` command.
//!
//! Writes two sample headers through the streaming API:
//! - `c++.h`: ifndef-guarded C++ with a struct holding a namespace
//! - `c.h`: pragma-guarded C with a struct inside a bare block

use std::path::Path;

use tracing::{info, instrument};

use enclose_adapters::LocalSinkProvider;
use enclose_core::{
    application::{EmissionSession, EmissionStats, SinkProvider},
    domain::{Dialect, GuardStyle, LayoutOptions, LeafToken, Scope},
    error::EncloseResult,
};

use crate::{
    cli::DemoArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub const CPP_FILE: &str = "c++.h";
pub const C_FILE: &str = "c.h";

/// Execute the `enclose demo` command.
#[instrument(skip_all, fields(out_dir = %args.out_dir.display()))]
pub fn execute(args: DemoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let date = args.date.unwrap_or_else(today);
    let provider = LocalSinkProvider::new().with_create_parents(true);

    let cpp = Dialect::cpp()
        .with_guard(GuardStyle::Ifndef)
        .with_guard_name(config.defaults.guard_name.clone())?;
    let cpp_path = args.out_dir.join(CPP_FILE);
    let stats = write_cpp(&provider, &cpp_path, cpp, config.layout.clone(), &date)?;
    output.success(&format!("{} ({} bytes)", cpp_path.display(), stats.bytes))?;

    let c = Dialect::c().with_guard(GuardStyle::Pragma);
    let c_path = args.out_dir.join(C_FILE);
    let stats = write_c(&provider, &c_path, c, config.layout, &date)?;
    output.success(&format!("{} ({} bytes)", c_path.display(), stats.bytes))?;

    info!(date = %date, "Demo headers written");
    Ok(())
}

/// Today's date in the `Mmm dd yyyy` form, day padded with a space.
fn today() -> String {
    chrono::Local::now().format("%b %e %Y").to_string()
}

fn write_cpp(
    provider: &dyn SinkProvider,
    path: &Path,
    dialect: Dialect,
    layout: LayoutOptions,
    date: &str,
) -> EncloseResult<EmissionStats> {
    let credit = format!("This comment was made by {}", dialect.guard_name());
    let mut session = EmissionSession::open(provider, path, dialect, layout)?;

    session.newline()?;
    session.write_leaf(&LeafToken::block_comment(date)?)?;
    session.write_leaf(&LeafToken::directive("include", "<cstdint>")?)?;
    session.newline()?;

    session.with_scope(Scope::structure("hello"), |s| {
        s.write_leaf(&LeafToken::block_comment(credit.as_str())?)?;
        s.write_leaf(&LeafToken::line_comment(credit.as_str())?)?;
        s.with_scope(Scope::namespace("CoolNamespace"), |s| {
            s.write_leaf(&LeafToken::constant("cool_value", "0x152345125")?)
        })
    })?;

    let stats = session.stats();
    session.finish()?;
    Ok(stats)
}

fn write_c(
    provider: &dyn SinkProvider,
    path: &Path,
    dialect: Dialect,
    layout: LayoutOptions,
    date: &str,
) -> EncloseResult<EmissionStats> {
    let mut session = EmissionSession::open(provider, path, dialect, layout)?;

    session.newline()?;
    session.write_leaf(&LeafToken::block_comment(date)?)?;
    session.write_leaf(&LeafToken::directive("include", "<stdio.h>")?)?;
    session.newline()?;

    // A struct directly inside a bare block is accepted.
    session.with_scope(Scope::control_block(), |s| {
        s.with_scope(Scope::structure("yeh"), |_| Ok(()))
    })?;

    let stats = session.stats();
    session.finish()?;
    Ok(stats)
}
