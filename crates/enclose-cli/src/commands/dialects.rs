//! Implementation of the `enclose dialects` command.

use serde::Serialize;

use enclose_core::application::{DialectInfo, DocumentService};

use crate::{
    cli::{DialectsArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Serialisable view of a [`DialectInfo`].
#[derive(Debug, Serialize)]
struct DialectRow<'a> {
    name: &'a str,
    display_name: &'a str,
    extension: &'a str,
    scopes: &'a [String],
    constant_prefix: &'a str,
}

impl<'a> From<&'a DialectInfo> for DialectRow<'a> {
    fn from(info: &'a DialectInfo) -> Self {
        Self {
            name: &info.name,
            display_name: &info.display_name,
            extension: &info.extension,
            scopes: &info.scopes,
            constant_prefix: &info.constant_prefix,
        }
    }
}

pub fn execute(args: DialectsArgs, output: OutputManager) -> CliResult<()> {
    let dialects = DocumentService::new().list_dialects();

    match args.format {
        ListFormat::Table => {
            output.header("Available Dialects:")?;
            for d in &dialects {
                output.print(&format!(
                    "  {:<5} {:<4} .{:<3} scopes: {}",
                    d.name,
                    d.display_name,
                    d.extension,
                    d.scopes.join(", ")
                ))?;
            }
        }
        ListFormat::Json => {
            // Bypasses quiet mode: JSON must stay parseable in pipes.
            let rows: Vec<DialectRow<'_>> = dialects.iter().map(DialectRow::from).collect();
            let json = serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
                message: format!("Failed to serialise dialects: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }
        ListFormat::List => {
            for d in &dialects {
                println!("{}", d.name);
            }
        }
    }

    Ok(())
}
