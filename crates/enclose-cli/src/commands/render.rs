//! Implementation of the `enclose render` command.
//!
//! Responsibility: resolve inputs and destinations, load documents through
//! the adapters, replay them with `DocumentService`, and report results.
//! No formatting rules live here.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use enclose_adapters::{DocumentLoader, LocalSinkProvider};
use enclose_core::{
    application::{DocumentService, EmissionSession, EmissionStats},
    domain::{Dialect, LayoutOptions},
};

use crate::{
    cli::{OutputFormat, RenderArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Output path meaning "write to stdout".
const STDOUT_MARKER: &str = "-";

/// One rendered document, as reported to the user.
#[derive(Debug, Serialize)]
struct RenderReport {
    input: PathBuf,
    output: PathBuf,
    leaves: usize,
    scopes: usize,
    max_depth: usize,
    bytes: usize,
}

impl RenderReport {
    fn new(input: &Path, output: &Path, stats: EmissionStats) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            leaves: stats.leaves,
            scopes: stats.scopes,
            max_depth: stats.max_depth,
            bytes: stats.bytes,
        }
    }
}

/// Execute the `enclose render` command.
///
/// Dispatch sequence:
/// 1. Resolve the dialect (config defaults overridden by flags)
/// 2. Single file: render to the output file, or stdout with `-o -`
/// 3. Directory: render every discovered document, mirroring the tree
/// 4. Report what was written
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dialect = config.resolve_dialect(&args.emit)?;

    if !args.input.exists() {
        return Err(CliError::InputNotFound { path: args.input });
    }

    let reports = if args.input.is_dir() {
        render_directory(&args, dialect, &config, &output)?
    } else if args.output.as_deref() == Some(Path::new(STDOUT_MARKER)) {
        render_to_stdout(&args.input, dialect, config.layout)?;
        return Ok(());
    } else {
        let destination = file_destination(&args.input, args.output.as_deref(), &dialect);
        let provider = LocalSinkProvider::new()
            .with_create_parents(args.create_dirs || config.output.create_dirs);
        let stats = render_one(&provider, &args.input, &destination, dialect, config.layout)?;
        vec![RenderReport::new(&args.input, &destination, stats)]
    };

    report(&reports, &output)
}

/// Render every document under the input directory.
///
/// Failures are reported per document and do not stop the others.
fn render_directory(
    args: &RenderArgs,
    dialect: Dialect,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Vec<RenderReport>> {
    if args.output.as_deref() == Some(Path::new(STDOUT_MARKER)) {
        return Err(CliError::InvalidInput {
            message: "a directory cannot be rendered to stdout".into(),
            source: None,
        });
    }

    let documents = DocumentLoader::new().discover(&args.input);
    if documents.is_empty() {
        return Err(CliError::NoDocuments {
            path: args.input.clone(),
        });
    }

    let out_root = args.output.clone().unwrap_or_else(|| args.input.clone());
    // Mirrored subdirectories never exist up front.
    let provider = LocalSinkProvider::new().with_create_parents(true);
    let extension = dialect.syntax().header_extension;

    let total = documents.len();
    let mut reports = Vec::with_capacity(total);
    let mut failed = 0;
    // Destination -> the document that claimed it first.
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::with_capacity(total);

    for document in documents {
        let relative = document.strip_prefix(&args.input).unwrap_or(&document);
        let destination = out_root.join(relative).with_extension(extension);

        if let Some(first) = claimed.get(&destination) {
            warn!(
                document = %document.display(),
                first = %first.display(),
                output = %destination.display(),
                "output already claimed"
            );
            output.error(&format!(
                "{}: skipped, {} already renders to {}",
                document.display(),
                first.display(),
                destination.display()
            ))?;
            failed += 1;
            continue;
        }
        claimed.insert(destination.clone(), document.clone());

        match render_one(
            &provider,
            &document,
            &destination,
            dialect.clone(),
            config.layout.clone(),
        ) {
            Ok(stats) => reports.push(RenderReport::new(&document, &destination, stats)),
            Err(err) => {
                warn!(document = %document.display(), error = %err, "document failed");
                output.error(&format!("{}: {}", document.display(), err))?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        report(&reports, output)?;
        return Err(CliError::PartialFailure { failed, total });
    }
    Ok(reports)
}

fn render_one(
    provider: &LocalSinkProvider,
    input: &Path,
    destination: &Path,
    dialect: Dialect,
    layout: LayoutOptions,
) -> CliResult<EmissionStats> {
    let document = DocumentLoader::new().load(input)?;
    let stats = DocumentService::new().render_to(provider, destination, dialect, layout, &document)?;
    info!(
        input = %input.display(),
        output = %destination.display(),
        bytes = stats.bytes,
        "Header written"
    );
    Ok(stats)
}

fn render_to_stdout(input: &Path, dialect: Dialect, layout: LayoutOptions) -> CliResult<()> {
    let document = DocumentLoader::new().load(input)?;
    let stdout = io::stdout();
    let mut session = EmissionSession::new(stdout.lock(), dialect, layout)?;
    DocumentService::new().render(&document, &mut session)?;
    let _stdout = session.finish()?;
    Ok(())
}

/// Where a single input file is written.
///
/// No `--output`: next to the input. An existing directory: inside it.
/// Anything else: that exact path.
fn file_destination(input: &Path, output: Option<&Path>, dialect: &Dialect) -> PathBuf {
    let extension = dialect.syntax().header_extension;
    match output {
        None => input.with_extension(extension),
        Some(dir) if dir.is_dir() => {
            let stem = input.file_stem().unwrap_or(input.as_os_str());
            dir.join(stem).with_extension(extension)
        }
        Some(path) => path.to_path_buf(),
    }
}

fn report(reports: &[RenderReport], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(reports).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to serialise report: {e}"),
            source: Some(Box::new(e)),
        })?;
        output.print(&json)?;
        return Ok(());
    }

    for r in reports {
        output.success(&format!(
            "{} \u{2192} {} ({} scopes, {} bytes)",
            r.input.display(),
            r.output.display(),
            r.scopes,
            r.bytes
        ))?;
    }
    Ok(())
}
