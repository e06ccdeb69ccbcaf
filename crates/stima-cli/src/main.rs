use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use stima_core::category::{Annotator, CategoryTable};
use stima_core::config::TableConfig;
use stima_core::report;
use stima_core::{Result, StimaError};

mod args;
mod logging;
mod version;
use args::{Cli, MetaCommand, Shell};

const DEFAULT_BINARY: &str = "stima";

fn main() -> ExitCode {
    let binary = binary_name();
    logging::init(&binary);

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let result = match MetaCommand::detect(&raw) {
        Some(MetaCommand::Version) => {
            version::print(&mut io::stdout(), &binary).map_err(StimaError::Output)
        }
        Some(MetaCommand::Explain) => handle_explain(),
        None => {
            let cli = Cli::parse();
            tracing::debug!(?cli, "command line parsed");
            match cli.completions {
                Some(shell) => {
                    handle_completions(shell);
                    Ok(())
                }
                None => handle_annotate(cli),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Binary name as invoked, used for the banner and the logging env prefix
fn binary_name() -> String {
    binary_name_from(std::env::args().next().as_deref())
}

fn binary_name_from(arg0: Option<&str>) -> String {
    arg0.map(Path::new)
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_BINARY.to_string())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, DEFAULT_BINARY, &mut io::stdout());
}

fn load_table(explicit: Option<PathBuf>) -> Result<CategoryTable> {
    let table = CategoryTable::builtin();
    match TableConfig::resolve_path(explicit) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading category table override");
            let config = TableConfig::load(&path)?;
            table.with_config(&config)
        }
        None => Ok(table),
    }
}

fn handle_explain() -> Result<()> {
    let table = load_table(None)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_explain(&mut out, &table).map_err(StimaError::Output)
}

/// A document to annotate
#[derive(Debug)]
enum Source {
    Stdin,
    Inline(String),
    File(PathBuf),
}

impl Source {
    /// Inline input first, then files; stdin when neither is given
    fn collect(input: Option<String>, files: Vec<PathBuf>) -> Vec<Source> {
        let mut sources = Vec::with_capacity(files.len() + 1);
        if let Some(input) = input {
            match input.strip_prefix('@') {
                Some(path) => sources.push(Source::File(PathBuf::from(path))),
                None => sources.push(Source::Inline(input)),
            }
        }
        sources.extend(files.into_iter().map(Source::File));
        if sources.is_empty() {
            sources.push(Source::Stdin);
        }
        sources
    }

    /// Read the whole document
    fn read(self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut data = String::new();
                io::stdin()
                    .read_to_string(&mut data)
                    .map_err(StimaError::Stdin)?;
                Ok(data)
            }
            Source::Inline(text) => Ok(text),
            Source::File(path) => {
                fs::read_to_string(&path).map_err(|source| StimaError::Io { path, source })
            }
        }
    }
}

fn handle_annotate(cli: Cli) -> Result<()> {
    let table = load_table(cli.table)?;
    let annotator = Annotator::new(&table).guard_markup(cli.guard_markup);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    annotate_sources(
        &mut out,
        &annotator,
        Source::collect(cli.input, cli.files),
    )
}

/// Annotate each source in turn, writing its block before the next one is
/// read. A failing source stops the run; blocks already written stay.
fn annotate_sources<W: Write>(
    out: &mut W,
    annotator: &Annotator<'_>,
    sources: Vec<Source>,
) -> Result<()> {
    for source in sources {
        tracing::debug!(?source, "reading document");
        // stdin is annotated as read; files and inline text are trimmed
        let trim = !matches!(source, Source::Stdin);
        let data = source.read()?;
        let document = if trim { data.trim() } else { data.as_str() };

        let annotation = annotator.annotate(document);
        tracing::debug!(total = annotation.total(), "document annotated");

        report::write_document(out, &annotation).map_err(StimaError::Output)?;
        out.flush().map_err(StimaError::Output)?;
    }

    report::write_separator(out).map_err(StimaError::Output)
}
