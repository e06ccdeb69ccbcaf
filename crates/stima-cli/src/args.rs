use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Raw arguments that print the version banner
pub const VERSION_COMMANDS: &[&str] = &[
    "version",
    "-version",
    "--version",
    "ver",
    "-ver",
    "--ver",
    "v",
    "-v",
    "--v",
];

/// Raw arguments that list the category table
pub const EXPLAIN_COMMANDS: &[&str] = &[
    "explain",
    "-explain",
    "--explain",
    "e",
    "-e",
    "--e",
    "show",
    "-show",
    "--show",
    "s",
    "-s",
    "--s",
];

#[derive(Parser, Debug)]
#[command(name = "stima")]
#[command(about = "Highlights and tallies appraisal vocabulary in performance reviews")]
#[command(
    after_help = "Run `stima version` for the version banner, `stima explain` to list the categories."
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Inline text to annotate, or @path to read it from a file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Category table override (TOML)
    #[arg(long, env = "STIMA_TABLE")]
    pub table: Option<PathBuf>,

    /// Do not match inside spans already painted by an earlier category
    #[arg(long)]
    pub guard_markup: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,

    /// Files to annotate (default: standard input)
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Commands recognized on the raw command line, before flag parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Version,
    Explain,
}

impl MetaCommand {
    /// Only a single, exactly matching argument is a meta command.
    pub fn detect(args: &[String]) -> Option<Self> {
        match args {
            [only] if VERSION_COMMANDS.contains(&only.as_str()) => Some(Self::Version),
            [only] if EXPLAIN_COMMANDS.contains(&only.as_str()) => Some(Self::Explain),
            _ => None,
        }
    }
}
