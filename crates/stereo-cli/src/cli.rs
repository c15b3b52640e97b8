use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "stereo - derive, rearrange and verify stereochemical parities of tetrahedral centers.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive parity values for every stereocenter in an input file from its coordinates.
    Assign(AssignArgs),
    /// Check the parities declared in an input file against its coordinates.
    Verify(VerifyArgs),
    /// Rearrange a parity record into a new substituent ordering.
    Reorder(ReorderArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable columns.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

/// Arguments for the `assign` subcommand.
#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Path to the input description in TOML format.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Skip centers whose substituents lack coordinates, overriding the input file.
    #[arg(long)]
    pub skip_incomplete: bool,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the input description in TOML format.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Skip centers whose substituents lack coordinates, overriding the input file.
    #[arg(long)]
    pub skip_incomplete: bool,
}

/// Arguments for the `reorder` subcommand.
#[derive(Args, Debug)]
pub struct ReorderArgs {
    /// The current substituent ordering, comma-separated (e.g., a,b,c,d).
    #[arg(long, required = true, value_delimiter = ',', value_name = "IDS")]
    pub refs: Vec<String>,

    /// The parity value defined against the current ordering.
    #[arg(long, required = true, allow_negative_numbers = true, value_name = "FLOAT")]
    pub value: f64,

    /// The new ordering, comma-separated; must be a rearrangement of --refs.
    #[arg(long, required = true, value_delimiter = ',', value_name = "IDS")]
    pub to: Vec<String>,
}
