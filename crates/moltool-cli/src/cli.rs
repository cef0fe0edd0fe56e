use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use moltool_core::VERSION;

/// moltool - interactive input, formatting and directory helpers for molecular geometry work
#[derive(Parser)]
#[command(name = "moltool")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "MOLTOOL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (no banner)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `input` command
#[derive(Args)]
pub struct InputArgs {
    /// Field name shown in the prompt
    #[arg(long)]
    pub name: String,

    /// Value type: string, int or double
    #[arg(long = "type", default_value = "string")]
    pub kind: String,

    /// Value used when the answer is empty
    #[arg(long)]
    pub default: Option<String>,

    /// Inclusive lower bound (int and double only)
    #[arg(long, allow_hyphen_values = true, requires = "max")]
    pub min: Option<String>,

    /// Inclusive upper bound (int and double only)
    #[arg(long, allow_hyphen_values = true, requires = "min")]
    pub max: Option<String>,

    /// Print a confirmation after accepting the value
    #[arg(long)]
    pub echo: bool,
}

/// Arguments for the `export-path` command
#[derive(Args)]
pub struct ExportPathArgs {
    /// Label for the exported data
    #[arg(long, default_value = "")]
    pub name: String,

    /// Do not allow skipping
    #[arg(long)]
    pub required: bool,
}

/// Arguments for the `mkdir` command
#[derive(Args)]
pub struct MkdirArgs {
    /// Name of the directory to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Subdirectory to create inside it (repeatable, kept in order)
    #[arg(short, long = "sub", value_name = "SUB")]
    pub subdirectories: Vec<String>,

    /// Base directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Create missing parents and accept existing directories
    #[arg(short, long)]
    pub parents: bool,

    /// Append a Unix timestamp to NAME
    #[arg(long)]
    pub stamp: bool,
}

/// Arguments for the `csv` command
#[derive(Args)]
pub struct CsvArgs {
    /// Comma-separated column names
    #[arg(long, value_delimiter = ',', required = true)]
    pub header: Vec<String>,

    /// Placeholder for missing cells
    #[arg(long)]
    pub nil: Option<String>,

    /// JSON file holding an array of objects (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `round` command
#[derive(Args)]
pub struct RoundArgs {
    /// Numbers to round
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Digits after the decimal point
    #[arg(short, long)]
    pub digits: Option<usize>,

    /// printf conversion: f, e, E, g or G
    #[arg(short, long, default_value = "f")]
    pub option: String,
}

/// Arguments for the `pad` command
#[derive(Args)]
pub struct PadArgs {
    /// Text to pad
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Total width in characters
    #[arg(short, long)]
    pub width: usize,

    /// Pad on the left instead of the right
    #[arg(long)]
    pub leading: bool,
}

/// Arguments for the `stamp` command
#[derive(Args)]
pub struct StampArgs {
    /// Text to append the timestamp to
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Separator between text and timestamp
    #[arg(long)]
    pub separator: Option<String>,

    /// Unix time to use instead of now
    #[arg(long, value_name = "EPOCH")]
    pub at: Option<i64>,
}

/// Arguments for the `now` command
#[derive(Args)]
pub struct NowArgs {
    /// IANA timezone name, e.g. America/New_York
    #[arg(long)]
    pub timezone: Option<String>,
}

/// Arguments for the `depth` command
#[derive(Args)]
pub struct DepthArgs {
    /// Number of atoms substituted at once
    #[arg(value_name = "N")]
    pub depth: usize,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prompt for a single validated value and print it
    Input(InputArgs),

    /// Prompt for an .xyz file and summarize it
    ImportXyz,

    /// Prompt for a directory of .xyz files and summarize them
    ImportXyzDir,

    /// Prompt for an export directory
    ExportPath(ExportPathArgs),

    /// Create a directory with optional subdirectories
    Mkdir(MkdirArgs),

    /// Build CSV from a JSON array of objects
    Csv(CsvArgs),

    /// Round numbers to a fixed number of digits
    Round(RoundArgs),

    /// Pad text with spaces to a fixed width
    Pad(PadArgs),

    /// Append a Unix timestamp to text
    Stamp(StampArgs),

    /// Show the current date and time
    Now(NowArgs),

    /// Name an isotopic substitution depth
    Depth(DepthArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
