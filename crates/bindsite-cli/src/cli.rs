use bindsite::engine::config::DEFAULT_CHAIN_ID;
use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "bindsite - Computes the mass-weighted center of a binding-site residue selection \
             in a macromolecular structure, for docking-box placement and pocket analysis.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input structure file (PDB or mmCIF).
    #[arg(value_name = "STRUCTURE")]
    pub input: PathBuf,

    /// Comma-separated residue sequence numbers of the binding site (e.g. "45,46,102").
    #[arg(value_name = "RESIDUES")]
    pub residues: String,

    /// Chain identifier the residue numbers refer to.
    #[arg(short, long, value_name = "ID", default_value = DEFAULT_CHAIN_ID)]
    pub chain: String,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
