//! CLI argument parsing for squint.

use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "squint")]
#[command(about = "Turn pasted Slurm status output into one cluster snapshot")]
pub struct Args {
    /// File containing the pasted command outputs (stdin if omitted)
    pub input: Option<Utf8PathBuf>,

    /// How to anchor naive timestamps (auto, utc, or local)
    #[arg(long, default_value = "auto")]
    pub timezone: String,

    /// Emit the snapshot as JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}
