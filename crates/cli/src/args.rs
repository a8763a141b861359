use clap::Parser;
use std::path::PathBuf;

/// The stockbook command line.
#[derive(Parser, Debug)]
#[command(name = "stockbook")]
#[command(about = "Keep a small JSON-backed index of stock items", long_about = None)]
pub struct Cli {
    /// Path of the JSON persistence file.
    #[arg(short, long, default_value = "items.json")]
    pub file: PathBuf,
}
