//! stockbook application entry point: the interactive menu binary.

use anyhow::Context;
use clap::Parser;

use stockbook_inventory::ItemIndex;

mod args;
mod menu;

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let cli = args::Cli::parse();

    let mut index = ItemIndex::open(cli.file.clone())
        .with_context(|| format!("failed to open index at {}", cli.file.display()))?;
    tracing::info!(path = %cli.file.display(), count = index.len(), "index loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut index, stdin.lock(), stdout.lock()).context("menu loop failed")?;

    Ok(())
}
