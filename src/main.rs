//! Simply Tic-Tac-Toe - terminal client.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::run(cli.into_options()).await
}
