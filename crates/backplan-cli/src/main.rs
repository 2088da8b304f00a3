//! Backplan CLI Application
//!
//! Command-line interface for planning bread bakes backwards from the
//! moment the loaf must be ready.

mod args;
mod cli;
mod renderer;
mod time;

use anyhow::{Context, Result};
use args::{Args, Commands};
use backplan_core::LibraryBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let library = LibraryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open recipe library")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(library, renderer);

    info!("Backplan started");

    match command {
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(Bake { command }) => cli.handle_bake_command(command).await,
        None => cli.list_recipes().await,
    }
}
