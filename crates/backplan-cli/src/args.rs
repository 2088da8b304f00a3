use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BakeCommands, RecipeCommands};

/// Plan bread bakes backwards from the moment the loaf must be ready
///
/// Backplan keeps a library of multi-phase bread recipes. Pick a recipe and
/// a finish time and it works out when every step has to start, running
/// pre-ferments and soakers alongside the main dough. While the bake is on,
/// it tells you which step is running and what comes next.
#[derive(Parser)]
#[command(version, about, name = "backplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/backplan/backplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Backplan CLI
///
/// - `recipe`: add, list, inspect and delete recipes
/// - `bake`: plan a bake of a recipe and follow it step by step
///
/// Without a command, the recipe list is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Plan and follow bakes
    #[command(alias = "b")]
    Bake {
        #[command(subcommand)]
        command: BakeCommands,
    },
}
