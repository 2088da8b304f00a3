//! Command-line interface definitions and handlers.
//!
//! Argument structs carry the clap derives and convert into the plain
//! parameter types of `backplan_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Library
//! ```
//!
//! Times typed by the user are resolved here, against the real clock or an
//! `--at` override, so the library only ever sees instants.

use std::{path::PathBuf, time::Duration};

use anyhow::{anyhow, Context, Result};
use backplan_core::{
    display::{CreateResult, DeleteResult, Estimate, OperationStatus},
    params::{CreateRecipe, DeleteRecipe, Id, StartBake, ToggleStep},
    schedule::Anchor,
    Library, Recipe,
};
use clap::{Args, Subcommand};
use jiff::Timestamp;
use log::{debug, info};

use crate::{
    renderer::TerminalRenderer,
    time::{now_or, resolve, TimeArg},
};

/// Add a recipe from a JSON document
///
/// The document has a `title`, optional `description` and `sourceUrl`, and
/// a list of `phases`, each with a `name`, an optional `isParallel` flag
/// and `steps` of `instruction`, `kind` (action, wait, bake) and
/// `durationMinutes`.
#[derive(Args)]
pub struct AddRecipeArgs {
    /// Path to the recipe JSON document
    #[arg(help = "Path to the recipe JSON document")]
    pub file: PathBuf,
}

/// Show details of a specific recipe
#[derive(Args)]
pub struct ShowRecipeArgs {
    #[arg(help = "Unique identifier of the recipe to show")]
    pub id: u64,
}

impl From<ShowRecipeArgs> for Id {
    fn from(val: ShowRecipeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a recipe permanently, together with its bake
#[derive(Args)]
pub struct DeleteRecipeArgs {
    #[arg(help = "Unique identifier of the recipe to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteRecipeArgs> for DeleteRecipe {
    fn from(val: DeleteRecipeArgs) -> Self {
        DeleteRecipe {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Show how long a recipe takes
#[derive(Args)]
pub struct EstimateArgs {
    #[arg(help = "Unique identifier of the recipe to estimate")]
    pub id: u64,
}

impl From<EstimateArgs> for Id {
    fn from(val: EstimateArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe from a JSON document
    #[command(alias = "a")]
    Add(AddRecipeArgs),
    /// List all recipes
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific recipe
    #[command(alias = "s")]
    Show(ShowRecipeArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
    /// Show the estimated total and schedule span of a recipe
    #[command(alias = "e")]
    Estimate(EstimateArgs),
}

/// Plan a bake of a recipe
///
/// Without `--finish-by` or `--start-at` the bake starts now. A finish time
/// is checked against the recipe's estimate before anything is stored.
#[derive(Args)]
pub struct PlanBakeArgs {
    #[arg(help = "Unique identifier of the recipe to bake")]
    pub id: u64,
    /// When the bread must be ready
    #[arg(long, conflicts_with = "start_at")]
    pub finish_by: Option<TimeArg>,
    /// When the first step should start
    #[arg(long)]
    pub start_at: Option<TimeArg>,
    /// Pretend the current time is this instant
    #[arg(long)]
    pub at: Option<TimeArg>,
}

/// Show the state of a bake
#[derive(Args)]
pub struct BakeStatusArgs {
    #[arg(help = "Unique identifier of the recipe being baked")]
    pub id: u64,
    /// Pretend the current time is this instant
    #[arg(long)]
    pub at: Option<TimeArg>,
}

/// Mark the running step done early, or undo a completed step
#[derive(Args)]
pub struct ToggleStepArgs {
    #[arg(help = "Unique identifier of the recipe being baked")]
    pub id: u64,
    #[arg(help = "Position of the step in the bake timeline (0-indexed)")]
    pub index: usize,
    /// Pretend the current time is this instant
    #[arg(long)]
    pub at: Option<TimeArg>,
}

impl From<&ToggleStepArgs> for ToggleStep {
    fn from(val: &ToggleStepArgs) -> Self {
        ToggleStep {
            recipe_id: val.id,
            index: val.index,
        }
    }
}

/// Cancel the bake of a recipe
#[derive(Args)]
pub struct CancelBakeArgs {
    #[arg(help = "Unique identifier of the recipe being baked")]
    pub id: u64,
}

impl From<CancelBakeArgs> for Id {
    fn from(val: CancelBakeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Follow a bake live until every step is done or Ctrl-C is pressed
#[derive(Args)]
pub struct WatchBakeArgs {
    #[arg(help = "Unique identifier of the recipe being baked")]
    pub id: u64,
    /// Seconds between refreshes
    #[arg(long, default_value_t = 1)]
    pub interval: u64,
}

#[derive(Subcommand)]
pub enum BakeCommands {
    /// Plan a bake of a recipe
    #[command(alias = "p")]
    Plan(PlanBakeArgs),
    /// Show the state of a bake
    #[command(alias = "s")]
    Status(BakeStatusArgs),
    /// Mark the running step done early, or undo a completed step
    #[command(alias = "t")]
    Toggle(ToggleStepArgs),
    /// Cancel the bake of a recipe
    #[command(alias = "c")]
    Cancel(CancelBakeArgs),
    /// Follow a bake live
    #[command(alias = "w")]
    Watch(WatchBakeArgs),
}

/// Runs CLI commands against a library and renders the results.
pub struct Cli {
    library: Library,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(library: Library, renderer: TerminalRenderer) -> Self {
        Self { library, renderer }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => self.add_recipe(args).await,
            RecipeCommands::List => self.list_recipes().await,
            RecipeCommands::Show(args) => self.show_recipe(&args.into()).await,
            RecipeCommands::Delete(args) => self.delete_recipe(&args.into()).await,
            RecipeCommands::Estimate(args) => self.estimate_recipe(&args.into()).await,
        }
    }

    pub async fn handle_bake_command(&self, command: BakeCommands) -> Result<()> {
        match command {
            BakeCommands::Plan(args) => self.plan_bake(args).await,
            BakeCommands::Status(args) => self.bake_status(args).await,
            BakeCommands::Toggle(args) => self.toggle_step(args).await,
            BakeCommands::Cancel(args) => self.cancel_bake(&args.into()).await,
            BakeCommands::Watch(args) => self.watch_bake(args).await,
        }
    }

    async fn add_recipe(&self, args: AddRecipeArgs) -> Result<()> {
        let doc = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let params: CreateRecipe = serde_json::from_str(&doc)
            .with_context(|| format!("{} is not a valid recipe document", args.file.display()))?;

        let imported = self
            .library
            .add_recipe(&params)
            .await
            .context("Failed to add recipe")?;

        self.renderer
            .render(&CreateResult::new(imported).to_string())
    }

    pub async fn list_recipes(&self) -> Result<()> {
        let summaries = self
            .library
            .list_recipes()
            .await
            .context("Failed to list recipes")?;

        if summaries.is_empty() {
            self.renderer.render(&summaries.to_string())
        } else {
            self.renderer.render(&format!("# Recipes\n\n{summaries}"))
        }
    }

    async fn show_recipe(&self, params: &Id) -> Result<()> {
        let recipe = self.require_recipe(params).await?;
        self.renderer.render(&recipe.to_string())
    }

    async fn delete_recipe(&self, params: &DeleteRecipe) -> Result<()> {
        let recipe = self.require_recipe(&Id { id: params.id }).await?;
        self.library
            .delete_recipe(params)
            .await
            .context("Failed to delete recipe")?;

        self.renderer.render(&DeleteResult::new(recipe).to_string())
    }

    async fn estimate_recipe(&self, params: &Id) -> Result<()> {
        let recipe = self.require_recipe(params).await?;
        self.renderer.render(&Estimate(&recipe).to_string())
    }

    async fn plan_bake(&self, args: PlanBakeArgs) -> Result<()> {
        let now = now_or(args.at)?;
        let anchor = match (args.finish_by, args.start_at) {
            (Some(finish_by), _) => Anchor::FinishBy(resolve(finish_by, now)?),
            (None, Some(start_at)) => Anchor::StartAt(resolve(start_at, now)?),
            (None, None) => Anchor::Now(now),
        };
        debug!("Planning recipe {} with anchor {anchor:?}", args.id);

        let report = self
            .library
            .start_bake(
                &StartBake {
                    recipe_id: args.id,
                    anchor,
                },
                now,
            )
            .await
            .context("Failed to plan bake")?;

        self.renderer.render(&report.to_string())
    }

    async fn bake_status(&self, args: BakeStatusArgs) -> Result<()> {
        let now = now_or(args.at)?;
        let report = self
            .library
            .bake_status(&Id { id: args.id }, now)
            .await
            .context("Failed to get bake status")?;

        self.renderer.render(&report.to_string())
    }

    async fn toggle_step(&self, args: ToggleStepArgs) -> Result<()> {
        let now = now_or(args.at)?;
        let params = ToggleStep::from(&args);
        let report = self
            .library
            .toggle_step(&params, now)
            .await
            .context("Failed to toggle step")?;

        let message = if report.completed.contains(params.index) {
            format!("Step {} marked done", params.index)
        } else {
            format!("Step {} is not marked done", params.index)
        };
        self.renderer.render(&format!("{message}\n\n{report}"))
    }

    async fn cancel_bake(&self, params: &Id) -> Result<()> {
        self.library
            .cancel_bake(params)
            .await
            .context("Failed to cancel bake")?;

        let status = OperationStatus::success(format!("Bake of recipe {} cancelled", params.id));
        self.renderer.render(&status.to_string())
    }

    async fn watch_bake(&self, args: WatchBakeArgs) -> Result<()> {
        let params = Id { id: args.id };
        let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);
        info!("Watching bake of recipe {}", args.id);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self
                        .library
                        .bake_status(&params, Timestamp::now())
                        .await
                        .context("Failed to get bake status")?;
                    self.renderer.render_frame(&report.to_string())?;

                    if report.timeline.is_empty() {
                        info!("Bake of recipe {} has no steps to follow", args.id);
                        return Ok(());
                    }
                    if report.progress.is_finished() {
                        info!("Bake of recipe {} finished", args.id);
                        return Ok(());
                    }
                }
                result = &mut interrupt => {
                    result.context("Failed to listen for Ctrl-C")?;
                    debug!("Watch interrupted");
                    return Ok(());
                }
            }
        }
    }

    async fn require_recipe(&self, params: &Id) -> Result<Recipe> {
        self.library
            .get_recipe(params)
            .await
            .context("Failed to load recipe")?
            .ok_or_else(|| anyhow!("Recipe with ID {} not found", params.id))
    }
}
