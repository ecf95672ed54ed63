// Standard library imports
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{info, warn};

// Internal crate imports
use recipe_cost::config_loader::AppConfig;
use recipe_cost::domain::errors::CatalogError;
use recipe_cost::reporting::batch::render_table;
use recipe_cost::reporting::{BatchEstimator, BatchSummary, CatalogAudit};
use recipe_cost::{format_cost, CatalogLoader, CostEngine, PriceCatalog, RecipeLoader};

#[derive(Parser)]
#[command(name = "recipe_cost")]
#[command(about = "Estimate recipe costs from a German ingredient price catalog")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true, env = "RECIPE_COST_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost of every recipe in the recipes directory
    Estimate {
        #[arg(long)]
        recipes: Option<PathBuf>,

        #[arg(long)]
        prices: Option<PathBuf>,

        /// Print the full per-ingredient breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report recipe ingredients that have no catalog price
    Audit {
        #[arg(long)]
        recipes: Option<PathBuf>,

        #[arg(long)]
        prices: Option<PathBuf>,
    },

    /// Price a single ingredient line
    Price {
        /// Ingredient name as written in the recipe
        name: String,

        /// Amount as written in the recipe, e.g. "200 g"
        amount: String,

        #[arg(long)]
        prices: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level_filter()
    };
    env_logger::Builder::new().filter_level(level).init();
    info!("Logger initialized");

    match cli.command {
        Commands::Estimate { recipes, prices, json } => {
            let catalog = Arc::new(load_catalog(prices.as_deref().unwrap_or(&config.paths.prices_file))?);
            let recipes = RecipeLoader::load_dir(recipes.as_deref().unwrap_or(&config.paths.recipes_dir))?;

            let estimator = BatchEstimator::new(catalog, config.app.low_coverage_threshold);
            let estimates = estimator.estimate_all(recipes).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&estimates)?);
            } else {
                println!("{}", render_table(&estimates));
            }

            let summary = BatchSummary::from_estimates(&estimates);
            info!(
                "Estimated {} recipes ({} with low coverage)",
                summary.recipes, summary.low_coverage
            );
        }
        Commands::Audit { recipes, prices } => {
            let catalog = load_catalog(prices.as_deref().unwrap_or(&config.paths.prices_file))?;
            let recipes = RecipeLoader::load_dir(recipes.as_deref().unwrap_or(&config.paths.recipes_dir))?;

            let audit = CatalogAudit::run(&recipes, &catalog);
            println!("{}", audit.render());
        }
        Commands::Price { name, amount, prices } => {
            let catalog = load_catalog(prices.as_deref().unwrap_or(&config.paths.prices_file))?;

            match CostEngine::try_price_ingredient(&name, &amount, &catalog) {
                Ok(cost) => println!("{} {}: {}", amount, name, format_cost(cost)),
                Err(reason) => println!("{} {}: not priced ({})", amount, name, reason),
            }
        }
    }

    Ok(())
}

/// A missing price file means nothing can be priced, not a fatal error
fn load_catalog(path: &Path) -> Result<PriceCatalog> {
    match CatalogLoader::from_file(path) {
        Ok(catalog) => Ok(catalog),
        Err(CatalogError::Io { path, source }) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!("Price file {} not found, continuing with an empty catalog", path.display());
            Ok(PriceCatalog::default())
        }
        Err(e) => Err(e.into()),
    }
}
