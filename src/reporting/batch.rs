use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde::Serialize;
use tokio::task::JoinSet;

use crate::domain::model::catalog::PriceCatalog;
use crate::domain::model::cost::{format_cost, round_money, CostBreakdown};
use crate::infrastructure::recipe_loader::LoadedRecipe;
use crate::pricing::cost_engine::CostEngine;

/// Cost estimate for one recipe file
#[derive(Clone, Debug, Serialize)]
pub struct RecipeEstimate {
    pub path: PathBuf,
    pub name: String,
    pub breakdown: CostBreakdown,
    pub low_coverage: bool,
}

/// Totals over a batch of estimates
#[derive(Clone, Debug, Default, Serialize)]
pub struct BatchSummary {
    pub recipes: usize,
    pub fully_priced: usize,
    pub low_coverage: usize,
    pub total_cost: f64,
}

impl BatchSummary {
    pub fn from_estimates(estimates: &[RecipeEstimate]) -> Self {
        let total_cost = estimates
            .iter()
            .map(|estimate| estimate.breakdown.result.total_cost)
            .sum::<f64>();

        Self {
            recipes: estimates.len(),
            fully_priced: estimates
                .iter()
                .filter(|estimate| estimate.breakdown.result.is_fully_priced())
                .count(),
            low_coverage: estimates.iter().filter(|estimate| estimate.low_coverage).count(),
            total_cost: round_money(total_cost),
        }
    }
}

/// Prices many recipes concurrently against one shared catalog
pub struct BatchEstimator {
    catalog: Arc<PriceCatalog>,
    low_coverage_threshold: f64,
}

impl BatchEstimator {
    pub fn new(catalog: Arc<PriceCatalog>, low_coverage_threshold: f64) -> Self {
        Self { catalog, low_coverage_threshold }
    }

    /// Estimates every recipe on the runtime. Results are sorted by path.
    pub async fn estimate_all(&self, recipes: Vec<LoadedRecipe>) -> Result<Vec<RecipeEstimate>> {
        let mut tasks = JoinSet::new();

        for loaded in recipes {
            let catalog = self.catalog.clone();
            let threshold = self.low_coverage_threshold;
            tasks.spawn(async move { Self::estimate_one(&loaded, &catalog, threshold) });
        }

        let mut estimates = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let estimate = joined.map_err(|e| anyhow!("Estimation task failed: {}", e))?;
            estimates.push(estimate);
        }

        estimates.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(estimates)
    }

    pub fn estimate_one(loaded: &LoadedRecipe, catalog: &PriceCatalog, threshold: f64) -> RecipeEstimate {
        let breakdown = CostEngine::breakdown(&loaded.recipe.ingredients, catalog);
        let result = breakdown.result;
        // A recipe without ingredients has nothing to price and counts as fully priced
        let low_coverage = result.total_count > 0 && result.coverage() < threshold;

        if low_coverage {
            warn!(
                "{}: only {} ingredients priced",
                loaded.recipe.name,
                result.coverage_label()
            );
        }
        debug!(
            "{}: {} ({} ingredients priced)",
            loaded.recipe.name,
            format_cost(result.total_cost),
            result.coverage_label()
        );

        RecipeEstimate {
            path: loaded.path.clone(),
            name: loaded.recipe.name.clone(),
            breakdown,
            low_coverage,
        }
    }
}

/// Plain-text table of estimates, one row per recipe plus a summary line
pub fn render_table(estimates: &[RecipeEstimate]) -> String {
    let mut lines = Vec::with_capacity(estimates.len() + 3);
    lines.push(format!("{:<40} {:>12} {:>9}", "Rezept", "Kosten", "Bepreist"));
    lines.push("-".repeat(63));

    for estimate in estimates {
        let result = estimate.breakdown.result;
        let marker = if estimate.low_coverage { " !" } else { "" };
        lines.push(format!(
            "{:<40} {:>12} {:>9}{}",
            truncate(&estimate.name, 40),
            format_cost(result.total_cost),
            result.coverage_label(),
            marker
        ));
    }

    let summary = BatchSummary::from_estimates(estimates);
    lines.push("-".repeat(63));
    lines.push(format!(
        "{} recipes, {} fully priced, {} with low coverage",
        summary.recipes, summary.fully_priced, summary.low_coverage
    ));

    lines.join("\n")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
