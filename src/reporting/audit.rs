use std::collections::BTreeMap;

use chrono::Local;
use serde::Serialize;

use crate::domain::constants::{AUDIT_TOP_EXPENSIVE, NAME_QUALIFIERS};
use crate::domain::enums::UnitClass;
use crate::domain::model::catalog::PriceCatalog;
use crate::infrastructure::recipe_loader::LoadedRecipe;

/// Reduces an ingredient display name to the form the catalog is keyed by:
/// the parenthetical qualifier and words like "frisch" or "bio" are dropped.
/// Qualifiers stay when removing them would leave nothing.
pub fn normalize_ingredient_name(name: &str) -> String {
    let base = name.split_once('(').map_or(name, |(head, _)| head).trim();

    let kept: Vec<&str> = base
        .split_whitespace()
        .filter(|word| !NAME_QUALIFIERS.contains(&word.to_lowercase().as_str()))
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        kept.join(" ")
    }
}

/// True when a catalog key equals the name or one contains the other, ignoring case
pub fn has_catalog_match(name: &str, catalog: &PriceCatalog) -> bool {
    if catalog.contains(name) {
        return true;
    }
    let name = name.to_lowercase();
    catalog.names().any(|key| {
        let key = key.to_lowercase();
        key.contains(&name) || name.contains(&key)
    })
}

#[derive(Clone, Debug, Serialize)]
pub struct MissingIngredient {
    pub name: String,
    pub used_in: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PricedIngredient {
    pub name: String,
    pub price: f64,
    pub unit: UnitClass,
}

/// Which ingredients used across all recipes have no price in the catalog
#[derive(Clone, Debug, Serialize)]
pub struct CatalogAudit {
    pub generated_at: String,
    pub recipe_count: usize,
    pub unique_ingredients: usize,
    pub missing: Vec<MissingIngredient>,
    pub most_expensive: Vec<PricedIngredient>,
}

impl CatalogAudit {
    pub fn run(recipes: &[LoadedRecipe], catalog: &PriceCatalog) -> Self {
        // normalized name -> recipes using it, one entry per recipe file
        let mut usage: BTreeMap<String, Vec<&LoadedRecipe>> = BTreeMap::new();
        for loaded in recipes {
            for line in &loaded.recipe.ingredients {
                if line.name.trim().is_empty() {
                    continue;
                }
                let users = usage.entry(normalize_ingredient_name(&line.name)).or_default();
                if users.last().map(|user| &user.path) != Some(&loaded.path) {
                    users.push(loaded);
                }
            }
        }

        let unique_ingredients = usage.len();
        let missing = usage
            .into_iter()
            .filter(|(name, _)| !has_catalog_match(name, catalog))
            .map(|(name, users)| MissingIngredient {
                name,
                used_in: users.iter().map(|user| user.recipe.name.clone()).collect(),
            })
            .collect();

        let mut priced: Vec<PricedIngredient> = catalog
            .iter()
            .map(|(name, entry)| PricedIngredient {
                name: name.to_string(),
                price: entry.price_per_unit,
                unit: entry.unit,
            })
            .collect();
        priced.sort_by(|a, b| b.price.total_cmp(&a.price).then_with(|| a.name.cmp(&b.name)));
        priced.truncate(AUDIT_TOP_EXPENSIVE);

        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            recipe_count: recipes.len(),
            unique_ingredients,
            missing,
            most_expensive: priced,
        }
    }

    pub fn with_prices(&self) -> usize {
        self.unique_ingredients - self.missing.len()
    }

    pub fn coverage_percent(&self) -> f64 {
        if self.unique_ingredients == 0 {
            0.0
        } else {
            self.with_prices() as f64 / self.unique_ingredients as f64 * 100.0
        }
    }

    pub fn render(&self) -> String {
        let mut report = Vec::new();
        report.push(format!("Price catalog coverage ({})", self.generated_at));
        report.push("=".repeat(48));
        report.push(format!("Unique ingredients: {:>10}", self.unique_ingredients));
        report.push(format!("With prices:        {:>10}", self.with_prices()));
        report.push(format!("Missing prices:     {:>10}", self.missing.len()));
        report.push(format!("Coverage:           {:>9.1}%", self.coverage_percent()));
        report.push(format!("Recipes:            {:>10}", self.recipe_count));

        if !self.most_expensive.is_empty() {
            report.push(String::new());
            report.push("Most expensive ingredients:".to_string());
            for item in &self.most_expensive {
                report.push(format!("  - {:<24} {:>7.2} €/{}", item.name, item.price, item.unit));
            }
        }

        if !self.missing.is_empty() {
            report.push(String::new());
            report.push("Missing ingredients:".to_string());
            for item in &self.missing {
                report.push(format!("  - {:<32} ({} recipes)", item.name, item.used_in.len()));
            }
        }

        report.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::catalog::CatalogEntry;

    #[test]
    fn test_normalize_ingredient_name() {
        assert_eq!(normalize_ingredient_name("Tomaten (gehackt)"), "Tomaten");
        assert_eq!(normalize_ingredient_name("frische Petersilie"), "frische Petersilie");
        assert_eq!(normalize_ingredient_name("Petersilie frisch"), "Petersilie");
        assert_eq!(normalize_ingredient_name("Bio Karotten"), "Karotten");
        assert_eq!(normalize_ingredient_name("große Zwiebel"), "Zwiebel");
        assert_eq!(normalize_ingredient_name("klein"), "klein");
    }

    #[test]
    fn test_catalog_match_is_substring_either_way() {
        let catalog = PriceCatalog::from_iter([
            ("Zwiebeln", CatalogEntry::new(2.0, UnitClass::Mass)),
            ("Olivenöl", CatalogEntry::new(9.0, UnitClass::Volume)),
        ]);
        assert!(has_catalog_match("Zwiebeln", &catalog));
        assert!(has_catalog_match("zwiebel", &catalog));
        assert!(has_catalog_match("Olivenöl extra vergine", &catalog));
        assert!(!has_catalog_match("Knoblauch", &catalog));
    }
}
