use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::domain::errors::RecipeError;
use crate::domain::model::ingredient::{IngredientLine, Recipe};

#[derive(Debug, Deserialize)]
struct RecipeFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<IngredientRecord>>,
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Option<AmountField>,
}

/// Recipe files write amounts either as text or as bare numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmountField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AmountField {
    fn into_text(self) -> String {
        match self {
            AmountField::Integer(n) => n.to_string(),
            AmountField::Float(n) => n.to_string(),
            AmountField::Text(s) => s,
        }
    }
}

/// A recipe together with the file it was read from
#[derive(Clone, Debug)]
pub struct LoadedRecipe {
    pub path: PathBuf,
    pub recipe: Recipe,
}

/// Reads recipe YAML files. Only the name and ingredient list are kept.
pub struct RecipeLoader;

impl RecipeLoader {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Recipe, RecipeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, path)
    }

    /// Parses recipe content. `path` names the recipe when it has no `name`
    /// field and is used in error messages.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Recipe, RecipeError> {
        let file: RecipeFile = serde_yaml::from_str(content).map_err(|source| RecipeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let ingredients = file.ingredients.ok_or_else(|| RecipeError::MissingIngredients {
            path: path.to_path_buf(),
        })?;

        let name = file.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(Recipe {
            name,
            ingredients: ingredients
                .into_iter()
                .map(|record| IngredientLine {
                    name: record.name,
                    amount: record.amount.map(AmountField::into_text).unwrap_or_default(),
                })
                .collect(),
        })
    }

    /// All recipe files below `dir`, sorted by path
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, RecipeError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RecipeError::NotADirectory { path: dir.to_path_buf() });
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_recipe_file(entry.path()) => {
                    paths.push(entry.path().to_path_buf());
                }
                Ok(_) => {}
                Err(e) => warn!("Error accessing entry: {}", e),
            }
        }
        paths.sort();

        debug!("Found {} recipe files in {}", paths.len(), dir.display());
        Ok(paths)
    }

    /// Loads every recipe below `dir`. Files that cannot be read or parsed
    /// are skipped with a warning.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<LoadedRecipe>, RecipeError> {
        let dir = dir.as_ref();
        let paths = Self::discover(dir)?;

        let recipes: Vec<LoadedRecipe> = paths
            .into_iter()
            .filter_map(|path| match Self::from_file(&path) {
                Ok(recipe) => Some(LoadedRecipe { path, recipe }),
                Err(e) => {
                    warn!("Could not process {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        info!("Loaded {} recipes from {}", recipes.len(), dir.display());
        Ok(recipes)
    }
}

fn is_recipe_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts_are_stringified() {
        let yaml = r#"
name: Pfannkuchen
servings: 4
ingredients:
  - name: Mehl
    amount: 250 g
  - name: Eier
    amount: 3
  - name: Milch
    amount: 0.5
  - name: Salz
    amount: nach Geschmack
  - name: Zucker
"#;
        let recipe = RecipeLoader::from_yaml_str(yaml, Path::new("pfannkuchen.yaml")).unwrap();
        assert_eq!(recipe.name, "Pfannkuchen");
        let amounts: Vec<&str> = recipe.ingredients.iter().map(|i| i.amount.as_str()).collect();
        assert_eq!(amounts, vec!["250 g", "3", "0.5", "nach Geschmack", ""]);
    }

    #[test]
    fn test_name_defaults_to_file_stem() {
        let yaml = "ingredients:\n  - name: Reis\n    amount: 200 g\n";
        let recipe = RecipeLoader::from_yaml_str(yaml, Path::new("recipes/reis.yaml")).unwrap();
        assert_eq!(recipe.name, "reis");
    }

    #[test]
    fn test_missing_ingredients() {
        let err = RecipeLoader::from_yaml_str("name: Leer\n", Path::new("leer.yaml")).unwrap_err();
        assert!(matches!(err, RecipeError::MissingIngredients { .. }));
    }

    #[test]
    fn test_recipe_extensions() {
        assert!(is_recipe_file(Path::new("a/b.yaml")));
        assert!(is_recipe_file(Path::new("b.yml")));
        assert!(!is_recipe_file(Path::new("b.json")));
        assert!(!is_recipe_file(Path::new("README")));
    }
}
