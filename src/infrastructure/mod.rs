//! Loaders for the data the cost engine consumes: the price catalog and recipe files.

pub mod catalog_loader;
pub mod recipe_loader;

pub use catalog_loader::CatalogLoader;
pub use recipe_loader::{LoadedRecipe, RecipeLoader};
