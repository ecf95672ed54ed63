use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why an ingredient line could not contribute to a recipe's cost.
/// None of these abort a computation; they only lower coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unpriced {
    #[error("amount has no recognizable leading number")]
    ParseFailure,
    #[error("no catalog entry matches the ingredient name")]
    CatalogMiss,
    #[error("amount unit is incompatible with the catalog unit")]
    UnitMismatch,
}

impl Serialize for Unpriced {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Unpriced::ParseFailure => serializer.serialize_str("parse_failure"),
            Unpriced::CatalogMiss => serializer.serialize_str("catalog_miss"),
            Unpriced::UnitMismatch => serializer.serialize_str("unit_mismatch"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read price catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse price catalog '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("failed to read recipe '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse recipe '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("recipe '{}' has no ingredients list", .path.display())]
    MissingIngredients { path: PathBuf },
    #[error("recipes directory '{}' does not exist or is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}
