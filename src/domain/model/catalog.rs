// Domain model for the ingredient price catalog
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::enums::UnitClass;

/// Price of one canonical unit of an ingredient
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub price_per_unit: f64,
    pub unit: UnitClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CatalogEntry {
    pub fn new(price_per_unit: f64, unit: UnitClass) -> Self {
        Self { price_per_unit, unit, notes: None }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Read-only mapping from ingredient name to its price entry.
///
/// Built once per batch and passed explicitly to every pricing call. Nothing
/// in the engine mutates it, so a single instance can be shared across
/// threads behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct PriceCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl PriceCatalog {
    pub fn new(entries: HashMap<String, CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, CatalogEntry)> for PriceCatalog {
    fn from_iter<I: IntoIterator<Item = (S, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, entry)| (name.into(), entry)).collect(),
        }
    }
}
