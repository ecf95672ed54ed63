use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::enums::UnitClass;
use crate::domain::errors::CatalogError;
use crate::domain::model::catalog::{CatalogEntry, PriceCatalog};

/// One record of the price file as written, before validation
#[derive(Debug, Deserialize)]
struct RawCatalogRecord {
    price: Option<f64>,
    unit: Option<String>,
    #[serde(default)]
    notes: Option<Value>,
}

/// Notes are free text; scalars of any kind are kept as written
fn notes_text(notes: Option<Value>) -> Option<String> {
    match notes? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Loads the YAML price file into a `PriceCatalog`.
///
/// Malformed entries are skipped with a warning so they never reach name
/// resolution: non-mapping records, records without `price` or `unit`,
/// negative prices and units outside `kg`, `L`, `piece`, `bunch`.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PriceCatalog, CatalogError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_yaml_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded {} priced ingredients from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parses a price document. An empty document is an empty catalog.
    pub fn from_yaml_str(content: &str) -> Result<PriceCatalog, serde_yaml::Error> {
        let document: Value = serde_yaml::from_str(content)?;
        if document.is_null() {
            return Ok(PriceCatalog::default());
        }

        let records: BTreeMap<String, Value> = serde_yaml::from_value(document)?;
        let entries: HashMap<String, CatalogEntry> = records
            .into_iter()
            .filter_map(|(name, value)| Self::entry_from_value(&name, value).map(|entry| (name, entry)))
            .collect();

        Ok(PriceCatalog::new(entries))
    }

    fn entry_from_value(name: &str, value: Value) -> Option<CatalogEntry> {
        let record: RawCatalogRecord = match serde_yaml::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping catalog entry '{}': {}", name, e);
                return None;
            }
        };

        let (Some(price), Some(unit)) = (record.price, record.unit) else {
            warn!("Skipping catalog entry '{}': missing price or unit", name);
            return None;
        };

        if !price.is_finite() || price < 0.0 {
            warn!("Skipping catalog entry '{}': invalid price {}", name, price);
            return None;
        }

        let unit = match UnitClass::from_catalog_token(&unit) {
            Ok(unit) => unit,
            Err(e) => {
                warn!("Skipping catalog entry '{}': {}", name, e);
                return None;
            }
        };

        Some(CatalogEntry {
            price_per_unit: price,
            unit,
            notes: notes_text(record.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entries() {
        let yaml = r#"
Mehl:
  price: 1.20
  unit: kg
Milch:
  price: 1.15
  unit: L
  notes: Bio Vollmilch 3,8%
Ei:
  price: 0.4
  unit: piece
Petersilie:
  price: 1
  unit: bunch
"#;
        let catalog = CatalogLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("Mehl"), Some(&CatalogEntry::new(1.2, UnitClass::Mass)));
        assert_eq!(
            catalog.get("Milch"),
            Some(&CatalogEntry::new(1.15, UnitClass::Volume).with_notes("Bio Vollmilch 3,8%"))
        );
        assert_eq!(catalog.get("Ei").map(|e| e.unit), Some(UnitClass::Piece));
        assert_eq!(catalog.get("Petersilie").map(|e| e.price_per_unit), Some(1.0));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let yaml = r#"
Mehl:
  price: 1.20
  unit: kg
OhnePreis:
  unit: kg
OhneEinheit:
  price: 2.0
Negativ:
  price: -1.0
  unit: kg
Gramm:
  price: 0.01
  unit: g
Kaputt: "3 Euro"
"#;
        let catalog = CatalogLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Mehl"));
    }

    #[test]
    fn test_non_text_notes_keep_the_entry() {
        let yaml = r#"
Reis:
  price: 2.49
  unit: kg
  notes: 2024
Hafer:
  price: 1.99
  unit: kg
  notes: [Bio, lose]
"#;
        let catalog = CatalogLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Reis").and_then(|e| e.notes.as_deref()), Some("2024"));
        assert_eq!(catalog.get("Hafer").map(|e| e.notes.is_none()), Some(true));
    }

    #[test]
    fn test_empty_document() {
        assert!(CatalogLoader::from_yaml_str("").unwrap().is_empty());
        assert!(CatalogLoader::from_yaml_str("# noch keine Preise\n").unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_document_is_an_error() {
        assert!(CatalogLoader::from_yaml_str("- Mehl\n- Zucker\n").is_err());
    }
}
