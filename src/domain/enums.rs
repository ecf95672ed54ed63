use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};

/// Canonical measurement class every amount and catalog entry is normalized to.
/// Mass is measured in kilograms, volume in liters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Mass,
    Volume,
    Piece,
    Bunch,
}

// Serialized with the catalog's unit tokens so reports read like the price file
impl Serialize for UnitClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl UnitClass {
    /// Parses a canonical catalog unit token (`kg`, `L`, `piece`, `bunch`)
    pub fn from_catalog_token(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(UnitClass::Mass),
            "l" => Ok(UnitClass::Volume),
            "piece" => Ok(UnitClass::Piece),
            "bunch" => Ok(UnitClass::Bunch),
            other => Err(anyhow!("Unknown catalog unit: {}", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitClass::Mass => "kg",
            UnitClass::Volume => "L",
            UnitClass::Piece => "piece",
            UnitClass::Bunch => "bunch",
        }
    }

    /// True for the measured classes (kilograms and liters)
    pub fn is_measured(&self) -> bool {
        matches!(self, UnitClass::Mass | UnitClass::Volume)
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which name-matching strategy found a catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The display name is a catalog key as written
    Exact,
    /// The name with its parenthetical qualifier removed
    StrippedQualifier,
    /// The first whitespace-delimited word of the name
    FirstWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_tokens_are_case_insensitive() {
        assert_eq!(UnitClass::from_catalog_token("kg").unwrap(), UnitClass::Mass);
        assert_eq!(UnitClass::from_catalog_token("L").unwrap(), UnitClass::Volume);
        assert_eq!(UnitClass::from_catalog_token("l").unwrap(), UnitClass::Volume);
        assert_eq!(UnitClass::from_catalog_token(" Piece ").unwrap(), UnitClass::Piece);
        assert_eq!(UnitClass::from_catalog_token("bunch").unwrap(), UnitClass::Bunch);
    }

    #[test]
    fn unknown_catalog_token_is_rejected() {
        assert!(UnitClass::from_catalog_token("g").is_err());
        assert!(UnitClass::from_catalog_token("").is_err());
    }

    #[test]
    fn serializes_as_catalog_token() {
        let json = serde_json::to_string(&UnitClass::Volume).unwrap();
        assert_eq!(json, "\"L\"");
        assert_eq!(UnitClass::Mass.to_string(), "kg");
    }
}
