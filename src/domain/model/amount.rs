// Domain model for ingredient quantities, before and after unit normalization
use serde::Serialize;

use crate::domain::enums::UnitClass;

/// Result of reading one raw amount string
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedAmount {
    /// No quantifiable amount; priced at zero and counted as priced
    ToTaste,
    /// A leading number and the first unit-like word that followed it, if any
    Quantity {
        quantity: f64,
        unit_token: Option<String>,
    },
    /// No recognizable leading number
    Unparsable,
}

impl ParsedAmount {
    pub fn quantity(&self) -> Option<f64> {
        match self {
            ParsedAmount::Quantity { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    pub fn unit_token(&self) -> Option<&str> {
        match self {
            ParsedAmount::Quantity { unit_token, .. } => unit_token.as_deref(),
            _ => None,
        }
    }
}

/// A quantity expressed in one of the canonical unit classes
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NormalizedAmount {
    pub quantity: f64,
    pub unit: UnitClass,
}

impl NormalizedAmount {
    pub fn new(quantity: f64, unit: UnitClass) -> Self {
        Self { quantity, unit }
    }
}
