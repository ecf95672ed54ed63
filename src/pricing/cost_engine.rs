use log::debug;

use crate::domain::enums::UnitClass;
use crate::domain::errors::Unpriced;
use crate::domain::model::amount::ParsedAmount;
use crate::domain::model::catalog::PriceCatalog;
use crate::domain::model::cost::{round_money, CostBreakdown, LineCost, RecipeCostResult};
use crate::domain::model::ingredient::IngredientLine;
use crate::pricing::amount_parser::AmountParser;
use crate::pricing::name_resolver::NameResolver;
use crate::pricing::unit_normalizer::UnitNormalizer;

/// How a recipe amount relates to the unit a catalog price is quoted in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitCompatibility {
    /// Both sides use the same unit class
    SameClass,
    /// A piece count against a kg or L price. The price is used as a flat
    /// per-piece price; nothing is converted.
    PiecesAgainstMeasuredPrice,
}

/// Prices ingredient lines and whole recipes against an explicitly passed catalog.
///
/// Stateless: every call depends only on its arguments.
pub struct CostEngine;

impl CostEngine {
    /// Cost of one ingredient line, or `None` when it cannot be priced
    pub fn price_ingredient(name: &str, raw_amount: &str, catalog: &PriceCatalog) -> Option<f64> {
        Self::try_price_ingredient(name, raw_amount, catalog).ok()
    }

    /// Cost of one ingredient line, with the reason when it cannot be priced
    pub fn try_price_ingredient(
        name: &str,
        raw_amount: &str,
        catalog: &PriceCatalog,
    ) -> Result<f64, Unpriced> {
        let (quantity, unit_token) = match AmountParser::parse(raw_amount) {
            ParsedAmount::ToTaste => return Ok(0.0),
            ParsedAmount::Unparsable => {
                debug!("Cannot parse amount '{}' for '{}'", raw_amount, name);
                return Err(Unpriced::ParseFailure);
            }
            ParsedAmount::Quantity { quantity, unit_token } => (quantity, unit_token),
        };

        let normalized = UnitNormalizer::normalize(unit_token.as_deref(), quantity);
        let entry = NameResolver::resolve(name, catalog).ok_or(Unpriced::CatalogMiss)?;

        let compatibility = Self::compatibility(normalized.unit, entry.unit).map_err(|e| {
            debug!(
                "'{}': amount in {} cannot be priced per {}",
                name, normalized.unit, entry.unit
            );
            e
        })?;
        debug!("'{}': {:?}", name, compatibility);

        Ok(round_money(entry.price_per_unit * normalized.quantity))
    }

    /// Decides whether an amount in `amount_unit` can be priced at a price quoted per `catalog_unit`
    pub fn compatibility(
        amount_unit: UnitClass,
        catalog_unit: UnitClass,
    ) -> Result<UnitCompatibility, Unpriced> {
        if amount_unit == catalog_unit {
            return Ok(UnitCompatibility::SameClass);
        }
        match (amount_unit, catalog_unit) {
            // A mass or volume amount cannot be turned into a piece count
            (measured, UnitClass::Piece) if measured.is_measured() => Err(Unpriced::UnitMismatch),
            (UnitClass::Piece, measured) if measured.is_measured() => {
                Ok(UnitCompatibility::PiecesAgainstMeasuredPrice)
            }
            _ => Err(Unpriced::UnitMismatch),
        }
    }

    /// Total cost and coverage counts of a recipe's ingredient list
    pub fn calculate_recipe_cost(lines: &[IngredientLine], catalog: &PriceCatalog) -> RecipeCostResult {
        Self::aggregate(
            lines
                .iter()
                .map(|line| Self::try_price_ingredient(&line.name, &line.amount, catalog)),
        )
    }

    /// Per-line outcomes together with the recipe aggregate
    pub fn breakdown(lines: &[IngredientLine], catalog: &PriceCatalog) -> CostBreakdown {
        let lines: Vec<LineCost> = lines
            .iter()
            .map(|line| LineCost {
                name: line.name.clone(),
                amount: line.amount.clone(),
                outcome: Self::try_price_ingredient(&line.name, &line.amount, catalog),
            })
            .collect();
        let result = Self::aggregate(lines.iter().map(|line| line.outcome));

        CostBreakdown { lines, result }
    }

    fn aggregate(outcomes: impl Iterator<Item = Result<f64, Unpriced>>) -> RecipeCostResult {
        let mut total_cost = 0.0;
        let mut priced_count = 0;
        let mut total_count = 0;

        for outcome in outcomes {
            total_count += 1;
            if let Ok(cost) = outcome {
                total_cost += cost;
                priced_count += 1;
            }
        }

        RecipeCostResult {
            total_cost: round_money(total_cost),
            priced_count,
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_same_class() {
        for unit in [UnitClass::Mass, UnitClass::Volume, UnitClass::Piece, UnitClass::Bunch] {
            assert_eq!(CostEngine::compatibility(unit, unit), Ok(UnitCompatibility::SameClass));
        }
    }

    #[test]
    fn test_compatibility_pieces_against_measured_price() {
        assert_eq!(
            CostEngine::compatibility(UnitClass::Piece, UnitClass::Mass),
            Ok(UnitCompatibility::PiecesAgainstMeasuredPrice)
        );
        assert_eq!(
            CostEngine::compatibility(UnitClass::Piece, UnitClass::Volume),
            Ok(UnitCompatibility::PiecesAgainstMeasuredPrice)
        );
    }

    #[test]
    fn test_compatibility_mismatches() {
        let mismatches = [
            (UnitClass::Mass, UnitClass::Piece),
            (UnitClass::Volume, UnitClass::Piece),
            (UnitClass::Mass, UnitClass::Volume),
            (UnitClass::Volume, UnitClass::Mass),
            (UnitClass::Bunch, UnitClass::Piece),
            (UnitClass::Piece, UnitClass::Bunch),
            (UnitClass::Bunch, UnitClass::Mass),
            (UnitClass::Mass, UnitClass::Bunch),
        ];
        for (amount, catalog) in mismatches {
            assert_eq!(
                CostEngine::compatibility(amount, catalog),
                Err(Unpriced::UnitMismatch),
                "{} against {}",
                amount,
                catalog
            );
        }
    }
}
