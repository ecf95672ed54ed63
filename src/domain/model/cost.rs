// Domain model for computed costs
use serde::Serialize;

use crate::domain::constants::{CURRENCY_SYMBOL, MONEY_DECIMALS};
use crate::domain::errors::Unpriced;

/// Rounds a monetary value to cents.
///
/// Works on the exact stored value and sends ties to the even cent, so
/// 0.125 becomes 0.12 and 0.375 becomes 0.38.
pub fn round_money(value: f64) -> f64 {
    format!("{:.*}", MONEY_DECIMALS as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Formats a cost the German way, e.g. `2,50 €`
pub fn format_cost(cost: f64) -> String {
    format!("{:.2} {}", cost, CURRENCY_SYMBOL).replace('.', ",")
}

/// Aggregate cost of one recipe together with how many lines could be priced
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RecipeCostResult {
    pub total_cost: f64,
    pub priced_count: usize,
    pub total_count: usize,
}

impl RecipeCostResult {
    /// Fraction of ingredient lines that contributed to the total.
    /// An empty recipe has zero coverage.
    pub fn coverage(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.priced_count as f64 / self.total_count as f64
        }
    }

    /// Coverage as "priced/total"
    pub fn coverage_label(&self) -> String {
        format!("{}/{}", self.priced_count, self.total_count)
    }

    pub fn is_fully_priced(&self) -> bool {
        self.priced_count == self.total_count
    }
}

/// Pricing outcome of a single ingredient line
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineCost {
    pub name: String,
    pub amount: String,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<f64, Unpriced>,
}

impl LineCost {
    pub fn cost(&self) -> Option<f64> {
        self.outcome.ok()
    }
}

fn serialize_outcome<S>(outcome: &Result<f64, Unpriced>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    match outcome {
        Ok(cost) => map.serialize_entry("cost", cost)?,
        Err(reason) => map.serialize_entry("unpriced", reason)?,
    }
    map.end()
}

/// Per-line outcomes plus the recipe aggregate derived from them
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub lines: Vec<LineCost>,
    pub result: RecipeCostResult,
}

impl CostBreakdown {
    pub fn unpriced(&self) -> impl Iterator<Item = &LineCost> {
        self.lines.iter().filter(|line| line.outcome.is_err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_money(0.40 * 3.0), 1.2);
        assert_eq!(round_money(1.234), 1.23);
        assert_eq!(round_money(1.236), 1.24);
        assert_eq!(round_money(0.0), 0.0);
    }

    #[test]
    fn half_cent_ties_round_to_even() {
        assert_eq!(round_money(0.125), 0.12);
        assert_eq!(round_money(0.375), 0.38);
        assert_eq!(round_money(2.5 * 0.25), 0.62);
    }

    #[test]
    fn formats_with_comma_and_euro_sign() {
        assert_eq!(format_cost(2.5), "2,50 €");
        assert_eq!(format_cost(0.0), "0,00 €");
        assert_eq!(format_cost(12.3), "12,30 €");
    }

    #[test]
    fn coverage_of_empty_recipe_is_zero() {
        let result = RecipeCostResult::default();
        assert_eq!(result.coverage(), 0.0);
        assert_eq!(result.coverage_label(), "0/0");
        assert!(result.is_fully_priced());
    }

    #[test]
    fn coverage_is_priced_over_total() {
        let result = RecipeCostResult { total_cost: 1.8, priced_count: 2, total_count: 3 };
        assert!((result.coverage() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.coverage_label(), "2/3");
        assert!(!result.is_fully_priced());
    }
}
