use std::sync::LazyLock;

use regex::Regex;

use crate::domain::constants::TO_TASTE;
use crate::domain::model::amount::ParsedAmount;

/// Digits with at most one decimal separator, anchored at the start
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?").expect("leading number pattern is valid"));

/// The same number shape, but the whole input must match
static WHOLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?$").expect("whole number pattern is valid"));

/// A run of Latin letters including the German umlauts and sharp s
static UNIT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-ZäöüÄÖÜß]+").expect("unit word pattern is valid"));

/// Reads free-form German quantity strings such as "200 g", "1-2 TL" or "nach Geschmack"
pub struct AmountParser;

impl AmountParser {
    /// Parses a raw amount. Never fails: input without a leading number
    /// comes back as `ParsedAmount::Unparsable`.
    pub fn parse(raw: &str) -> ParsedAmount {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == TO_TASTE {
            return ParsedAmount::ToTaste;
        }

        // A failed range parse falls back to reading a single number
        if let Some(range) = Self::parse_range(trimmed) {
            return range;
        }

        Self::parse_single(trimmed)
    }

    /// "1-2 TL" becomes the mean of both bounds with the unit of the upper bound
    fn parse_range(trimmed: &str) -> Option<ParsedAmount> {
        if trimmed.starts_with('-') {
            return None;
        }
        let (lower, upper) = trimmed.split_once('-')?;

        let lower = lower.trim();
        if !WHOLE_NUMBER.is_match(lower) {
            return None;
        }
        let low = decimal(lower)?;

        let upper = upper.trim();
        let high = decimal(LEADING_NUMBER.find(upper)?.as_str())?;

        Some(ParsedAmount::Quantity {
            quantity: (low + high) / 2.0,
            unit_token: UNIT_WORD.find(upper).map(|m| m.as_str().to_string()),
        })
    }

    fn parse_single(trimmed: &str) -> ParsedAmount {
        let Some(number) = LEADING_NUMBER.find(trimmed) else {
            return ParsedAmount::Unparsable;
        };
        let Some(quantity) = decimal(number.as_str()) else {
            return ParsedAmount::Unparsable;
        };

        ParsedAmount::Quantity {
            quantity,
            unit_token: UNIT_WORD
                .find(&trimmed[number.end()..])
                .map(|m| m.as_str().to_string()),
        }
    }
}

/// Accepts both `.` and `,` as the decimal separator
fn decimal(text: &str) -> Option<f64> {
    text.replace(',', ".").parse::<f64>().ok()
}
