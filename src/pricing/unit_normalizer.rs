use crate::domain::constants::{
    GRAMS_PER_KILOGRAM, LITERS_PER_TABLESPOON, LITERS_PER_TEASPOON, MILLILITERS_PER_LITER,
};
use crate::domain::enums::UnitClass;
use crate::domain::model::amount::NormalizedAmount;

/// Every unit word a recipe may use, after synonym folding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipeUnit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Tablespoon,
    Teaspoon,
    Piece,
    Bunch,
    /// Pinch or knife tip; too small to price
    Pinch,
    /// Anything not in the synonym table
    Unknown,
}

impl RecipeUnit {
    /// Maps a raw token to its unit, ignoring case. Total: unrecognized tokens are `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "g" | "gr" | "gramm" => RecipeUnit::Gram,
            "kg" | "kilo" | "kilogramm" => RecipeUnit::Kilogram,
            "ml" | "milliliter" => RecipeUnit::Milliliter,
            "l" | "liter" => RecipeUnit::Liter,
            "el" | "esl" | "esslöffel" => RecipeUnit::Tablespoon,
            "tl" | "teel" | "teelöffel" => RecipeUnit::Teaspoon,
            "stück" | "st" | "st." | "stuck" | "stücke" | "dose" | "dosen" | "can" | "cans" => {
                RecipeUnit::Piece
            }
            "bund" | "bunch" => RecipeUnit::Bunch,
            "prise" | "messerspitze" => RecipeUnit::Pinch,
            _ => RecipeUnit::Unknown,
        }
    }

    /// Converts a quantity in this unit into its canonical class
    pub fn to_canonical(self, quantity: f64) -> NormalizedAmount {
        match self {
            RecipeUnit::Gram => NormalizedAmount::new(quantity / GRAMS_PER_KILOGRAM, UnitClass::Mass),
            RecipeUnit::Kilogram => NormalizedAmount::new(quantity, UnitClass::Mass),
            RecipeUnit::Milliliter => {
                NormalizedAmount::new(quantity / MILLILITERS_PER_LITER, UnitClass::Volume)
            }
            RecipeUnit::Liter => NormalizedAmount::new(quantity, UnitClass::Volume),
            RecipeUnit::Tablespoon => {
                NormalizedAmount::new(quantity * LITERS_PER_TABLESPOON, UnitClass::Volume)
            }
            RecipeUnit::Teaspoon => {
                NormalizedAmount::new(quantity * LITERS_PER_TEASPOON, UnitClass::Volume)
            }
            RecipeUnit::Piece => NormalizedAmount::new(quantity, UnitClass::Piece),
            RecipeUnit::Bunch => NormalizedAmount::new(quantity, UnitClass::Bunch),
            RecipeUnit::Pinch => NormalizedAmount::new(0.0, UnitClass::Piece),
            // Unrecognized words count the quantity as pieces
            RecipeUnit::Unknown => NormalizedAmount::new(quantity, UnitClass::Piece),
        }
    }
}

/// Maps a raw unit token and quantity onto a canonical unit class
pub struct UnitNormalizer;

impl UnitNormalizer {
    /// Normalizes a parsed amount. A missing token means a plain count of pieces.
    pub fn normalize(unit_token: Option<&str>, quantity: f64) -> NormalizedAmount {
        match unit_token {
            Some(token) => RecipeUnit::from_token(token).to_canonical(quantity),
            None => NormalizedAmount::new(quantity, UnitClass::Piece),
        }
    }
}
