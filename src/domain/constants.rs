// Fixed conversion factors into the canonical unit classes.
// Mass is expressed in kilograms, volume in liters.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const MILLILITERS_PER_LITER: f64 = 1000.0;

/// Approximate volume of one tablespoon (Esslöffel), in liters
pub const LITERS_PER_TABLESPOON: f64 = 0.015;

/// Approximate volume of one teaspoon (Teelöffel), in liters
pub const LITERS_PER_TEASPOON: f64 = 0.005;

/// Literal amount that marks an ingredient as "to taste"
pub const TO_TASTE: &str = "nach Geschmack";

/// Number of decimal places every monetary value is rounded to
pub const MONEY_DECIMALS: i32 = 2;

/// Currency suffix used when rendering costs
pub const CURRENCY_SYMBOL: &str = "€";

/// Words dropped from ingredient names by the catalog audit before matching
pub const NAME_QUALIFIERS: &[&str] = &[
    "frisch",
    "gefroren",
    "bio",
    "klein",
    "groß",
    "große",
    "kleine",
];

/// How many of the priciest catalog entries the audit report lists
pub const AUDIT_TOP_EXPENSIVE: usize = 5;
