//! Recipe pricing
//!
//! Parses quantity strings, normalizes them to canonical units, matches
//! ingredient names against a price catalog and aggregates recipe costs.

pub mod amount_parser;
pub mod cost_engine;
pub mod name_resolver;
pub mod unit_normalizer;

pub use amount_parser::AmountParser;
pub use cost_engine::{CostEngine, UnitCompatibility};
pub use name_resolver::NameResolver;
pub use unit_normalizer::{RecipeUnit, UnitNormalizer};
