// Domain model for recipes as far as pricing is concerned
use serde::Serialize;

/// One row of a recipe's ingredient list
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    /// Free-form quantity text, e.g. "200 g", "1-2 TL" or "nach Geschmack"
    pub amount: String,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self { name: name.into(), amount: amount.into() }
    }
}

/// A recipe reduced to the fields the cost engine consumes
#[derive(Clone, Debug, Serialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<IngredientLine>,
}
