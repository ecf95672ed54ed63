pub mod amount;
pub mod catalog;
pub mod cost;
pub mod ingredient;
