//! Batch tooling on top of the cost engine: estimating many recipes and auditing catalog coverage.

pub mod audit;
pub mod batch;

pub use audit::CatalogAudit;
pub use batch::{BatchEstimator, BatchSummary, RecipeEstimate};
