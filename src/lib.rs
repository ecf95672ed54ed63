pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod pricing;
pub mod reporting;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::amount::*;
pub use domain::model::catalog::*;
pub use domain::model::cost::*;
pub use domain::model::ingredient::*;
pub use infrastructure::*;
pub use pricing::*;
