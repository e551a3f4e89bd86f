pub mod artifacts;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod pricing;

pub use artifacts::{Artifacts, CityPriceTable, LabelEncoder, LinearModel, RegressionModel};
pub use error::EvaluateError;
pub use models::listing::{ListingInput, PriceStatus, PriceStatusResult};
pub use pricing::{evaluate, DEFAULT_MARGIN};
