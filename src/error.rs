use thiserror::Error;

/// Failure classes of a single listing evaluation.
///
/// None of these are recovered internally; a malformed record is a
/// deterministic failure and the caller gets the offending field/value
/// instead of a best-effort price.
#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error("invalid input field {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("{field} value {value:?} is not in the encoder vocabulary")]
    UnknownCategory { field: &'static str, value: String },

    #[error("city id {city_id} is missing from the average price table")]
    MissingCityAverage { city_id: i64 },

    #[error("model rejected the feature vector: {0}")]
    ModelInvocation(String),
}
