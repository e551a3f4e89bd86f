use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

use crate::config::Config;
use crate::error::EvaluateError;

/// Closed-vocabulary mapping from a categorical string to its integer code.
///
/// The code is the position of the value in the training-time class list,
/// so the serialized artifact must carry the classes in their original
/// order. Unseen values raise instead of defaulting to a wrong code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> LabelEncoder {
        LabelEncoder { classes }
    }

    pub fn encode(&self, field: &'static str, value: &str) -> Result<i64, EvaluateError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as i64)
            .ok_or_else(|| EvaluateError::UnknownCategory {
                field,
                value: value.to_string(),
            })
    }
}

/// Average price per m2 keyed by encoded city id. Built from the same
/// encoder as the city feature at training time; a missing id means the
/// artifacts are out of sync with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityPriceTable {
    by_city_id: HashMap<i64, f64>,
}

impl CityPriceTable {
    pub fn new(by_city_id: HashMap<i64, f64>) -> CityPriceTable {
        CityPriceTable { by_city_id }
    }

    pub fn avg_price_per_m2(&self, city_id: i64) -> Result<f64, EvaluateError> {
        self.by_city_id
            .get(&city_id)
            .copied()
            .ok_or(EvaluateError::MissingCityAverage { city_id })
    }
}

/// The trained regression function: feature vector in, log-scale price out.
///
/// Kept behind a trait so the pipeline can be exercised with deterministic
/// stubs instead of a real trained artifact.
pub trait RegressionModel {
    fn predict(&self, features: &[f64]) -> Result<f64, EvaluateError>;
}

/// Linear model over the engineered feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl RegressionModel for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, EvaluateError> {
        if features.len() != self.coefficients.len() {
            return Err(EvaluateError::ModelInvocation(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }
        let weighted: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, f)| c * f)
            .sum();
        Ok(self.intercept + weighted)
    }
}

/// Everything the pipeline consumes, loaded once at startup and read-only
/// thereafter.
pub struct Artifacts {
    pub model: Box<dyn RegressionModel + Send + Sync>,
    pub city_encoder: LabelEncoder,
    pub property_type_encoder: LabelEncoder,
    pub city_prices: CityPriceTable,
}

impl Artifacts {
    pub fn new(
        model: Box<dyn RegressionModel + Send + Sync>,
        city_encoder: LabelEncoder,
        property_type_encoder: LabelEncoder,
        city_prices: CityPriceTable,
    ) -> Artifacts {
        Artifacts {
            model,
            city_encoder,
            property_type_encoder,
            city_prices,
        }
    }

    pub fn load(config: &Config) -> Result<Artifacts> {
        let model: LinearModel = read_json(&config.model_path).context("loading model")?;
        let city_encoder: LabelEncoder =
            read_json(&config.city_encoder_path).context("loading city encoder")?;
        let property_type_encoder: LabelEncoder =
            read_json(&config.property_type_encoder_path).context("loading property type encoder")?;
        let city_prices: CityPriceTable =
            read_json(&config.city_price_table_path).context("loading city price table")?;

        Ok(Artifacts::new(
            Box::new(model),
            city_encoder,
            property_type_encoder,
            city_prices,
        ))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
    let value = serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_codes_are_class_positions() {
        let encoder = LabelEncoder::new(vec![
            "Aley".to_string(),
            "Beirut".to_string(),
            "Tripoli".to_string(),
        ]);
        assert_eq!(encoder.encode("city", "Aley").unwrap(), 0);
        assert_eq!(encoder.encode("city", "Tripoli").unwrap(), 2);
    }

    #[test]
    fn encoder_rejects_unseen_value() {
        let encoder = LabelEncoder::new(vec!["apartment".to_string()]);
        let err = encoder.encode("property_type", "castle").unwrap_err();
        match err {
            EvaluateError::UnknownCategory { field, value } => {
                assert_eq!(field, "property_type");
                assert_eq!(value, "castle");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn price_table_reports_missing_id() {
        let table = CityPriceTable::new(HashMap::from([(0, 1500.0)]));
        assert_eq!(table.avg_price_per_m2(0).unwrap(), 1500.0);
        let err = table.avg_price_per_m2(7).unwrap_err();
        assert!(matches!(
            err,
            EvaluateError::MissingCityAverage { city_id: 7 }
        ));
    }

    #[test]
    fn linear_model_applies_intercept_and_weights() {
        let model = LinearModel {
            intercept: 1.0,
            coefficients: vec![2.0, 0.5],
        };
        assert_eq!(model.predict(&[3.0, 4.0]).unwrap(), 9.0);
    }

    #[test]
    fn linear_model_rejects_wrong_vector_length() {
        let model = LinearModel {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0, 1.0],
        };
        let err = model.predict(&[1.0]).unwrap_err();
        assert!(matches!(err, EvaluateError::ModelInvocation(_)));
    }

    #[test]
    fn price_table_parses_from_json_object() {
        let table: CityPriceTable = serde_json::from_str(r#"{"0": 1500.0, "3": 2250.5}"#).unwrap();
        assert_eq!(table.avg_price_per_m2(3).unwrap(), 2250.5);
    }
}
