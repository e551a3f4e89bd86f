use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;

/// One raw listing record, as handed to the pipeline entry point.
///
/// `furnished` defaults to true when absent, so an omitted field and an
/// explicit `true` are indistinguishable downstream. `year_built` absent
/// means no age adjustment.
#[derive(Debug, Deserialize, Clone)]
pub struct ListingInput {
    pub city: String,
    pub property_type: String,
    pub square_meter: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub living_rooms: u32,
    pub balconies: u32,
    pub parking_spaces: u32,
    #[serde(default = "default_furnished")]
    pub furnished: bool,
    #[serde(default)]
    pub year_built: Option<i32>,
    pub price: f64,
}

fn default_furnished() -> bool {
    true
}

impl ListingInput {
    pub fn from_json(raw: &str) -> Result<ListingInput, EvaluateError> {
        let listing: ListingInput =
            serde_json::from_str(raw).map_err(|e| EvaluateError::InvalidInput {
                field: "listing",
                reason: e.to_string(),
            })?;
        listing.validate()?;
        Ok(listing)
    }

    /// Rejects values the feature derivation cannot work with. The
    /// square_meter guard runs before any per-m2 division happens.
    pub fn validate(&self) -> Result<(), EvaluateError> {
        if !self.square_meter.is_finite() || self.square_meter <= 0.0 {
            return Err(EvaluateError::InvalidInput {
                field: "square_meter",
                reason: format!("must be a positive number, got {}", self.square_meter),
            });
        }
        if !self.price.is_finite() {
            return Err(EvaluateError::InvalidInput {
                field: "price",
                reason: format!("must be a finite number, got {}", self.price),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceStatus {
    Underpriced,
    Overpriced,
    #[serde(rename = "Fairly Priced")]
    FairlyPriced,
}

/// Final evaluation record, one per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceStatusResult {
    pub predicted_price: f64,
    pub price_status: PriceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_json() -> serde_json::Value {
        serde_json::json!({
            "city": "Beirut",
            "property_type": "apartment",
            "square_meter": 120.0,
            "bedrooms": 3,
            "bathrooms": 2,
            "living_rooms": 1,
            "balconies": 2,
            "parking_spaces": 1,
            "price": 250000.0
        })
    }

    #[test]
    fn furnished_defaults_to_true_when_absent() {
        let listing = ListingInput::from_json(&base_json().to_string()).unwrap();
        assert!(listing.furnished);
        assert_eq!(listing.year_built, None);
    }

    #[test]
    fn missing_required_field_is_an_input_error() {
        let mut json = base_json();
        json.as_object_mut().unwrap().remove("bedrooms");
        let err = ListingInput::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, EvaluateError::InvalidInput { .. }));
    }

    #[test]
    fn zero_square_meter_is_rejected() {
        let mut json = base_json();
        json["square_meter"] = serde_json::json!(0.0);
        let err = ListingInput::from_json(&json.to_string()).unwrap_err();
        match err {
            EvaluateError::InvalidInput { field, .. } => assert_eq!(field, "square_meter"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn price_status_serializes_with_space() {
        let result = PriceStatusResult {
            predicted_price: 235000.0,
            price_status: PriceStatus::FairlyPriced,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"Fairly Priced\""));
    }
}
