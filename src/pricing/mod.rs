pub mod adjustments;
pub mod estimator;
pub mod features;

use log::debug;

use crate::artifacts::Artifacts;
use crate::error::EvaluateError;
use crate::models::listing::{ListingInput, PriceStatusResult};

pub use features::{build_features, FeatureVector, FEATURE_NAMES};

/// Fractional tolerance band around the adjusted estimate.
pub const DEFAULT_MARGIN: f64 = 0.10;

/// Evaluates one listing end to end: feature derivation, model estimate,
/// furnishing/age corrections, then classification of the asking price.
///
/// Pure function of its inputs; `reference_year` is taken as a parameter so
/// results are reproducible regardless of when the evaluation runs. The
/// caller resolves the wall clock at the outermost boundary.
pub fn evaluate(
    artifacts: &Artifacts,
    listing: &ListingInput,
    margin: f64,
    reference_year: i32,
) -> Result<PriceStatusResult, EvaluateError> {
    let features = features::build_features(
        listing,
        &artifacts.city_encoder,
        &artifacts.property_type_encoder,
        &artifacts.city_prices,
    )?;
    debug!(
        "encoded city={} property_type={}",
        features.city, features.property_type
    );

    let estimate = estimator::estimate_price(artifacts.model.as_ref(), &features)?;
    debug!("raw estimate {estimate:.2}");

    let predicted_price = adjustments::adjust_price(estimate, listing, reference_year);
    debug!("adjusted estimate {predicted_price:.2}");

    let price_status = adjustments::classify(listing.price, predicted_price, margin);

    Ok(PriceStatusResult {
        predicted_price,
        price_status,
    })
}
