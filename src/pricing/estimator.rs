use crate::artifacts::RegressionModel;
use crate::error::EvaluateError;
use crate::pricing::features::FeatureVector;

/// Runs the trained model and undoes the log transform.
///
/// The model was fit on ln(price), so its raw output is exponentiated to get
/// a currency value. Always non-negative.
pub fn estimate_price(
    model: &dyn RegressionModel,
    features: &FeatureVector,
) -> Result<f64, EvaluateError> {
    let log_price = model.predict(&features.to_model_input())?;
    Ok(log_price.exp())
}
