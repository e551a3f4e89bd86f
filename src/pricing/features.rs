use crate::artifacts::{CityPriceTable, LabelEncoder};
use crate::error::EvaluateError;
use crate::models::listing::ListingInput;

/// Feature order the model was fit on. A reordering here silently corrupts
/// every prediction, so `to_model_input` is the only place that flattens
/// the vector.
pub const FEATURE_NAMES: [&str; 11] = [
    "city",
    "square_meter",
    "property_type",
    "bedrooms",
    "bathrooms",
    "living_rooms",
    "balconies",
    "parking_spaces",
    "city_avg_price_per_m2",
    "bedrooms_per_m2",
    "bathrooms_per_m2",
];

/// Engineered inputs for one listing, named to match the training schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub city: i64,
    pub square_meter: f64,
    pub property_type: i64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub living_rooms: u32,
    pub balconies: u32,
    pub parking_spaces: u32,
    pub city_avg_price_per_m2: f64,
    pub bedrooms_per_m2: f64,
    pub bathrooms_per_m2: f64,
}

impl FeatureVector {
    pub fn to_model_input(&self) -> [f64; 11] {
        [
            self.city as f64,
            self.square_meter,
            self.property_type as f64,
            self.bedrooms as f64,
            self.bathrooms as f64,
            self.living_rooms as f64,
            self.balconies as f64,
            self.parking_spaces as f64,
            self.city_avg_price_per_m2,
            self.bedrooms_per_m2,
            self.bathrooms_per_m2,
        ]
    }
}

/// Derives the model's feature vector from a validated listing.
///
/// The city average is looked up by the *encoded* city id, so the table and
/// the encoder must come from the same training run.
pub fn build_features(
    listing: &ListingInput,
    city_encoder: &LabelEncoder,
    property_type_encoder: &LabelEncoder,
    city_prices: &CityPriceTable,
) -> Result<FeatureVector, EvaluateError> {
    listing.validate()?;

    let city = city_encoder.encode("city", &listing.city)?;
    let property_type = property_type_encoder.encode("property_type", &listing.property_type)?;
    let city_avg_price_per_m2 = city_prices.avg_price_per_m2(city)?;

    // square_meter > 0 is guaranteed by validate() above
    Ok(FeatureVector {
        city,
        square_meter: listing.square_meter,
        property_type,
        bedrooms: listing.bedrooms,
        bathrooms: listing.bathrooms,
        living_rooms: listing.living_rooms,
        balconies: listing.balconies,
        parking_spaces: listing.parking_spaces,
        city_avg_price_per_m2,
        bedrooms_per_m2: listing.bedrooms as f64 / listing.square_meter,
        bathrooms_per_m2: listing.bathrooms as f64 / listing.square_meter,
    })
}
