use crate::models::listing::{ListingInput, PriceStatus};

const UNFURNISHED_DISCOUNT: f64 = 0.90;

// (minimum age, multiplier), checked top-down; only the first match applies.
const AGE_TIERS: [(i32, f64); 4] = [(40, 0.80), (30, 0.85), (20, 0.90), (10, 0.95)];

/// Applies the post-model corrections, furnishing first, then age.
///
/// An absent `furnished` counts as furnished and skips the discount. Age
/// tiers are non-cumulative: a 45-year-old listing gets the 0.80 factor
/// only, never stacked with the lower tiers.
pub fn adjust_price(estimate: f64, listing: &ListingInput, reference_year: i32) -> f64 {
    let mut adjusted = estimate;

    if !listing.furnished {
        adjusted *= UNFURNISHED_DISCOUNT;
    }

    if let Some(year_built) = listing.year_built {
        let age = reference_year - year_built;
        for (min_age, factor) in AGE_TIERS {
            if age >= min_age {
                adjusted *= factor;
                break;
            }
        }
    }

    adjusted
}

/// Compares the asking price to the adjusted estimate under a fractional
/// tolerance band. Both comparisons are strict, so an asking price exactly
/// on a boundary counts as fairly priced.
pub fn classify(asking_price: f64, predicted_price: f64, margin: f64) -> PriceStatus {
    let margin_value = predicted_price * margin;
    if asking_price < predicted_price - margin_value {
        PriceStatus::Underpriced
    } else if asking_price > predicted_price + margin_value {
        PriceStatus::Overpriced
    } else {
        PriceStatus::FairlyPriced
    }
}
