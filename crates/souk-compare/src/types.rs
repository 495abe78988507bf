use serde::{Deserialize, Serialize};
use souk_core::PriceValue;

use crate::platform::Platform;

/// A listing offered on an external marketplace. Built fresh per search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalProduct {
    pub id: String,
    pub title: String,
    pub price: PriceValue,
    pub platform: Platform,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Within `[0, 5]`.
    pub rating: f64,
    pub reviews: u32,
    /// e.g. `"Free shipping"`, `"$4.99 shipping"`.
    pub shipping: String,
    /// e.g. `"3-5 days"`.
    pub delivery_time: String,
    /// Lowercase tag consulted by fallback rules, e.g. `"electronics"`.
    pub category: String,
}

/// Local vs. external comparison for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub local_advantages: Vec<String>,
    pub external_advantages: Vec<String>,
    /// Empty unless both local and external results exist.
    pub recommendations: Vec<String>,
}
