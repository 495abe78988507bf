//! Buy-here vs. buy-there recommendation.

use souk_core::{normalize, DisplayPrice, UnifiedListing};

use crate::types::{ComparisonResult, ExternalProduct};

const LOCAL_ADVANTAGES: &[&str] = &[
    "Support local businesses and independent sellers",
    "Faster delivery from sellers near you",
    "Inspect items or meet providers in person",
    "Direct communication and simpler returns",
];

const EXTERNAL_ADVANTAGES: &[&str] = &[
    "Wider product selection",
    "Competitive international pricing",
    "Established buyer protection programs",
    "Large volume of customer reviews",
];

const SHIPPING_ADVICE: &str =
    "Factor in shipping time and return policies before buying from an external platform.";

/// Compares local and external results for the same query.
///
/// Advantages are constant. Recommendations are produced only when both
/// sides are non-empty, and then always include at least the shipping
/// advisory line.
#[must_use]
pub fn compare(local: &[UnifiedListing], external: &[ExternalProduct]) -> ComparisonResult {
    let recommendations = if local.is_empty() || external.is_empty() {
        Vec::new()
    } else {
        recommend(local, external)
    };

    ComparisonResult {
        local_advantages: to_strings(LOCAL_ADVANTAGES),
        external_advantages: to_strings(EXTERNAL_ADVANTAGES),
        recommendations,
    }
}

fn recommend(local: &[UnifiedListing], external: &[ExternalProduct]) -> Vec<String> {
    let mut lines = Vec::new();

    let best_local = local
        .iter()
        .min_by(|a, b| a.price.lowest().total_cmp(&b.price.lowest()));
    let best_external = external
        .iter()
        .filter_map(|p| match normalize(p.price) {
            Ok(price) => Some((p, price)),
            Err(err) => {
                tracing::warn!(id = %p.id, error = %err, "skipping external item with malformed price");
                None
            }
        })
        .min_by(|(_, a), (_, b)| a.lowest().total_cmp(&b.lowest()));

    if let (Some(local), Some((ext, ext_price))) = (best_local, best_external) {
        lines.push(price_line(local, ext, ext_price));
    }

    if let Some(top) = external
        .iter()
        .max_by(|a, b| a.rating.total_cmp(&b.rating))
    {
        lines.push(format!(
            "Top-rated external option: \"{}\" on {} ({} stars from {} reviews).",
            top.title,
            top.platform,
            souk_core::format_rating(top.rating),
            top.reviews
        ));
    }

    lines.push(SHIPPING_ADVICE.to_owned());
    lines
}

fn price_line(local: &UnifiedListing, ext: &ExternalProduct, ext_price: DisplayPrice) -> String {
    let local_low = local.price.lowest();
    let ext_low = ext_price.lowest();
    if local_low <= ext_low {
        format!(
            "Buy local: \"{}\" at {} is the better deal (cheapest external is {} on {}).",
            local.title,
            local.price.format_from("$"),
            ext_price.format_from("$"),
            ext.platform
        )
    } else {
        let saving = DisplayPrice::Single(local_low - ext_low).format("$");
        format!(
            "\"{}\" on {} is {} cheaper than the best local offer \"{}\" ({}).",
            ext.title,
            ext.platform,
            saving,
            local.title,
            local.price.format_from("$")
        )
    }
}

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_owned()).collect()
}
