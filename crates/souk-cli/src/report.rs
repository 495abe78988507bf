//! Plain-text rendering for the terminal.

use souk_compare::{ComparisonResult, ExternalProduct, Platform};
use souk_core::{
    find_listing, format_rating, ErrorState, ListingSource, StarRating, UnifiedListing,
};

pub(crate) fn print_platforms() {
    println!("External platforms:");
    for platform in Platform::all() {
        let d = platform.descriptor();
        println!("  {:<11} {}{}", d.name, d.base_url, d.search_path);
    }
}

pub(crate) fn print_queries<I>(heading: &str, queries: I)
where
    I: IntoIterator<Item = String>,
{
    println!("{heading}:");
    let mut any = false;
    for (i, query) in queries.into_iter().enumerate() {
        println!("  {}. {query}", i + 1);
        any = true;
    }
    if !any {
        println!("  (none)");
    }
}

pub(crate) fn print_error(state: &ErrorState) {
    let hint = if state.is_retryable() {
        " (try again)"
    } else {
        ""
    };
    eprintln!("error [{}]: {}{hint}", state.kind.as_str(), state.message);
}

pub(crate) fn print_listing_lookup(sources: &[ListingSource], id: &str) {
    match find_listing(sources, id) {
        Ok(listing) => print_listing_detail(&listing),
        Err(err) => print_error(&ErrorState::from(&err)),
    }
}

pub(crate) fn stars(rating: f64) -> String {
    let s = StarRating::from_rating(rating);
    format!(
        "{}{}{}",
        "*".repeat(usize::from(s.full)),
        if s.half { "+" } else { "" },
        ".".repeat(usize::from(s.empty))
    )
}

fn listing_line(listing: &UnifiedListing) -> String {
    let kind = if listing.is_service { "service" } else { "product" };
    format!(
        "[{kind}] {} - {} by {} {} {} ({})",
        listing.title,
        listing.price.format_from("$"),
        listing.seller_name,
        stars(listing.rating),
        format_rating(listing.rating),
        listing.rating_count
    )
}

fn print_listing_detail(listing: &UnifiedListing) {
    println!("{}", listing_line(listing));
    if !listing.tags.is_empty() {
        println!("  tags: {}", listing.tags.join(", "));
    }
    if let Some(description) = &listing.description {
        println!("  {description}");
    }
    if let Some(product) = listing.as_product() {
        if let Some(brand) = &product.brand {
            println!("  brand: {brand}");
        }
        if let Some(status) = product.stock_status {
            println!("  stock: {status:?}");
        }
    }
    if let Some(service) = listing.as_service() {
        if let Some(bio) = &service.provider.bio {
            println!("  about: {bio}");
        }
        if !service.provider.certifications.is_empty() {
            println!("  certified: {}", service.provider.certifications.join(", "));
        }
        if !service.provider.languages.is_empty() {
            println!("  languages: {}", service.provider.languages.join(", "));
        }
        if let Some(radius) = service.service_radius_km {
            println!("  serves within {radius} km");
        }
    }
}

pub(crate) fn print_comparison(
    query: &str,
    local: &[UnifiedListing],
    external: &[ExternalProduct],
    comparison: &ComparisonResult,
) {
    println!("Results for \"{query}\"");

    println!("\nLocal listings ({}):", local.len());
    for listing in local {
        println!("  {}", listing_line(listing));
    }

    println!("\nExternal offers ({}):", external.len());
    for offer in external {
        let price = souk_core::normalize(offer.price)
            .map_or_else(|_| "price unavailable".to_owned(), |p| p.format_from("$"));
        println!(
            "  [{}] {} - {price} {} {} ({} reviews), {}, {}",
            offer.platform,
            offer.title,
            stars(offer.rating),
            format_rating(offer.rating),
            offer.reviews,
            offer.shipping,
            offer.delivery_time
        );
    }

    println!("\nWhy buy local:");
    for line in &comparison.local_advantages {
        println!("  - {line}");
    }
    println!("Why buy external:");
    for line in &comparison.external_advantages {
        println!("  - {line}");
    }
    if !comparison.recommendations.is_empty() {
        println!("Recommendations:");
        for line in &comparison.recommendations {
            println!("  - {line}");
        }
    }
}
