//! Unification of [`ListingSource`] records into [`UnifiedListing`] views.
//!
//! The transform is pure: the same source always yields the same listing.
//! Prices go through [`crate::price::normalize`] even when absent (as `0`)
//! so every listing carries the same price shape.

use crate::error::CoreError;
use crate::listing::{ListingSource, Product, Service, UnifiedListing};
use crate::price::{normalize, PriceValue};
use crate::rating::clamp_rating;

/// Unifies a single source record.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRange`] or [`CoreError::InvalidPrice`] if the
/// record's price is malformed.
pub fn unify(source: ListingSource) -> Result<UnifiedListing, CoreError> {
    match &source {
        ListingSource::Product(product) => unify_product(product, source.clone()),
        ListingSource::Service(service) => unify_service(service, source.clone()),
    }
}

/// Unifies every record, failing on the first malformed price.
///
/// # Errors
///
/// See [`unify`].
pub fn unify_all<I>(sources: I) -> Result<Vec<UnifiedListing>, CoreError>
where
    I: IntoIterator<Item = ListingSource>,
{
    sources.into_iter().map(unify).collect()
}

/// Finds the record with `id` and unifies it.
///
/// # Errors
///
/// Returns [`CoreError::ListingNotFound`] when no record carries `id`, or a
/// price error from [`unify`].
pub fn find_listing(sources: &[ListingSource], id: &str) -> Result<UnifiedListing, CoreError> {
    let source = sources
        .iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| CoreError::ListingNotFound { id: id.to_owned() })?;
    unify(source.clone())
}

fn unify_product(product: &Product, original: ListingSource) -> Result<UnifiedListing, CoreError> {
    let price = normalize(product.price.unwrap_or_default())?;

    // Category leads so cards group visually by it.
    let mut tags = Vec::with_capacity(product.tags.len() + 1);
    if let Some(category) = product.category.as_ref().filter(|c| !c.is_empty()) {
        tags.push(category.clone());
    }
    push_unique(&mut tags, &product.tags);

    Ok(UnifiedListing {
        id: product.id.clone(),
        title: product.title.clone(),
        description: product.description.clone(),
        price,
        is_service: false,
        rating: clamp_rating(product.rating.unwrap_or(0.0)),
        rating_count: product.rating_count.unwrap_or(0),
        tags,
        image: product.images.first().cloned(),
        seller_name: product.vendor.name.clone(),
        location: product.vendor.location.clone(),
        original,
    })
}

fn unify_service(service: &Service, original: ListingSource) -> Result<UnifiedListing, CoreError> {
    let price = normalize(service.price.unwrap_or(PriceValue::Scalar(0.0)))?;

    let mut tags = Vec::with_capacity(service.tags.len() + 1);
    push_unique(&mut tags, &service.tags);
    if service.remote {
        push_unique(&mut tags, &["Remote".to_owned()]);
    }

    Ok(UnifiedListing {
        id: service.id.clone(),
        title: service.title.clone(),
        description: service.description.clone(),
        price,
        is_service: true,
        rating: clamp_rating(service.rating.unwrap_or(0.0)),
        rating_count: service.rating_count.unwrap_or(0),
        tags,
        image: service.images.first().cloned(),
        seller_name: service.provider.name.clone(),
        location: service.provider.location.clone(),
        original,
    })
}

fn push_unique(tags: &mut Vec<String>, extra: &[String]) {
    for tag in extra {
        if !tag.is_empty() && !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.clone());
        }
    }
}

#[cfg(test)]
#[path = "unify_test.rs"]
mod tests;
