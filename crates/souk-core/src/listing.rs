//! Source records supplied by the local catalog and the unified view built
//! from them.
//!
//! A listing is either a physical [`Product`] or a bookable [`Service`].
//! Both carry a title, a price, and the identity of whoever sells them;
//! the remaining fields are variant-specific and stay reachable through
//! [`UnifiedListing::as_product`] / [`UnifiedListing::as_service`].

use serde::{Deserialize, Serialize};

use crate::price::{DisplayPrice, PriceValue};

/// Seller of a physical product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Person or business offering a service, with the profile details only
/// services expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent prices unify to `0`.
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock_status: Option<StockStatus>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub vendor: VendorRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent prices unify to `0`.
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Typical session length, e.g. `"2 hours"`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Whether the service can be delivered remotely.
    #[serde(default)]
    pub remote: bool,
    /// Radius in kilometres the provider travels for on-site work.
    #[serde(default)]
    pub service_radius_km: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub provider: ProviderProfile,
}

/// A raw catalog record, tagged by variant.
///
/// Serialized as `{"kind": "product", ...}` or `{"kind": "service", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingSource {
    Product(Product),
    Service(Service),
}

impl ListingSource {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            ListingSource::Product(p) => &p.id,
            ListingSource::Service(s) => &s.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            ListingSource::Product(p) => &p.title,
            ListingSource::Service(s) => &s.title,
        }
    }

    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(self, ListingSource::Service(_))
    }
}

/// Canonical view of any sellable item, derived from exactly one
/// [`ListingSource`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifiedListing {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: DisplayPrice,
    pub is_service: bool,
    /// Always within `[0, 5]`; `0` when the source has no rating.
    pub rating: f64,
    pub rating_count: u32,
    /// Display-ordered; the first tags are shown first.
    pub tags: Vec<String>,
    pub image: Option<String>,
    /// Vendor name for products, provider name for services.
    pub seller_name: String,
    pub location: Option<String>,
    pub original: ListingSource,
}

impl UnifiedListing {
    #[must_use]
    pub fn as_product(&self) -> Option<&Product> {
        match &self.original {
            ListingSource::Product(p) => Some(p),
            ListingSource::Service(_) => None,
        }
    }

    #[must_use]
    pub fn as_service(&self) -> Option<&Service> {
        match &self.original {
            ListingSource::Service(s) => Some(s),
            ListingSource::Product(_) => None,
        }
    }
}
