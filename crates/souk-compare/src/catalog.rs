//! Built-in catalog served by [`crate::provider::MockMarketplace`].
//!
//! Catalog order matters: it breaks ties and decides the prefix fallback.

use souk_core::PriceValue;

use crate::platform::Platform;
use crate::types::ExternalProduct;

struct Entry {
    id: &'static str,
    title: &'static str,
    price: PriceValue,
    platform: Platform,
    rating: f64,
    reviews: u32,
    shipping: &'static str,
    delivery_time: &'static str,
    category: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "jumia-001",
        title: "Wireless Bluetooth Headphones",
        price: PriceValue::Scalar(45.99),
        platform: Platform::Jumia,
        rating: 4.3,
        reviews: 1_287,
        shipping: "Free shipping",
        delivery_time: "2-4 days",
        category: "electronics",
    },
    Entry {
        id: "aliexpress-001",
        title: "Mechanical Gaming Keyboard RGB",
        price: PriceValue::Scalar(29.50),
        platform: Platform::Aliexpress,
        rating: 4.6,
        reviews: 5_402,
        shipping: "Free shipping",
        delivery_time: "15-30 days",
        category: "electronics",
    },
    Entry {
        id: "amazon-001",
        title: "Ergonomic Office Chair",
        price: PriceValue::Range {
            min: 119.99,
            max: 179.99,
        },
        platform: Platform::Amazon,
        rating: 4.4,
        reviews: 8_916,
        shipping: "$12.99 shipping",
        delivery_time: "5-8 days",
        category: "furniture",
    },
    Entry {
        id: "ebay-001",
        title: "Adjustable Standing Desk Converter",
        price: PriceValue::Scalar(89.00),
        platform: Platform::Ebay,
        rating: 4.1,
        reviews: 342,
        shipping: "$15.00 shipping",
        delivery_time: "7-10 days",
        category: "furniture",
    },
    Entry {
        id: "amazon-002",
        title: "65W USB-C Laptop Charger",
        price: PriceValue::Scalar(24.99),
        platform: Platform::Amazon,
        rating: 4.7,
        reviews: 12_054,
        shipping: "Free shipping",
        delivery_time: "3-5 days",
        category: "electronics",
    },
    Entry {
        id: "jumia-002",
        title: "5-Tier Wooden Bookshelf",
        price: PriceValue::Scalar(65.00),
        platform: Platform::Jumia,
        rating: 3.9,
        reviews: 211,
        shipping: "$8.00 shipping",
        delivery_time: "4-6 days",
        category: "furniture",
    },
    Entry {
        id: "aliexpress-002",
        title: "Smartphone Tripod Stand with Remote",
        price: PriceValue::Range {
            min: 8.99,
            max: 14.99,
        },
        platform: Platform::Aliexpress,
        rating: 4.2,
        reviews: 3_876,
        shipping: "Free shipping",
        delivery_time: "12-25 days",
        category: "electronics",
    },
    Entry {
        id: "ebay-002",
        title: "Vintage Leather Messenger Bag",
        price: PriceValue::Scalar(54.00),
        platform: Platform::Ebay,
        rating: 4.5,
        reviews: 96,
        shipping: "$9.50 shipping",
        delivery_time: "6-9 days",
        category: "fashion",
    },
];

/// The built-in catalog, freshly allocated.
#[must_use]
pub fn default_catalog() -> Vec<ExternalProduct> {
    ENTRIES
        .iter()
        .map(|e| ExternalProduct {
            id: e.id.to_owned(),
            title: e.title.to_owned(),
            price: e.price,
            platform: e.platform,
            url: e.platform.descriptor().search_url(e.title),
            image: None,
            rating: e.rating,
            reviews: e.reviews,
            shipping: e.shipping.to_owned(),
            delivery_time: e.delivery_time.to_owned(),
            category: e.category.to_owned(),
        })
        .collect()
}
