//! Domain model for the souk listing aggregation engine.
//!
//! Holds the pure transforms (price normalization, listing unification,
//! rating breakdown), the failure classification handed to presentation,
//! and configuration loading. Nothing here performs network I/O.

pub mod app_config;
pub mod config;
pub mod error;
pub mod error_state;
pub mod listing;
pub mod policy;
pub mod price;
pub mod rating;
pub mod unify;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use error_state::{ErrorKind, ErrorState};
pub use listing::{
    ListingSource, Product, ProviderProfile, Service, StockStatus, UnifiedListing, VendorRef,
};
pub use policy::{load_fallback_policy, parse_fallback_policy, FallbackPolicy, FallbackRule};
pub use price::{normalize, DisplayPrice, PriceValue};
pub use rating::{format_rating, StarRating};
pub use unify::{find_listing, unify, unify_all};
