//! External marketplace comparison for souk.
//!
//! A query flows through the [`Debouncer`], then through
//! [`ComparisonEngine::search`] against a [`MarketplaceProvider`], and the
//! external results are weighed against local listings by [`compare`].

pub mod catalog;
pub mod compare;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod platform;
pub mod provider;
pub mod types;

mod retry;

pub use catalog::default_catalog;
pub use compare::compare;
pub use debounce::Debouncer;
pub use engine::{ComparisonEngine, PendingSearch};
pub use error::SearchError;
pub use platform::{Platform, PlatformDescriptor};
pub use provider::{match_catalog, MarketplaceProvider, MockMarketplace};
pub use retry::RetryPolicy;
pub use types::{ComparisonResult, ExternalProduct};
