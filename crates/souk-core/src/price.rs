//! Price normalization.
//!
//! Source records carry a price either as a single number or as a
//! `{min, max}` range. [`normalize`] validates that shape and collapses a
//! degenerate range (`min == max`) into a single value so that it formats
//! exactly like the equivalent scalar.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Raw price as it appears on a source record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Scalar(f64),
    Range { min: f64, max: f64 },
}

impl Default for PriceValue {
    fn default() -> Self {
        PriceValue::Scalar(0.0)
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        PriceValue::Scalar(value)
    }
}

/// A validated price, ready for comparison and display.
///
/// Callers choose the range rendering: [`DisplayPrice::format`] for
/// `"min - max"`, [`DisplayPrice::format_from`] for `"from min"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayPrice {
    Single(f64),
    Range { min: f64, max: f64 },
}

impl DisplayPrice {
    /// The lower bound, used when ranking offers by price.
    #[must_use]
    pub fn lowest(&self) -> f64 {
        match *self {
            DisplayPrice::Single(value) => value,
            DisplayPrice::Range { min, .. } => min,
        }
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, DisplayPrice::Range { .. })
    }

    /// Renders `"$12.99"` or `"$10.00 - $20.00"`.
    #[must_use]
    pub fn format(&self, symbol: &str) -> String {
        match *self {
            DisplayPrice::Single(value) => format!("{symbol}{value:.2}"),
            DisplayPrice::Range { min, max } => {
                format!("{symbol}{min:.2} - {symbol}{max:.2}")
            }
        }
    }

    /// Renders `"from $10.00"` for a range; single values render as
    /// [`DisplayPrice::format`] does.
    #[must_use]
    pub fn format_from(&self, symbol: &str) -> String {
        match *self {
            DisplayPrice::Single(_) => self.format(symbol),
            DisplayPrice::Range { min, .. } => format!("from {symbol}{min:.2}"),
        }
    }
}

impl std::fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format("$"))
    }
}

/// Normalizes a [`PriceValue`] into a [`DisplayPrice`].
///
/// # Errors
///
/// - [`CoreError::InvalidRange`] when `min > max`.
/// - [`CoreError::InvalidPrice`] when any value is negative or not finite.
#[allow(clippy::float_cmp)]
pub fn normalize(price: PriceValue) -> Result<DisplayPrice, CoreError> {
    match price {
        PriceValue::Scalar(value) => Ok(DisplayPrice::Single(check_value(value)?)),
        PriceValue::Range { min, max } => {
            let min = check_value(min)?;
            let max = check_value(max)?;
            if min > max {
                return Err(CoreError::InvalidRange { min, max });
            }
            if min == max {
                Ok(DisplayPrice::Single(min))
            } else {
                Ok(DisplayPrice::Range { min, max })
            }
        }
    }
}

fn check_value(value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidPrice(value));
    }
    // -0.0 passes the sign check but would render as "-0.00".
    Ok(value + 0.0)
}
