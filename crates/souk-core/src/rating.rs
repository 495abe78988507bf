//! Half-star rating breakdown for listing cards.

pub const MAX_STARS: u8 = 5;

/// How many full, half, and empty stars a rating renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Builds the star breakdown for `rating`, clamped into `[0, 5]`.
    /// `NaN` is treated as `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rating(rating: f64) -> Self {
        let rating = clamp_rating(rating);
        let full = rating.floor() as u8;
        let half = full < MAX_STARS && rating - f64::from(full) >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }
}

/// Clamps a rating into `[0, 5]`, mapping `NaN` to `0`.
#[must_use]
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, f64::from(MAX_STARS))
}

/// One-decimal rating label, e.g. `"4.5"`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", clamp_rating(rating))
}
