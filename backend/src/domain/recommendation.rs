//! Read-only projections for restaurant recommendations.
//!
//! Recommendations are computed elsewhere; this module only describes what a
//! recommendation looks like once it reaches an adapter.

use std::fmt;

/// Identifier acknowledging a submitted recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestaurantRecommendationRequestId(i64);

impl RestaurantRecommendationRequestId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RestaurantRecommendationRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Restaurant suggested to the user for a recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedRestaurant {
    /// Restaurant identifier.
    pub restaurant_id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Cuisine category, e.g. `korean`.
    pub category: String,
    /// Average review score.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub review_count: u32,
    /// Distance from the requested location, in meters.
    pub distance_in_meters: f64,
    /// Photo URLs, in display order.
    pub image_urls: Vec<String>,
}

/// Restaurant the user kept after reviewing the suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRecommendationResult {
    /// Recommendation entry the user selected.
    pub restaurant_recommendation_id: i64,
    /// The recommended restaurant.
    pub restaurant: RecommendedRestaurant,
}
