//! Response bodies for the restaurant recommendation endpoints.
//!
//! Recommendations are produced elsewhere; this module fixes their JSON
//! contract. Field names are camelCase and `nextCursor` is always present,
//! `null` on the last page.

use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    RecommendedRestaurant, RestaurantRecommendationRequestId, RestaurantRecommendationResult,
};

/// Restaurant suggested for a recommendation request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedRestaurantBody {
    /// Restaurant identifier.
    #[schema(example = 1)]
    pub restaurant_id: i64,
    /// Display name.
    #[schema(example = "Gwangjang Market Bindaetteok")]
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Cuisine category.
    #[schema(example = "korean")]
    pub category: String,
    /// Average review score.
    #[schema(example = 4.5)]
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub review_count: u32,
    /// Distance from the requested location, in meters.
    #[schema(example = 350.0)]
    pub distance_in_meters: f64,
    /// Photo URLs, in display order.
    pub image_urls: Vec<String>,
}

impl From<RecommendedRestaurant> for RecommendedRestaurantBody {
    fn from(value: RecommendedRestaurant) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            name: value.name,
            description: value.description,
            address: value.address,
            category: value.category,
            rating: value.rating,
            review_count: value.review_count,
            distance_in_meters: value.distance_in_meters,
            image_urls: value.image_urls,
        }
    }
}

/// Restaurant kept by the user, tagged with its recommendation entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecommendationResultBody {
    /// Recommendation entry the user selected.
    pub restaurant_recommendation_id: i64,
    /// The recommended restaurant.
    pub restaurant: RecommendedRestaurantBody,
}

impl From<RestaurantRecommendationResult> for RestaurantRecommendationResultBody {
    fn from(value: RestaurantRecommendationResult) -> Self {
        Self {
            restaurant_recommendation_id: value.restaurant_recommendation_id,
            restaurant: value.restaurant.into(),
        }
    }
}

/// Acknowledges a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestRestaurantRecommendationResponse {
    /// Identifier for polling the request's results.
    #[schema(example = 17)]
    pub restaurant_recommendation_request_id: i64,
}

impl From<RestaurantRecommendationRequestId> for RequestRestaurantRecommendationResponse {
    fn from(value: RestaurantRecommendationRequestId) -> Self {
        Self {
            restaurant_recommendation_request_id: value.get(),
        }
    }
}

/// One page of recommended restaurants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRecommendedRestaurantsResponse {
    /// Restaurants on this page.
    pub recommended_restaurants: Vec<RecommendedRestaurantBody>,
    /// Opaque token for the next page; `null` when this is the last page.
    pub next_cursor: Option<String>,
}

impl From<Page<RecommendedRestaurant>> for ListRecommendedRestaurantsResponse {
    fn from(page: Page<RecommendedRestaurant>) -> Self {
        let (items, next_cursor) = page.into_parts();
        Self {
            recommended_restaurants: items.into_iter().map(Into::into).collect(),
            next_cursor,
        }
    }
}

/// Acknowledges a selection; always `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SelectRestaurantRecommendationsResponse {}

/// Restaurants the user selected for a recommendation request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GetRestaurantRecommendationResponse {
    /// Selected restaurants.
    pub results: Vec<RestaurantRecommendationResultBody>,
}

impl FromIterator<RestaurantRecommendationResult> for GetRestaurantRecommendationResponse {
    fn from_iter<I: IntoIterator<Item = RestaurantRecommendationResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().map(Into::into).collect(),
        }
    }
}
