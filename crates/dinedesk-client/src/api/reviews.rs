//! Dish and product reviews.

use dinedesk_api_models::{AverageRating, Envelope, MessageResponse, NewReview, Review, ReviewPatch};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// Reviews left on a dish.
    pub async fn get_reviews_by_dish(&self, dish_id: &str) -> ApiResult<Envelope<Vec<Review>>> {
        self.send(
            Endpoint::get(
                format!("/reviews/d/{}", segment(dish_id)),
                "get reviews by dish",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Reviews left on a product.
    pub async fn get_reviews_by_product(
        &self,
        product_id: &str,
    ) -> ApiResult<Envelope<Vec<Review>>> {
        self.send(
            Endpoint::get(
                format!("/reviews/p/{}", segment(product_id)),
                "get reviews by product",
            ),
            Payload::Empty,
        )
        .await
    }

    /// One review.
    pub async fn get_review(&self, review_id: &str) -> ApiResult<Envelope<Review>> {
        self.send(
            Endpoint::get(format!("/reviews/{}", segment(review_id)), "get review"),
            Payload::Empty,
        )
        .await
    }

    /// Post a review.
    pub async fn create_review(&self, body: &NewReview) -> ApiResult<MessageResponse> {
        self.send(
            Endpoint::post("/reviews", "create review"),
            Payload::json(body)?,
        )
        .await
    }

    /// Edit a review.
    pub async fn update_review(
        &self,
        review_id: &str,
        body: &ReviewPatch,
    ) -> ApiResult<Envelope<Review>> {
        self.send(
            Endpoint::patch(format!("/reviews/{}", segment(review_id)), "update review"),
            Payload::json(body)?,
        )
        .await
    }

    /// Remove a review.
    pub async fn delete_review(&self, review_id: &str) -> ApiResult<MessageResponse> {
        self.send(
            Endpoint::delete(format!("/reviews/{}", segment(review_id)), "delete review"),
            Payload::Empty,
        )
        .await
    }

    /// Mean rating of a dish.
    pub async fn get_average_rating_for_dish(
        &self,
        dish_id: &str,
    ) -> ApiResult<Envelope<AverageRating>> {
        self.send(
            Endpoint::get(
                format!("/reviews/avg/d/{}", segment(dish_id)),
                "get average rating for dish",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Mean rating of a product.
    pub async fn get_average_rating_for_product(
        &self,
        product_id: &str,
    ) -> ApiResult<Envelope<AverageRating>> {
        self.send(
            Endpoint::get(
                format!("/reviews/avg/p/{}", segment(product_id)),
                "get average rating for product",
            ),
            Payload::Empty,
        )
        .await
    }
}
