//! Discount coupons.

use dinedesk_api_models::{Coupon, CouponInput, CreatedId};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// Every coupon.
    pub async fn get_coupons(&self) -> ApiResult<Vec<Coupon>> {
        self.send(Endpoint::get("/coupon", "get coupons"), Payload::Empty)
            .await
    }

    /// One coupon.
    pub async fn get_coupon(&self, id: &str) -> ApiResult<Coupon> {
        self.send(
            Endpoint::get(format!("/coupon/{}", segment(id)), "get coupon"),
            Payload::Empty,
        )
        .await
    }

    /// Create a coupon and return its id.
    pub async fn create_coupon(&self, body: &CouponInput) -> ApiResult<String> {
        let created: CreatedId = self
            .send(
                Endpoint::post("/coupon", "create coupon"),
                Payload::json(body)?,
            )
            .await?;
        Ok(created.id)
    }

    /// Update a coupon.
    pub async fn update_coupon(&self, id: &str, body: &CouponInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(format!("/coupon/{}", segment(id)), "update coupon"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a coupon.
    pub async fn delete_coupon(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/coupon/{}", segment(id)), "delete coupon"),
            Payload::Empty,
        )
        .await
    }
}
