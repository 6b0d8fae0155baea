//! Time-boxed sales over products or categories.

use dinedesk_api_models::{Sale, SaleInput};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// Every sale.
    pub async fn get_sales(&self) -> ApiResult<Vec<Sale>> {
        self.send(Endpoint::get("/sales", "get sales"), Payload::Empty)
            .await
    }

    /// One sale.
    pub async fn get_sale(&self, sale_id: &str) -> ApiResult<Sale> {
        self.send(
            Endpoint::get(format!("/sales/{}", segment(sale_id)), "get sale"),
            Payload::Empty,
        )
        .await
    }

    /// Products covered by a sale of the given type.
    pub async fn get_sale_products(&self, sale_type: &str, sale_id: &str) -> ApiResult<Value> {
        self.send(
            Endpoint::get(
                format!("/sales/{}/{}/products", segment(sale_type), segment(sale_id)),
                "get sale products",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Sales currently running over a product.
    pub async fn get_current_sales_over_product(&self, product_id: &str) -> ApiResult<Value> {
        self.send(
            Endpoint::get(
                format!("/sales/over/{}", segment(product_id)),
                "get current sales over product",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Create a sale.
    pub async fn create_sale(&self, body: &SaleInput) -> ApiResult<Sale> {
        self.send(Endpoint::post("/sales", "create sale"), Payload::json(body)?)
            .await
    }

    /// Update a sale.
    pub async fn update_sale(&self, sale_id: &str, body: &SaleInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(format!("/sales/{}", segment(sale_id)), "update sale"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a sale.
    pub async fn delete_sale(&self, sale_id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/sales/{}", segment(sale_id)), "delete sale"),
            Payload::Empty,
        )
        .await
    }
}
