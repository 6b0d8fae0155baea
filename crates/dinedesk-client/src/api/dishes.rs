//! Dishes and dish categories.

use dinedesk_api_models::{Dish, DishCategory, DishCategoryInput, DishInput};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// All dish categories.
    pub async fn get_dish_categories(&self) -> ApiResult<Vec<DishCategory>> {
        self.send(
            Endpoint::get("/dish/categories", "get dish categories"),
            Payload::Empty,
        )
        .await
    }

    /// One dish category.
    pub async fn get_dish_category_by_id(&self, id: &str) -> ApiResult<DishCategory> {
        self.send(
            Endpoint::get(
                format!("/dish/categories/{}", segment(id)),
                "get dish category by id",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Create a dish category.
    pub async fn create_dish_category(&self, body: &DishCategoryInput) -> ApiResult<DishCategory> {
        self.send(
            Endpoint::post("/dish/categories", "create dish category"),
            Payload::json(body)?,
        )
        .await
    }

    /// Partially update a dish category.
    pub async fn update_dish_category(&self, id: &str, body: &DishCategoryInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(
                format!("/dish/categories/{}", segment(id)),
                "update dish category",
            ),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a dish category.
    pub async fn delete_dish_category(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(
                format!("/dish/categories/{}", segment(id)),
                "delete dish category",
            ),
            Payload::Empty,
        )
        .await
    }

    /// One dish.
    pub async fn get_dish_by_id(&self, id: &str) -> ApiResult<Dish> {
        self.send(
            Endpoint::get(format!("/dish/i/{}", segment(id)), "get dish by id"),
            Payload::Empty,
        )
        .await
    }

    /// Every dish on the menu.
    pub async fn get_dishes(&self) -> ApiResult<Vec<Dish>> {
        self.send(Endpoint::get("/dish/dishes", "get dishes"), Payload::Empty)
            .await
    }

    /// Dishes belonging to a category.
    pub async fn get_dishes_by_category_id(&self, category_id: &str) -> ApiResult<Vec<Dish>> {
        self.send(
            Endpoint::get(
                format!("/dish/dishes/{}", segment(category_id)),
                "get dishes by category id",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Create a dish.
    pub async fn create_dish(&self, body: &DishInput) -> ApiResult<Dish> {
        self.send(Endpoint::post("/dish", "create dish"), Payload::json(body)?)
            .await
    }

    /// Partially update a dish.
    pub async fn update_dish(&self, id: &str, body: &DishInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(format!("/dish/{}", segment(id)), "update dish"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a dish.
    pub async fn delete_dish(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/dish/{}", segment(id)), "delete dish"),
            Payload::Empty,
        )
        .await
    }
}
