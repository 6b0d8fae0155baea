//! E-commerce catalogue: categories, sub-categories, products, and the legacy
//! `/review` product endpoints.

use dinedesk_api_models::{
    Category, CategoryInput, CreatedId, NewProduct, PageRequest, Product, ProductCount,
    ProductFilter, ProductIds, ProductPatch, Review, SubCategory, SubCategoryInput,
};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

/// Empty filter values are dropped, like unset ones.
fn filter_value(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn with_filter(endpoint: Endpoint, filter: &ProductFilter) -> Endpoint {
    endpoint
        .query_opt("category_id", filter_value(filter.category_id.as_ref()))
        .query_opt("subcategory_id", filter_value(filter.subcategory_id.as_ref()))
}

// ----------------------------------------------------------------------------
// Categories
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Create a category and return its id.
    pub async fn create_new_category(&self, body: &CategoryInput) -> ApiResult<String> {
        let created: CreatedId = self
            .send(
                Endpoint::post("/category", "create category"),
                Payload::json(body)?,
            )
            .await?;
        Ok(created.id)
    }

    /// Every category.
    pub async fn get_all_categories(&self) -> ApiResult<Vec<Category>> {
        self.send(Endpoint::get("/category", "get categories"), Payload::Empty)
            .await
    }

    /// One category.
    pub async fn get_category_by_id(&self, id: &str) -> ApiResult<Category> {
        self.send(
            Endpoint::get(format!("/category/{}", segment(id)), "get category by id"),
            Payload::Empty,
        )
        .await
    }

    /// Rename a category or replace its images.
    pub async fn update_category(&self, id: &str, body: &CategoryInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(format!("/category/{}", segment(id)), "update category"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a category.
    pub async fn delete_category(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/category/{}", segment(id)), "delete category"),
            Payload::Empty,
        )
        .await
    }
}

// ----------------------------------------------------------------------------
// Sub-categories
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Create a sub-category and return its id.
    pub async fn create_new_sub_category(&self, body: &SubCategoryInput) -> ApiResult<String> {
        let created: CreatedId = self
            .send(
                Endpoint::post("/subcategory", "create subcategory"),
                Payload::json(body)?,
            )
            .await?;
        Ok(created.id)
    }

    /// Every sub-category.
    pub async fn get_all_sub_categories(&self) -> ApiResult<Vec<SubCategory>> {
        self.send(
            Endpoint::get("/subcategory", "get subcategories"),
            Payload::Empty,
        )
        .await
    }

    /// One sub-category.
    pub async fn get_sub_category_by_id(&self, id: &str) -> ApiResult<SubCategory> {
        self.send(
            Endpoint::get(format!("/subcategory/{}", segment(id)), "get subcategory by id"),
            Payload::Empty,
        )
        .await
    }

    /// Sub-categories under a category.
    pub async fn get_sub_categories_by_category_id(
        &self,
        category_id: &str,
    ) -> ApiResult<Vec<SubCategory>> {
        self.send(
            Endpoint::get(
                format!("/subcategory/c/{}", segment(category_id)),
                "get subcategories by category id",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Update a sub-category.
    pub async fn update_sub_category(&self, id: &str, body: &SubCategoryInput) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(
                format!("/subcategory/{}", segment(id)),
                "update subcategory",
            ),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a sub-category.
    pub async fn delete_sub_category(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(
                format!("/subcategory/{}", segment(id)),
                "delete subcategory",
            ),
            Payload::Empty,
        )
        .await
    }
}

// ----------------------------------------------------------------------------
// Products
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Create a product and return its id.
    pub async fn create_product(&self, body: &NewProduct) -> ApiResult<String> {
        let created: CreatedId = self
            .send(
                Endpoint::post("/product", "create product"),
                Payload::json(body)?,
            )
            .await?;
        Ok(created.id)
    }

    /// Apply a partial update; only the keys present in `patch` change.
    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(format!("/product/{}", segment(id)), "update product"),
            Payload::json(patch)?,
        )
        .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/product/{}", segment(id)), "delete product"),
            Payload::Empty,
        )
        .await
    }

    /// One page of products, optionally narrowed by category.
    ///
    /// Set filters come first, then `limit` and `page`.
    pub async fn get_products_by_category(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> ApiResult<Vec<Product>> {
        let endpoint = with_filter(Endpoint::get("/product", "get products"), filter)
            .query("limit", page.limit)
            .query("page", page.page);
        self.send(endpoint, Payload::Empty).await
    }

    /// First product in a category, if any.
    pub async fn get_product_by_category_id(
        &self,
        category_id: &str,
    ) -> ApiResult<Option<Product>> {
        self.send(
            Endpoint::get(
                format!("/product/c/{}", segment(category_id)),
                "get product",
            ),
            Payload::Empty,
        )
        .await
    }

    /// First product in a sub-category, if any.
    pub async fn get_product_by_sub_category_id(
        &self,
        subcategory_id: &str,
    ) -> ApiResult<Option<Product>> {
        self.send(
            Endpoint::get(
                format!("/product/s/{}", segment(subcategory_id)),
                "get product",
            ),
            Payload::Empty,
        )
        .await
    }

    /// One product, if it exists.
    pub async fn get_product_by_id(&self, id: &str) -> ApiResult<Option<Product>> {
        self.send(
            Endpoint::get(format!("/product/i/{}", segment(id)), "get product"),
            Payload::Empty,
        )
        .await
    }

    /// Number of products matching the filter.
    pub async fn get_product_count(&self, filter: &ProductFilter) -> ApiResult<u64> {
        let count: ProductCount = self
            .send(
                with_filter(
                    Endpoint::get("/product/count", "get product count"),
                    filter,
                ),
                Payload::Empty,
            )
            .await?;
        Ok(count.count)
    }

    /// Products for a list of ids.
    pub async fn get_products_by_ids(&self, ids: &[String]) -> ApiResult<Vec<Product>> {
        let body = ProductIds { ids: ids.to_vec() };
        self.send(
            Endpoint::post("/product/ids", "get products by ids"),
            Payload::json(&body)?,
        )
        .await
    }

    /// Reviews of a product through the legacy endpoint.
    pub async fn get_reviews_by_product_id(&self, product_id: &str) -> ApiResult<Vec<Review>> {
        self.send(
            Endpoint::get(
                format!("/review/p/{}", segment(product_id)),
                "get product reviews",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Delete a review through the legacy endpoint.
    pub async fn delete_review_by_id(&self, review_id: &str) -> ApiResult<Value> {
        self.send(
            Endpoint::delete(
                format!("/review/{}", segment(review_id)),
                "delete product review",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Average rating of a product through the legacy endpoint.
    pub async fn average_ratings_by_product_id(&self, product_id: &str) -> ApiResult<Value> {
        self.send(
            Endpoint::get(
                format!("/review/avg/p/{}", segment(product_id)),
                "get product average rating",
            ),
            Payload::Empty,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_are_skipped() {
        let filter = ProductFilter {
            category_id: Some("cat-1".into()),
            subcategory_id: Some(String::new()),
        };
        let endpoint = with_filter(Endpoint::get("/product/count", "count"), &filter);
        assert_eq!(endpoint.path_and_query(), "/product/count?category_id=cat-1");

        let endpoint = with_filter(
            Endpoint::get("/product/count", "count"),
            &ProductFilter::default(),
        );
        assert_eq!(endpoint.path_and_query(), "/product/count");
    }
}
