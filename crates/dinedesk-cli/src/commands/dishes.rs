use crate::cli::{DishListArgs, OutputFormat};
use crate::client::{AppContext, CliResult};
use crate::output::{render_dish_categories, render_dish_list};

pub(crate) async fn handle_dish_list(
    ctx: &AppContext,
    args: DishListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let dishes = match args.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            ctx.api.get_dishes_by_category_id(category).await?
        }
        _ => ctx.api.get_dishes().await?,
    };
    render_dish_list(&dishes, format)
}

pub(crate) async fn handle_dish_categories(
    ctx: &AppContext,
    format: OutputFormat,
) -> CliResult<()> {
    let categories = ctx.api.get_dish_categories().await?;
    render_dish_categories(&categories, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use httpmock::prelude::*;
    use serde_json::json;

    fn dish_json() -> serde_json::Value {
        json!([{
            "id": "d-1",
            "name": "Paneer Tikka",
            "price": 320.0,
            "dish_category_id": "starters",
            "is_available": true,
            "is_non_veg": false
        }])
    }

    #[tokio::test]
    async fn dish_list_filters_by_category() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/dish/dishes/starters");
            then.status(200).json_body(dish_json());
        });

        let ctx = context_for(&server, Some("token"));
        handle_dish_list(
            &ctx,
            DishListArgs {
                category: Some("starters".to_string()),
            },
            OutputFormat::Table,
        )
        .await
        .expect("list succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn dish_list_without_filter_fetches_everything() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/dish/dishes");
            then.status(200).json_body(dish_json());
        });

        let ctx = context_for(&server, Some("token"));
        handle_dish_list(&ctx, DishListArgs::default(), OutputFormat::Json)
            .await
            .expect("list succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn dish_categories_render() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/dish/categories");
            then.status(200)
                .json_body(json!([{"id": "starters", "name": "Starters"}]));
        });

        let ctx = context_for(&server, Some("token"));
        handle_dish_categories(&ctx, OutputFormat::Table)
            .await
            .expect("categories load");
        mock.assert();
    }
}
