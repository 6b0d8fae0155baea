use crate::cli::{CouponCreateArgs, IdArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::forms::coupon::CouponModal;
use crate::output::{render_coupon, render_coupon_list};

pub(crate) async fn handle_coupon_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let coupons = ctx.api.get_coupons().await?;
    render_coupon_list(&coupons, format)
}

pub(crate) async fn handle_coupon_show(
    ctx: &AppContext,
    args: IdArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let coupon = ctx.api.get_coupon(&args.id).await?;
    render_coupon(&coupon, format)
}

pub(crate) async fn handle_coupon_create(
    ctx: &AppContext,
    args: CouponCreateArgs,
) -> CliResult<()> {
    let code = args.code.trim();
    if code.is_empty() {
        return Err(CliError::validation("coupon code must not be empty"));
    }

    let mut modal = CouponModal::open();
    let form = &mut modal.form;
    form.code = code.to_string();
    form.one_time_use = !args.reusable;
    form.total_uses = args.uses;
    form.expiry_date = args.expires;
    form.discount_type = args.discount_type;
    form.discount_amount = args.discount_amount;
    form.minimum_cart_value = args.min_cart_value;
    form.set_terms(&args.terms);

    let submitted = modal.submit(&ctx.api).await;
    tracing::debug!(modal_open = modal.is_open(), "coupon form submitted");
    let id = submitted?;
    println!("Coupon created (id: {id})");
    Ok(())
}

pub(crate) async fn handle_coupon_delete(ctx: &AppContext, args: IdArgs) -> CliResult<()> {
    ctx.api.delete_coupon(&args.id).await?;
    println!("Coupon deleted (id: {})", args.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use crate::forms::coupon::{DiscountType, UNLIMITED_USES};
    use httpmock::prelude::*;
    use serde_json::json;

    fn create_args() -> CouponCreateArgs {
        CouponCreateArgs {
            code: "FEAST".to_string(),
            reusable: false,
            uses: "unlimited".to_string(),
            expires: "2025-12-31".to_string(),
            discount_type: DiscountType::Amount,
            discount_amount: "150".to_string(),
            min_cart_value: "999".to_string(),
            terms: vec!["Valid on weekends.".to_string()],
        }
    }

    #[tokio::test]
    async fn coupon_create_posts_form_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/coupon")
                .header("authorization", "Bearer token")
                .json_body(json!({
                    "code": "FEAST",
                    "is_one_time": true,
                    "expires_on": "2025-12-31T00:00:00.000Z",
                    "no_of_uses": UNLIMITED_USES,
                    "meta_data": {
                        "discountType": "amount",
                        "discountAmount": "150",
                        "minimumCartValue": "999",
                        "terms": "[\"Valid on weekends.\"]"
                    }
                }));
            then.status(201).json_body(json!({"id": "c-42"}));
        });

        let ctx = context_for(&server, Some("token"));
        handle_coupon_create(&ctx, create_args())
            .await
            .expect("coupon created");
        mock.assert();
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn coupon_create_rejects_bad_uses_without_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(201);
        });

        let ctx = context_for(&server, Some("token"));
        let args = CouponCreateArgs {
            uses: "many".to_string(),
            ..create_args()
        };
        let err = handle_coupon_create(&ctx, args)
            .await
            .expect_err("uses must be numeric");
        assert_eq!(err.exit_code(), 2);
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn coupon_list_renders_table() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/coupon");
            then.status(200).json_body(json!([{
                "id": "c-1",
                "code": "WELCOME",
                "is_one_time": true,
                "expires_on": "2025-01-31T00:00:00.000Z",
                "no_of_uses": 5,
                "meta_data": {"terms": "[\"one\"]"}
            }]));
        });

        let ctx = context_for(&server, Some("token"));
        handle_coupon_list(&ctx, OutputFormat::Table)
            .await
            .expect("list succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn coupon_delete_surfaces_status_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/coupon/c-9");
            then.status(404);
        });

        let ctx = context_for(&server, Some("token"));
        let err = handle_coupon_delete(
            &ctx,
            IdArgs {
                id: "c-9".to_string(),
            },
        )
        .await
        .expect_err("missing coupon");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Failed to delete coupon: 404 Not Found"
        );
    }
}
