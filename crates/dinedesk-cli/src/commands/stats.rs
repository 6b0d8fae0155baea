use crate::cli::{OutputFormat, StatsArgs};
use crate::client::{AppContext, CliResult};
use crate::output::render_stats;

pub(crate) async fn handle_stats(
    ctx: &AppContext,
    args: StatsArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let stats = if args.ecom {
        ctx.api.get_ecom_stats().await?
    } else {
        ctx.api.get_all_stats().await?
    };
    render_stats(&stats, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn restaurant_counters_are_the_default() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/allstats");
            then.status(200)
                .json_body(json!({"totalBookings": 12, "activeOrders": 3}));
        });

        let ctx = context_for(&server, Some("token"));
        handle_stats(&ctx, StatsArgs::default(), OutputFormat::Table)
            .await
            .expect("stats load");
        mock.assert();
    }

    #[tokio::test]
    async fn ecom_flag_switches_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/allecomstats");
            then.status(200).json_body(json!({"totalProducts": 40}));
        });

        let ctx = context_for(&server, Some("token"));
        handle_stats(&ctx, StatsArgs { ecom: true }, OutputFormat::Json)
            .await
            .expect("stats load");
        mock.assert();
    }
}
