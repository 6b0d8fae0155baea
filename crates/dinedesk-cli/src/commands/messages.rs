use crate::cli::{IdArgs, MessageReadArgs, OutputFormat};
use crate::client::{AppContext, CliResult};
use crate::output::render_message_list;

pub(crate) async fn handle_message_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let messages = ctx.api.get_contact_messages().await?;
    render_message_list(&messages.rows, format)
}

pub(crate) async fn handle_message_read(ctx: &AppContext, args: MessageReadArgs) -> CliResult<()> {
    let is_read = !args.unread;
    ctx.api
        .update_contact_message_status(&args.id, is_read)
        .await?;
    let state = if is_read { "read" } else { "unread" };
    println!("Message marked as {state} (id: {})", args.id);
    Ok(())
}

pub(crate) async fn handle_message_delete(ctx: &AppContext, args: IdArgs) -> CliResult<()> {
    ctx.api.delete_contact_message(&args.id).await?;
    println!("Message deleted (id: {})", args.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn message_list_reads_rows() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/message");
            then.status(200).json_body(json!({
                "rows": [{
                    "id": "m-1",
                    "name": "Ravi",
                    "message": "Do you cater?",
                    "is_read": false
                }]
            }));
        });

        let ctx = context_for(&server, Some("token"));
        handle_message_list(&ctx, OutputFormat::Table)
            .await
            .expect("messages load");
        mock.assert();
    }

    #[tokio::test]
    async fn unread_flag_flips_the_status_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/message/m-1/read")
                .json_body(json!({"is_read": false}));
            then.status(200).body("ok");
        });

        let ctx = context_for(&server, Some("token"));
        handle_message_read(
            &ctx,
            MessageReadArgs {
                id: "m-1".to_string(),
                unread: true,
            },
        )
        .await
        .expect("status updated");
        mock.assert();
    }

    #[tokio::test]
    async fn delete_reports_server_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/message/m-2");
            then.status(500);
        });

        let ctx = context_for(&server, Some("token"));
        let err = handle_message_delete(
            &ctx,
            IdArgs {
                id: "m-2".to_string(),
            },
        )
        .await
        .expect_err("server failure");
        assert_eq!(err.exit_code(), 3);
    }
}
