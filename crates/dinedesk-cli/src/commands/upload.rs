use anyhow::Context;
use dinedesk_client::FilePart;

use crate::cli::{OutputFormat, UploadArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::print_json;

fn file_part(args: UploadArgs) -> CliResult<FilePart> {
    let file_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::validation(format!("{} is not a file path", args.path.display()))
        })?;
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))
        .map_err(CliError::failure)?;

    let part = FilePart::new(file_name, bytes);
    Ok(match args.mime {
        Some(mime) if !mime.trim().is_empty() => part.with_mime(mime.trim()),
        _ => part,
    })
}

pub(crate) async fn handle_upload(
    ctx: &AppContext,
    args: UploadArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let part = file_part(args)?;
    let uploaded = ctx.api.upload_file(part).await?;
    match format {
        OutputFormat::Json => print_json(&uploaded)?,
        OutputFormat::Table => println!("{}", uploaded.url),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[tokio::test]
    async fn upload_sends_file_as_multipart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("menu.png");
        std::fs::write(&path, b"png-bytes").expect("write file");

        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/upload")
                .header_matches("(?i)^content-type$", "^multipart/form-data; boundary=")
                .header("authorization", "Bearer token")
                .body_includes("name=\"file\"; filename=\"menu.png\"")
                .body_includes("Content-Type: image/png")
                .body_includes("png-bytes");
            then.status(200)
                .json_body(json!({"url": "https://cdn.example/menu.png"}));
        });

        let ctx = context_for(&server, Some("token"));
        handle_upload(
            &ctx,
            UploadArgs {
                path,
                mime: Some("image/png".to_string()),
            },
            OutputFormat::Table,
        )
        .await
        .expect("upload succeeds");
        mock.assert();
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn missing_file_fails_before_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200);
        });

        let ctx = context_for(&server, Some("token"));
        let err = handle_upload(
            &ctx,
            UploadArgs {
                path: PathBuf::from("/definitely/not/here.png"),
                mime: None,
            },
            OutputFormat::Json,
        )
        .await
        .expect_err("file must exist");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("failed to read"));
        mock.assert_hits(0);
    }
}
