use dinedesk_api_models::{LoginRequest, VerifyAccessRequest};

use crate::cli::{OutputFormat, PhoneArgs, VerifyArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_user;

fn login_request(args: &PhoneArgs) -> CliResult<LoginRequest> {
    let phone_number = args.phone.trim();
    if phone_number.is_empty() {
        return Err(CliError::validation("phone number must not be empty"));
    }
    Ok(LoginRequest {
        country_code: args.country_code.trim().to_string(),
        phone_number: phone_number.to_string(),
    })
}

pub(crate) async fn handle_request_otp(ctx: &AppContext, args: PhoneArgs) -> CliResult<()> {
    let request = login_request(&args)?;
    let reply = ctx.api.login_request(&request).await?;
    println!("{}", reply.message);
    Ok(())
}

pub(crate) async fn handle_verify(ctx: &AppContext, args: VerifyArgs) -> CliResult<()> {
    let phone = login_request(&args.phone)?;
    let otp = args.otp.trim();
    if otp.is_empty() {
        return Err(CliError::validation("otp must not be empty"));
    }

    let grant = ctx
        .api
        .verify_account_access(&VerifyAccessRequest {
            country_code: phone.country_code,
            phone_number: phone.phone_number,
            otp: otp.to_string(),
        })
        .await?;

    ctx.sessions
        .sign_in(&grant.access_token)
        .map_err(CliError::failure)?;

    match grant.user.as_ref() {
        Some(user) if !user.display_name().is_empty() => {
            println!("Signed in as {}", user.display_name());
        }
        _ => println!("Signed in"),
    }
    Ok(())
}

pub(crate) async fn handle_whoami(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let user = ctx.api.get_user().await?;
    render_user(&user, format)
}

pub(crate) fn handle_logout(ctx: &AppContext) -> CliResult<()> {
    ctx.sessions
        .sign_out()
        .map_err(CliError::failure)?;
    println!("Signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::context_for;
    use httpmock::prelude::*;
    use serde_json::json;

    fn phone() -> PhoneArgs {
        PhoneArgs {
            country_code: "+91".to_string(),
            phone: "9000000000".to_string(),
        }
    }

    #[tokio::test]
    async fn verify_stores_token_for_later_requests() {
        let server = MockServer::start_async().await;
        let verify = server.mock(|when, then| {
            when.method(POST)
                .path("/auth/verify-account-access")
                .json_body(json!({
                    "country_code": "+91",
                    "phone_number": "9000000000",
                    "otp": "123456"
                }));
            then.status(200).json_body(json!({
                "access_token": "issued-token",
                "user": {"id": "u-1", "first_name": "Asha"}
            }));
        });
        let whoami = server.mock(|when, then| {
            when.method(GET)
                .path("/auth/user")
                .header("authorization", "Bearer issued-token");
            then.status(200)
                .json_body(json!({"id": "u-1", "first_name": "Asha"}));
        });

        let ctx = context_for(&server, None);
        handle_verify(
            &ctx,
            VerifyArgs {
                phone: phone(),
                otp: "123456".to_string(),
            },
        )
        .await
        .expect("verification succeeds");
        assert_eq!(
            ctx.sessions.get_instance().access_token().as_deref(),
            Some("issued-token")
        );

        handle_whoami(&ctx, OutputFormat::Table)
            .await
            .expect("whoami succeeds");
        verify.assert();
        whoami.assert();
    }

    #[tokio::test]
    async fn whoami_without_session_is_a_validation_error() {
        let server = MockServer::start_async().await;
        let ctx = context_for(&server, None);
        let err = handle_whoami(&ctx, OutputFormat::Json)
            .await
            .expect_err("must be signed in");
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let server = MockServer::start_async().await;
        let ctx = context_for(&server, Some("token"));
        assert!(ctx.sessions.get_instance().is_authenticated());
        handle_logout(&ctx).expect("logout succeeds");
        assert!(!ctx.sessions.get_instance().is_authenticated());
    }

    #[tokio::test]
    async fn empty_phone_is_rejected_before_any_request() {
        let server = MockServer::start_async().await;
        let ctx = context_for(&server, None);
        let err = handle_request_otp(
            &ctx,
            PhoneArgs {
                country_code: "+91".to_string(),
                phone: "  ".to_string(),
            },
        )
        .await
        .expect_err("phone required");
        assert_eq!(err.exit_code(), 2);
    }
}
