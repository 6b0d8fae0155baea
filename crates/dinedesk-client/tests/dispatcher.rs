use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dinedesk_client::models::{CouponInput, PageRequest, ProductFilter, TimeWindow};
use dinedesk_client::{
    ApiClient, ApiError, BannerUpload, ClientConfig, FilePart, MemoryTokenStore, Session,
    SessionHolder,
};
use httpmock::prelude::*;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MULTIPART_KEY: &str = "(?i)^content-type$";
const MULTIPART_VALUE: &str = "^multipart/form-data; boundary=";

fn client(server: &MockServer, session: Session) -> ApiClient {
    let config = ClientConfig::new(&server.base_url()).expect("valid base URL");
    ApiClient::new(config, session).expect("client builds")
}

#[tokio::test]
async fn non_success_status_reports_code_and_reason() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/dish/dishes");
        then.status(503).body("upstream down");
    });

    let api = client(&server, Session::new(Some("token".into())));
    let err = api.get_dishes().await.expect_err("503 must fail");
    assert_eq!(err.status(), Some(503));
    assert_eq!(
        err.to_string(),
        "Failed to get dishes: 503 Service Unavailable"
    );
}

/// Serves one connection with a verbatim status line and an empty body.
async fn serve_status_line(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request: Vec<u8> = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut chunk).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }
        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn custom_reason_phrase_is_reported_verbatim() {
    let base = serve_status_line("404 Coupon Missing").await;
    let api = ApiClient::new(
        ClientConfig::new(&base).expect("valid base URL"),
        Session::new(Some("token".into())),
    )
    .expect("client builds");

    let err = api.get_coupons().await.expect_err("404 must fail");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Failed to get coupons: 404 Coupon Missing");
}

#[tokio::test]
async fn non_standard_status_keeps_the_server_reason() {
    let base = serve_status_line("599 Network Timeout").await;
    let api = ApiClient::new(
        ClientConfig::new(&base).expect("valid base URL"),
        Session::new(Some("token".into())),
    )
    .expect("client builds");

    let err = api.get_coupons().await.expect_err("599 must fail");
    assert_eq!(err.status(), Some(599));
    assert_eq!(
        err.to_string(),
        "Failed to get coupons: 599 Network Timeout"
    );
}

#[tokio::test]
async fn failure_messages_name_the_backend_action() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login-request");
        then.status(400);
    });
    server.mock(|when, then| {
        when.method(GET).path("/admin/allstats");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(POST).path("/dine-in/bookings/cancel/b-3");
        then.status(409);
    });
    server.mock(|when, then| {
        when.method(GET).path("/dine-in/tables/by-no/7");
        then.status(404);
    });

    let api = client(&server, Session::new(Some("token".into())));
    let login = api
        .login_request(&dinedesk_client::models::LoginRequest {
            country_code: "+91".into(),
            phone_number: "9000000000".into(),
        })
        .await
        .expect_err("400 must fail");
    assert_eq!(login.to_string(), "Failed to login request: 400 Bad Request");

    let stats = api.get_all_stats().await.expect_err("500 must fail");
    assert_eq!(
        stats.to_string(),
        "Failed to get all stats: 500 Internal Server Error"
    );

    let cancel = api
        .mark_booking_as_cancelled("b-3")
        .await
        .expect_err("409 must fail");
    assert_eq!(
        cancel.to_string(),
        "Failed to mark booking as cancelled: 409 Conflict"
    );

    let table = api
        .get_table_by_table_number("7")
        .await
        .expect_err("404 must fail");
    assert_eq!(table.to_string(), "Failed to get table: 404 Not Found");
}

#[tokio::test]
async fn success_body_is_passed_through_unchanged() {
    let server = MockServer::start_async().await;
    let body = json!({"success": true, "data": {"anything": [1, 2, 3]}});
    let expected = body.clone();
    server.mock(move |when, then| {
        when.method(DELETE).path("/dine-in/bookings/b-1");
        then.status(200).json_body(body);
    });

    let api = client(&server, Session::new(Some("token".into())));
    let value = api.delete_booking("b-1").await.expect("delete succeeds");
    assert_eq!(value, expected);
}

#[tokio::test]
async fn token_update_applies_to_the_next_request() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coupon")
            .header("authorization", "Bearer fresh");
        then.status(200).json_body(json!([]));
    });

    let holder = SessionHolder::new(Arc::new(MemoryTokenStore::with_token("stale")));
    let api = client(&server, holder.get_instance());
    holder.get_instance().set_access_token(Some("fresh".into()));

    let coupons = api.get_coupons().await.expect("coupons load");
    assert!(coupons.is_empty());
    mock.assert();
}

#[tokio::test]
async fn get_user_without_token_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let api = client(&server, Session::default());
    let err = api.get_user().await.expect_err("token required");
    assert!(matches!(err, ApiError::AuthenticationRequired));
    mock.assert_hits(0);
}

#[tokio::test]
async fn login_request_is_anonymous() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login-request")
            .header_missing("authorization")
            .json_body(json!({"country_code": "+91", "phone_number": "9000000000"}));
        then.status(200).json_body(json!({"message": "OTP sent"}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let reply = api
        .login_request(&dinedesk_client::models::LoginRequest {
            country_code: "+91".into(),
            phone_number: "9000000000".into(),
        })
        .await
        .expect("otp requested");
    assert_eq!(reply.message, "OTP sent");
    mock.assert();
}

#[tokio::test]
async fn product_listing_appends_filters_then_paging() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/product")
            .query_param("category_id", "cat 1")
            .query_param("limit", "20")
            .query_param("page", "2");
        then.status(200).json_body(json!([]));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let filter = ProductFilter {
        category_id: Some("cat 1".into()),
        subcategory_id: None,
    };
    let products = api
        .get_products_by_category(&filter, PageRequest { page: 2, limit: 20 })
        .await
        .expect("products load");
    assert!(products.is_empty());
    mock.assert();
}

#[tokio::test]
async fn product_count_unwraps_the_count_field() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/product/count");
        then.status(200).json_body(json!({"count": 42}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let count = api
        .get_product_count(&ProductFilter::default())
        .await
        .expect("count loads");
    assert_eq!(count, 42);
}

#[tokio::test]
async fn coupon_creation_serialises_expiry_with_millis() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/coupon")
            .header("content-type", "application/json")
            .json_body(json!({
                "code": "WELCOME",
                "is_one_time": true,
                "expires_on": "2025-01-31T00:00:00.000Z",
                "no_of_uses": 5,
                "meta_data": {"discountType": "percentage"}
            }));
        then.status(201).json_body(json!({"id": "c-9"}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let body = CouponInput {
        code: "WELCOME".into(),
        is_one_time: true,
        expires_on: Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
        no_of_uses: 5,
        meta_data: BTreeMap::from([("discountType".to_string(), "percentage".to_string())]),
    };
    let id = api.create_coupon(&body).await.expect("coupon created");
    assert_eq!(id, "c-9");
    mock.assert();
}

#[tokio::test]
async fn void_actions_ignore_the_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/coupon/c-1");
        then.status(200).body("not json at all");
    });

    let api = client(&server, Session::new(Some("token".into())));
    api.delete_coupon("c-1").await.expect("body is not parsed");
}

#[tokio::test]
async fn table_lookup_by_number_unwraps_envelope() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/dine-in/tables/by-no/12");
        then.status(200).json_body(json!({
            "success": true,
            "data": {"id": "t-1", "table_number": "12", "capacity": 4}
        }));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let table = api
        .get_table_by_table_number("12")
        .await
        .expect("table loads");
    assert_eq!(table.data.table_number, "12");
    assert_eq!(table.data.capacity, 4);
    mock.assert();
}

#[tokio::test]
async fn available_tables_posts_the_time_window() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/dine-in/available-tables")
            .json_body(json!({"from_time": "18:00", "to_time": "20:00"}));
        then.status(200).json_body(json!({"success": true, "data": []}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let tables = api
        .get_available_tables(&TimeWindow {
            from_time: "18:00".into(),
            to_time: "20:00".into(),
        })
        .await
        .expect("tables load");
    assert!(tables.success);
    assert!(tables.data.is_empty());
    mock.assert();
}

#[tokio::test]
async fn upload_sends_multipart_with_bearer() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/upload")
            .header("authorization", "Bearer token")
            .header_matches(MULTIPART_KEY, MULTIPART_VALUE)
            .body_includes("name=\"file\"; filename=\"menu.pdf\"")
            .body_includes("%PDF-1.4");
        then.status(200)
            .json_body(json!({"url": "https://cdn.example.com/menu.pdf"}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let uploaded = api
        .upload_file(FilePart::new("menu.pdf", b"%PDF-1.4".to_vec()).with_mime("application/pdf"))
        .await
        .expect("upload succeeds");
    assert_eq!(uploaded.url, "https://cdn.example.com/menu.pdf");
    mock.assert();
}

#[tokio::test]
async fn banner_creation_posts_multipart_form() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/banner/create")
            .header("authorization", "Bearer token")
            .header_matches(MULTIPART_KEY, MULTIPART_VALUE)
            .body_includes("name=\"title\"")
            .body_includes("Diwali")
            .body_includes("name=\"redirect_url\"")
            .body_includes("name=\"image\"; filename=\"b.png\"")
            .body_excludes("name=\"description\"");
        then.status(201).json_body(json!({
            "id": "bn-1",
            "title": "Diwali",
            "image_url": "https://cdn.example.com/b.png"
        }));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let banner = api
        .create_banner(BannerUpload {
            title: "Diwali".into(),
            description: None,
            redirect_url: Some("https://shop.example.com/sale".into()),
            image: FilePart::new("b.png", vec![0x89, 0x50]).with_mime("image/png"),
        })
        .await
        .expect("banner created");
    assert_eq!(banner.id, "bn-1");
    mock.assert();
}

#[tokio::test]
async fn order_transitions_post_without_body() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/dine-in/orders/serve/o-7");
        then.status(200).json_body(json!({"success": true}));
    });

    let api = client(&server, Session::new(Some("token".into())));
    let ack = api.mark_order_as_served("o-7").await.expect("served");
    assert!(ack.success);
    mock.assert();
}
