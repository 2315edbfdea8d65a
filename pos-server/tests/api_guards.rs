//! Guard-chain and middleware contract tests
//!
//! Exercises the properties the mount table promises: unguarded root,
//! 401 before any handler on guarded prefixes, super-admin-only mounts,
//! the CORS allow-list and the body ceiling.

mod common;

use axum::body::Body;
use common::TestServer;
use http::{Request, StatusCode, header};
use pos_server::api::OneshotRouter;

#[tokio::test]
async fn root_diagnostics_is_unguarded() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["serverInfo"]["protocol"].is_string());
    assert!(body["userInfo"]["userAgent"].is_string());
}

#[tokio::test]
async fn guarded_prefix_rejects_missing_token() {
    let server = TestServer::start().await;

    for path in [
        "/api/v1/product",
        "/api/v1/supplier",
        "/api/v1/invoice",
        "/api/v1/customer",
        "/api/v1/tax",
        "/api/v1/business",
    ] {
        let (status, body) = server.get(path, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path} should demand auth");
        assert_eq!(body["code"], "E3001", "{path} should use the auth error code");
    }
}

#[tokio::test]
async fn guarded_prefix_rejects_garbage_token() {
    let server = TestServer::start().await;

    let (status, _) = server.get("/api/v1/product", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn first_account_is_super_admin_and_later_ones_need_approval() {
    let server = TestServer::start().await;
    server.seed().await;

    let admin_id = server.register("Boss", "boss@sparkx.test", "password-1").await;
    let admin_token = server.login("boss@sparkx.test", "password-1").await;

    // First account reaches super-admin mounts straight away
    let (status, _) = server.get("/api/v1/tax", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);

    // Second account logs in fine but is blocked by the account check
    let staff_id = server.register("Clerk", "clerk@sparkx.test", "password-2").await;
    assert_ne!(admin_id, staff_id);
    let staff_token = server.login("clerk@sparkx.test", "password-2").await;

    let (status, body) = server.get("/api/v1/product", Some(&staff_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account is awaiting approval");

    // Approval alone is not enough for showroom-scoped mounts
    let (status, _) = server
        .put(
            &format!("/api/v1/user/{staff_id}/approve"),
            Some(&admin_token),
            serde_json::Value::Null,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = server.get("/api/v1/product", Some(&staff_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "No showroom assigned to this account");

    // With a showroom assignment the chain finally lets the request through
    let ho = server.head_office_id(&admin_token).await;
    let (status, _) = server
        .put(
            &format!("/api/v1/user/{staff_id}"),
            Some(&admin_token),
            serde_json::json!({"showroom_id": ho}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = server.get("/api/v1/product", Some(&staff_token)).await;
    assert_eq!(status, StatusCode::OK);

    // ...but super-admin mounts stay closed to staff
    let (status, body) = server.get("/api/v1/tax", Some(&staff_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Super admin privileges required");
}

#[tokio::test]
async fn cors_grants_only_allow_listed_origins() {
    let server = TestServer::start().await;

    // Allowed origin gets the credentialed grant
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .expect("failed to build request");
    let response = pos_server::api::build_app(&server.state)
        .oneshot(&server.state, request)
        .await
        .expect("request failed");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    // Unlisted origin gets a normal response with no grant headers
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://evil.example.com")
        .body(Body::empty())
        .expect("failed to build request");
    let response = pos_server::api::build_app(&server.state)
        .oneshot(&server.state, request)
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );

    // Same for a request with no Origin at all
    let (status, _) = server.get("/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_the_handler() {
    // Shrink the ceiling so the test doesn't ship megabytes
    let server = TestServer::start_with(|config| config.body_limit_bytes = 1024).await;

    let oversized = "x".repeat(2048);
    let (status, _) = server
        .post(
            "/api/v1/user",
            None,
            serde_json::json!({"name": oversized, "email": "a@b.c", "password": "password-1"}),
        )
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn login_sets_auth_cookie_and_cookie_authenticates() {
    let server = TestServer::start().await;
    server.register("Boss", "boss@sparkx.test", "password-1").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"email": "boss@sparkx.test", "password": "password-1"}).to_string(),
        ))
        .expect("failed to build request");
    let response = pos_server::api::build_app(&server.state)
        .oneshot(&server.state, request)
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("login should set the auth cookie")
        .to_string();
    assert!(cookie.starts_with("sparkx_token="));
    assert!(cookie.contains("HttpOnly"));

    // The cookie alone authenticates /me
    let cookie_pair = cookie.split(';').next().expect("cookie pair").to_string();
    let request = Request::builder()
        .uri("/api/v1/auth/me")
        .header(header::COOKIE, cookie_pair)
        .body(Body::empty())
        .expect("failed to build request");
    let response = pos_server::api::build_app(&server.state)
        .oneshot(&server.state, request)
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let server = TestServer::start().await;
    server.register("Boss", "boss@sparkx.test", "password-1").await;

    let (status, wrong_pass) = server
        .post(
            "/api/v1/auth/login",
            None,
            serde_json::json!({"email": "boss@sparkx.test", "password": "nope-nope"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, no_user) = server
        .post(
            "/api/v1/auth/login",
            None,
            serde_json::json!({"email": "ghost@sparkx.test", "password": "nope-nope"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Same message either way: no email enumeration
    assert_eq!(wrong_pass["message"], no_user["message"]);
}
