//! Shared integration-test harness
//!
//! Spins up a full `ServerState` on a temp-dir SQLite database and drives
//! the complete middleware stack in-process through `OneshotRouter`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;

use pos_server::api::{self, OneshotRouter};
use pos_server::core::{Config, ServerState};

pub struct TestServer {
    pub state: ServerState,
    app: Router<ServerState>,
    // Keeps the database directory alive for the test's duration
    _dir: TempDir,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Start with a config tweak (e.g. a tiny body limit).
    pub async fn start_with(tweak: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
        tweak(&mut config);

        let state = ServerState::initialize(&config)
            .await
            .expect("failed to initialize server state");
        let app = api::build_app(&state);

        Self {
            state,
            app,
            _dir: dir,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .app
            .clone()
            .oneshot(&self.state, request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    /// Seed default data (business, HO showroom, MAIN warehouse, tax).
    pub async fn seed(&self) {
        let (status, _) = self.post("/api/v1/db/seed", None, Value::Null).await;
        assert_eq!(status, StatusCode::OK, "seeding failed");
    }

    /// Register an account and return its id.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/user",
                None,
                serde_json::json!({"name": name, "email": email, "password": password}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "registration failed: {body}");
        body["id"].as_i64().expect("registration returned no id")
    }

    /// Login and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/auth/login",
                None,
                serde_json::json!({"email": email, "password": password}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().expect("login returned no token").to_string()
    }

    /// Id of the seeded head-office showroom.
    pub async fn head_office_id(&self, admin_token: &str) -> i64 {
        let (status, body) = self.get("/api/v1/showroom", Some(admin_token)).await;
        assert_eq!(status, StatusCode::OK, "showroom list failed: {body}");
        body.as_array()
            .and_then(|rooms| {
                rooms
                    .iter()
                    .find(|r| r["code"] == "HO")
                    .and_then(|r| r["id"].as_i64())
            })
            .expect("head office showroom missing")
    }
}
