#![allow(dead_code)]

use axum::Router;
use serde_json::{json, Value};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

use portfolio_server::api::router::build_router;
use portfolio_server::app::AppState;
use portfolio_server::auth::token::TokenService;

pub const TEST_SECRET: &str = "test-secret";

/// Holds a running MongoDB container and the router wired to it.
///
/// The container is kept alive for as long as this struct lives. When
/// dropped, it is stopped and cleaned up automatically.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub db: mongodb::Database,
    pub state: AppState,
    pub router: Router,
}

impl TestEnv {
    /// Spin up MongoDB and build a router backed by it.
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let db = mongo_client.database("portfolio_test");

        let state = AppState::from_database(&db, TokenService::new(TEST_SECRET), 5000);
        let router = build_router(state.clone());

        Self {
            _mongo: mongo_container,
            db,
            state,
            router,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }

    /// Helper: obtain a bearer token through `POST /jwt`.
    pub async fn token(&self, server: &axum_test::TestServer) -> String {
        let body: Value = server
            .post("/jwt")
            .json(&json!({"role": "admin"}))
            .await
            .json();
        body["token"]
            .as_str()
            .expect("token missing from /jwt response")
            .to_string()
    }

    /// Helper: POST a JSON body with a bearer token.
    pub async fn post_authorized(
        &self,
        server: &axum_test::TestServer,
        path: &str,
        body: Value,
    ) -> axum_test::TestResponse {
        let token = self.token(server).await;
        server
            .post(path)
            .authorization_bearer(token)
            .json(&body)
            .await
    }

    /// Raw access to a collection, bypassing the API.
    pub fn raw_collection(&self, name: &str) -> mongodb::Collection<mongodb::bson::Document> {
        self.db.collection(name)
    }
}

/// A token signed with a secret the server does not know.
pub fn foreign_token() -> String {
    let claims = json!({"role": "admin"}).as_object().cloned().unwrap();
    TokenService::new("some-other-secret").issue(claims).unwrap()
}
