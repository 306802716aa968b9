use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::auth::Role,
    server::{
        pool::{manager::SharedConnection, ConnectionPool, PoolConfig},
        router::router,
        service::auth::token::TokenService,
        state::AppState,
    },
};


/// Router wired to a pool that hands out the test database connection.
struct TestApp {
    router: Router,
    tokens: TokenService,
    pool: ConnectionPool<DatabaseConnection>,
}

impl TestApp {
    async fn new(db: &DatabaseConnection) -> Self {
        let pool = ConnectionPool::build(
            SharedConnection(db.clone()),
            PoolConfig {
                min_size: 1,
                max_size: 4,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let tokens = TokenService::new("test-secret", chrono::Duration::minutes(15));

        Self {
            router: router(AppState::new(pool.clone(), tokens.clone())),
            tokens,
            pool,
        }
    }

    fn token(&self, user_id: i32, role: Role) -> String {
        self.tokens.issue(user_id, role).unwrap()
    }

    /// Sends one request and returns the status with the decoded JSON body.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

async fn clinic_db() -> TestContext {
    TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap()
}
