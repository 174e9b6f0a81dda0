use std::sync::Arc;

use reqwest::header;
use taskgate::{
    auth::auth_body::AuthBody,
    models::identity::{IdentityApi, LoginRequest, RegisterRequest},
    store::memory::MemoryStore,
    web::{AppState, api::router},
};
use tokio::net::TcpListener;

use super::{api_client::ApiClient, memory_state};

/// A server running in-process on an ephemeral port.
pub struct TestContext {
    pub api: ApiClient,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    pub async fn spawn() -> Self {
        Self::spawn_with_cookies(false).await
    }

    pub async fn spawn_with_cookies(cookie_store: bool) -> Self {
        let (store, state) = memory_state();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "content-type",
            header::HeaderValue::from_static("application/json"),
        );
        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .cookie_store(cookie_store)
            .build()
            .expect("Failed to build reqwest Client");

        Self {
            api: ApiClient {
                url: format!("http://{addr}/api/v1"),
                client,
            },
            state,
            store,
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> IdentityApi {
        let body = RegisterRequest {
            name: String::from(name),
            email: String::from(email),
            password: String::from(password),
        };
        let response = self.api.post("auth/register", &body, None).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Couldn't Parse Value")
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .api
            .post("auth/login", &LoginRequest::new(email, password), None)
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: AuthBody = response.json().await.expect("Couldn't Parse Value");
        body.access_token
    }
}
