use reqwest::{Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub struct ApiClient {
    pub url: String,
    pub client: reqwest::Client,
}

impl ApiClient {
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    fn with_token(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get(&self, endpoint: &str, token: Option<&str>) -> Response {
        Self::with_token(self.client.get(self.path(endpoint)), token)
            .send()
            .await
            .expect("Failed to send http request")
    }

    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B, token: Option<&str>) -> Response {
        Self::with_token(self.client.post(self.path(endpoint)), token)
            .json(body)
            .send()
            .await
            .expect("Failed to send http request")
    }

    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B, token: Option<&str>) -> Response {
        Self::with_token(self.client.put(self.path(endpoint)), token)
            .json(body)
            .send()
            .await
            .expect("Failed to send http request")
    }

    pub async fn delete(&self, endpoint: &str, token: Option<&str>) -> Response {
        Self::with_token(self.client.delete(self.path(endpoint)), token)
            .send()
            .await
            .expect("Failed to send http request")
    }
}

/// Asserts the status and parses the body.
pub async fn expect_json<T: DeserializeOwned>(response: Response, status: StatusCode) -> T {
    assert_eq!(response.status(), status);
    response.json().await.expect("Couldn't Parse Value")
}

/// Asserts an error envelope with the given status.
pub async fn expect_error(response: Response, status: StatusCode) -> String {
    let body: Value = expect_json(response, status).await;
    assert_eq!(body["error"]["status"], status.as_u16());
    body["error"]["message"]
        .as_str()
        .expect("Error message missing")
        .to_string()
}
