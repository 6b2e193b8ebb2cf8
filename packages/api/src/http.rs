//! Thin `reqwest` wrapper that attaches stored credentials to every request.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::session::{EMAIL_KEY, TOKEN_KEY};
use store::KeyValueStore;

use crate::config::ApiConfig;
use crate::error::ApiError;

pub const AUTH_HEADER: &str = "Authorization";
pub const EMAIL_HEADER: &str = "X-User-Email";

#[derive(Clone)]
pub struct HttpClient<S: KeyValueStore> {
    client: reqwest::Client,
    config: ApiConfig,
    kv: S,
}

impl<S: KeyValueStore> HttpClient<S> {
    pub fn new(config: ApiConfig, kv: S) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(crate::config::REQUEST_TIMEOUT);
        let client = builder.build().expect("reqwest client");
        Self { client, config, kv }
    }

    pub fn store(&self) -> &S {
        &self.kv
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Credentials are read from the store per request, so a login that just
    /// persisted a token takes effect immediately.
    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        let mut req = req;
        if let Some(token) = self.kv.get(TOKEN_KEY) {
            req = req.header(AUTH_HEADER, token);
        }
        if let Some(email) = self.kv.get(EMAIL_KEY) {
            req = req.header(EMAIL_HEADER, email);
        }
        req
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.client.get(self.url(path));
        decode(self.with_auth(req).send().await?).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let req = self.client.get(self.url(path)).query(query);
        decode(self.with_auth(req).send().await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.client.post(self.url(path)).json(body);
        decode(self.with_auth(req).send().await?).await
    }

    /// POST with no request body, ignoring whatever the backend echoes back.
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        let req = self.client.post(self.url(path));
        check(self.with_auth(req).send().await?).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.client.put(self.url(path)).json(body);
        decode(self.with_auth(req).send().await?).await
    }

    pub async fn patch_unit(&self, path: &str) -> Result<(), ApiError> {
        let req = self.client.patch(self.url(path));
        check(self.with_auth(req).send().await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.client.delete(self.url(path));
        check(self.with_auth(req).send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn check(resp: Response) -> Result<(), ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(())
}

/// Pull the human-readable message out of an error body. The backend uses
/// either `message` or `error` depending on the controller.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            error_message(r#"{"error":"boom"}"#).as_deref(),
            Some("boom")
        );
        assert!(error_message(r#"{"detail":"nope"}"#).is_none());
        assert!(error_message("not json").is_none());
        assert!(error_message("").is_none());
    }

    #[tokio::test]
    async fn test_stored_credentials_are_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members"))
            .and(header(AUTH_HEADER, "T"))
            .and(header(EMAIL_HEADER, "a@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "T");
        kv.set(EMAIL_KEY, "a@x.com");

        let http = HttpClient::new(ApiConfig::new(server.uri()), kv);
        let rows: Vec<serde_json::Value> = http.get("/members").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_carries_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "database down"})),
            )
            .mount(&server)
            .await;

        let http = HttpClient::new(ApiConfig::new(server.uri()), MemoryStore::new());
        let err = http.get::<Vec<serde_json::Value>>("/members").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "database down");
    }
}
