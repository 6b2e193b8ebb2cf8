use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Notification, NotificationPayload};

#[derive(Clone)]
pub struct NotificationsApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> NotificationsApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    /// `audience` narrows to notifications targeted at that audience;
    /// `None` lists everything.
    pub async fn list(&self, audience: Option<&str>) -> Result<Vec<Notification>, ApiError> {
        match audience {
            Some(audience) => {
                self.http
                    .get_query("/notifications", &[("audience", audience)])
                    .await
            }
            None => self.http.get("/notifications").await,
        }
    }

    pub async fn create(&self, payload: &NotificationPayload) -> Result<Notification, ApiError> {
        self.http.post("/notifications", payload).await
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<(), ApiError> {
        self.http.patch_unit(&format!("/notifications/{id}/read")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notifications(server: &MockServer) -> NotificationsApi<MemoryStore> {
        NotificationsApi::new(HttpClient::new(
            ApiConfig::new(server.uri()),
            MemoryStore::new(),
        ))
    }

    #[tokio::test]
    async fn test_list_scoped_to_audience() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .and(query_param("audience", "members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Hi", "message": "Pay up", "type": "warning"},
            ])))
            .mount(&server)
            .await;

        let rows = notifications(&server).list(Some("members")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "warning");
    }

    #[tokio::test]
    async fn test_mark_as_read_patches_read_path() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/notifications/9/read"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        notifications(&server).mark_as_read(9).await.unwrap();
    }
}
