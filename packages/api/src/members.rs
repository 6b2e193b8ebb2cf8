//! Member facade. The one facade with absence-tolerant lookup: a user
//! without a member profile is an expected case, not an error.

use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Member, MemberPayload};

#[derive(Clone)]
pub struct MembersApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> MembersApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Member>, ApiError> {
        self.http.get("/members").await
    }

    pub async fn create(&self, payload: &MemberPayload) -> Result<Member, ApiError> {
        self.http.post("/members", payload).await
    }

    pub async fn update(&self, id: i64, payload: &MemberPayload) -> Result<Member, ApiError> {
        self.http.put(&format!("/members/{id}"), payload).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&format!("/members/{id}")).await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Member>, ApiError> {
        self.http
            .get_query("/members/search", &[("term", term)])
            .await
    }

    /// `Ok(None)` when the backend reports not-found; every other failure
    /// propagates unchanged.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, ApiError> {
        match self
            .http
            .get_query::<Member>("/members/by-email", &[("email", email)])
            .await
        {
            Ok(member) => Ok(Some(member)),
            Err(err) if err.status() == Some(404) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn assign_package(&self, member_id: i64, package_id: i64) -> Result<Member, ApiError> {
        self.http
            .post(
                &format!("/members/{member_id}/assign-package/{package_id}"),
                &serde_json::json!({}),
            )
            .await
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

    fn members(server: &MockServer) -> MembersApi<MemoryStore> {
        MembersApi::new(HttpClient::new(
            ApiConfig::new(server.uri()),
            MemoryStore::new(),
        ))
    }

    #[tokio::test]
    async fn test_find_by_email_not_found_is_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/by-email"))
            .and(query_param("email", "ghost@x.com"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "Member not found"})),
            )
            .mount(&server)
            .await;

        let found = members(&server).find_by_email("ghost@x.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_other_errors_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/by-email"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = members(&server).find_by_email("a@x.com").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_find_by_email_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/by-email"))
            .and(query_param("email", "jo@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "name": "Jo",
                "email": "jo@x.com",
                "status": "active",
            })))
            .mount(&server)
            .await;

        let found = members(&server).find_by_email("jo@x.com").await.unwrap();
        assert_eq!(found.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_search_passes_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/search"))
            .and(query_param("term", "jo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 7, "name": "Jo", "email": "jo@x.com"},
            ])))
            .mount(&server)
            .await;

        let rows = members(&server).search("jo").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jo");
    }
}
