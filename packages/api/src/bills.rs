use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Bill, BillPayload};

#[derive(Clone)]
pub struct BillsApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> BillsApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Bill>, ApiError> {
        self.http.get("/bills").await
    }

    pub async fn list_by_member(&self, member_id: i64) -> Result<Vec<Bill>, ApiError> {
        self.http.get(&format!("/bills/member/{member_id}")).await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Bill>, ApiError> {
        self.http.get_query("/bills/search", &[("term", term)]).await
    }

    pub async fn create(&self, payload: &BillPayload) -> Result<Bill, ApiError> {
        self.http.post("/bills", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_sends_camel_case_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bills"))
            .and(body_json(json!({
                "memberId": 7,
                "amount": 49.5,
                "description": "Monthly fee",
                "dueDate": "2024-04-01",
                "status": "pending",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 12,
                "memberId": 7,
                "memberName": "Jo",
                "amount": 49.5,
                "status": "pending",
            })))
            .mount(&server)
            .await;

        let bills = BillsApi::new(HttpClient::new(
            ApiConfig::new(server.uri()),
            MemoryStore::new(),
        ));
        let created = bills
            .create(&BillPayload {
                member_id: 7,
                amount: 49.5,
                description: "Monthly fee".into(),
                due_date: "2024-04-01".into(),
                status: "pending".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 12);
        assert_eq!(created.member_name.as_deref(), Some("Jo"));
    }

    #[tokio::test]
    async fn test_list_by_member_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills/member/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "amount": 10.0},
                {"id": 2, "amount": 20.0},
            ])))
            .mount(&server)
            .await;

        let bills = BillsApi::new(HttpClient::new(
            ApiConfig::new(server.uri()),
            MemoryStore::new(),
        ));
        let rows = bills.list_by_member(7).await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
