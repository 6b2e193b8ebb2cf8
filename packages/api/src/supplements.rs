use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Supplement, SupplementPayload};

#[derive(Clone)]
pub struct SupplementsApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> SupplementsApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    /// `term` filters server-side; `None` lists the whole store.
    pub async fn list(&self, term: Option<&str>) -> Result<Vec<Supplement>, ApiError> {
        match term {
            Some(term) => self.http.get_query("/supplements", &[("term", term)]).await,
            None => self.http.get("/supplements").await,
        }
    }

    pub async fn create(&self, payload: &SupplementPayload) -> Result<Supplement, ApiError> {
        self.http.post("/supplements", payload).await
    }

    pub async fn update(&self, id: i64, payload: &SupplementPayload) -> Result<Supplement, ApiError> {
        self.http.put(&format!("/supplements/{id}"), payload).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&format!("/supplements/{id}")).await
    }
}
