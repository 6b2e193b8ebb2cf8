use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{DietPlan, DietPlanPayload};

#[derive(Clone)]
pub struct DietPlansApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> DietPlansApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<DietPlan>, ApiError> {
        self.http.get("/diet-plans").await
    }

    pub async fn create(&self, payload: &DietPlanPayload) -> Result<DietPlan, ApiError> {
        self.http.post("/diet-plans", payload).await
    }

    pub async fn update(&self, id: i64, payload: &DietPlanPayload) -> Result<DietPlan, ApiError> {
        self.http.put(&format!("/diet-plans/{id}"), payload).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&format!("/diet-plans/{id}")).await
    }
}
