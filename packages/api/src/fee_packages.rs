use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{FeePackage, FeePackagePayload};

#[derive(Clone)]
pub struct FeePackagesApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> FeePackagesApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<FeePackage>, ApiError> {
        self.http.get("/fee-packages").await
    }

    pub async fn create(&self, payload: &FeePackagePayload) -> Result<FeePackage, ApiError> {
        self.http.post("/fee-packages", payload).await
    }
}
