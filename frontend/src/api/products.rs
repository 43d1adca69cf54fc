use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, SelectOption, SubmissionPayload},
};

pub const PRODUCERS_PATH: &str = "/api/producers";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const PRODUCTS_ADD_PATH: &str = "/api/products/add";

impl ApiClient {
    pub async fn list_producers(&self) -> Result<Vec<SelectOption>, ApiError> {
        self.list_options(PRODUCERS_PATH).await
    }

    pub async fn list_categories(&self) -> Result<Vec<SelectOption>, ApiError> {
        self.list_options(CATEGORIES_PATH).await
    }

    // A `null` body means "no entries".
    async fn list_options(&self, path: &str) -> Result<Vec<SelectOption>, ApiError> {
        let options: Option<Vec<SelectOption>> = self.get_json(path).await?;
        Ok(options.unwrap_or_default())
    }

    pub async fn create_product(&self, payload: SubmissionPayload) -> Result<Value, ApiError> {
        self.post_multipart(PRODUCTS_ADD_PATH, payload).await
    }
}
