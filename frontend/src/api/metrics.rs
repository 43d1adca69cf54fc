use serde_json::Value;

use super::{client::ApiClient, types::ApiError};

impl ApiClient {
    /// Raw body of a `GET /total/{entity}` style endpoint.
    pub async fn get_total(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.get_json(endpoint).await
    }
}
