use crate::api::{ApiClient, ApiError, SelectOption, SubmissionPayload};
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductOptions {
    pub producers: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
}

#[derive(Clone)]
pub struct ProductsRepository {
    client: Rc<ApiClient>,
}

impl Default for ProductsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Loads both select lists together. A failing list comes back empty
    /// without affecting the other.
    pub async fn load_options(&self) -> ProductOptions {
        let (producers, categories) = futures::join!(
            self.client.list_producers(),
            self.client.list_categories()
        );
        ProductOptions {
            producers: or_empty("producers", producers),
            categories: or_empty("categories", categories),
        }
    }

    pub async fn create_product(&self, payload: SubmissionPayload) -> Result<Value, ApiError> {
        self.client.create_product(payload).await
    }
}

fn or_empty(list: &str, result: Result<Vec<SelectOption>, ApiError>) -> Vec<SelectOption> {
    result.unwrap_or_else(|err| {
        log::error!("Error fetching {}: {}", list, err);
        Vec::new()
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::producers_json;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn failing_categories_leave_producers_intact() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/producers");
                then.status(200).json_body(producers_json());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/categories");
                then.status(500).body("down");
            })
            .await;

        let repo = ProductsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let options = repo.load_options().await;
        assert_eq!(options.producers.len(), 1);
        assert_eq!(options.producers[0].id, 10);
        assert!(options.categories.is_empty());
    }
}
