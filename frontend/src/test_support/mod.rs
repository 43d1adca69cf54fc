#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::ApiClient;
    use httpmock::MockServer;
    use leptos::*;
    use serde_json::json;

    pub fn provide_api(server: &MockServer) -> ApiClient {
        let api = ApiClient::new_with_base_url(server.base_url());
        provide_context(api.clone());
        api
    }

    pub fn categories_json() -> serde_json::Value {
        json!([
            { "id": 1, "name": "Fruits" },
            { "id": 2, "name": "Légumes" }
        ])
    }

    pub fn producers_json() -> serde_json::Value {
        json!([
            { "id": 10, "name": "Ferme Dupont" }
        ])
    }
}
