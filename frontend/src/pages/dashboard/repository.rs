use crate::api::{ApiClient, ApiError};
use serde_json::Value;
use std::rc::Rc;

/// One dashboard card: where its total comes from and how it is labelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricQuery {
    pub endpoint: &'static str,
    pub result_field: &'static str,
    pub title: &'static str,
    pub display_label: &'static str,
    pub unit: &'static str,
    pub icon: &'static str,
}

pub static METRIC_QUERIES: [MetricQuery; 4] = [
    MetricQuery {
        endpoint: "/total/client",
        result_field: "total",
        title: "Clients",
        display_label: "Total Clients",
        unit: "Client",
        icon: "fa-users",
    },
    MetricQuery {
        endpoint: "/total/order",
        result_field: "total",
        title: "Orders",
        display_label: "Total Orders",
        unit: "Order",
        icon: "fa-inbox",
    },
    MetricQuery {
        endpoint: "/total/product",
        result_field: "total",
        title: "Products",
        display_label: "Total Products",
        unit: "Product",
        icon: "fa-glasses",
    },
    MetricQuery {
        endpoint: "/total/user",
        result_field: "total",
        title: "Users",
        display_label: "Total Users",
        unit: "Users",
        icon: "fa-users",
    },
];

/// Last known total for a card; 0 until a fetch succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricValue(u64);

impl MetricValue {
    pub fn count(self) -> u64 {
        self.0
    }

    /// Next value after a fetch: replaced on success, kept on failure.
    pub fn reconcile(self, query: &MetricQuery, result: Result<u64, ApiError>) -> Self {
        match result {
            Ok(total) => MetricValue(total),
            Err(err) => {
                log::error!("Error fetching {}: {}", query.endpoint, err);
                self
            }
        }
    }
}

pub fn extract_total(query: &MetricQuery, body: &Value) -> Result<u64, ApiError> {
    body.get(query.result_field)
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            ApiError::unknown(format!(
                "{} did not return a non-negative integer `{}`",
                query.endpoint, query.result_field
            ))
        })
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_metric(&self, query: &MetricQuery) -> Result<u64, ApiError> {
        let body = self.client.get_total(query.endpoint).await?;
        extract_total(query, &body)
    }
}
