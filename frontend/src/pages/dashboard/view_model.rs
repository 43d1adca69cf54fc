use super::repository::{DashboardRepository, MetricQuery, MetricValue, METRIC_QUERIES};
use crate::api::ApiClient;
use crate::utils::task::spawn_scoped;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct MetricCardState {
    pub query: &'static MetricQuery,
    pub value: RwSignal<MetricValue>,
}

impl MetricCardState {
    pub fn count(&self) -> Signal<u64> {
        let value = self.value;
        Signal::derive(move || value.get().count())
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    pub cards: Vec<MetricCardState>,
}

impl DashboardViewModel {
    /// Starts one fetch per metric. Each card owns its value; a slow or
    /// failing endpoint never holds up the others.
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::new_with_client(Rc::new(api));

        let cards = METRIC_QUERIES
            .iter()
            .map(|query| {
                let value = create_rw_signal(MetricValue::default());
                let repository = repository.clone();
                spawn_scoped(async move {
                    let result = repository.fetch_metric(query).await;
                    value.update(|current| *current = current.reconcile(query, result));
                });
                MetricCardState { query, value }
            })
            .collect();

        Self { cards }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
