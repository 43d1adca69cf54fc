use crate::{components::cards::MetricCard, pages::dashboard::view_model::MetricCardState};
use leptos::*;

#[component]
pub fn SummaryGrid(cards: Vec<MetricCardState>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-4">
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <MetricCard
                            title=card.query.title
                            label=card.query.display_label
                            unit=card.query.unit
                            icon=card.query.icon
                            value=card.count()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
