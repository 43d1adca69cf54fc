use crate::components::layout::{Layout, SectionTitle};
use crate::pages::dashboard::{components::SummaryGrid, view_model::use_dashboard_view_model};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <SectionTitle title="Dashboard" path="Home / Dashboard" />
            <SummaryGrid cards=vm.cards />
        </Layout>
    }
}
