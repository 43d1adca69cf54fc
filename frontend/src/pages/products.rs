use crate::components::layout::{Layout, SectionTitle};
use leptos::*;

/// Product listing screen; also where a successful create lands.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Layout>
            <SectionTitle title="Products" path="Home / Products" />
            <div class="flex justify-end">
                <a
                    href="/dashboard/products/add"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text"
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Ajouter produit"
                </a>
            </div>
        </Layout>
    }
}
