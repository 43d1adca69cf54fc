use crate::components::{common::ReturnBackButton, layout::Layout};
use crate::pages::products_add::{
    components::ProductForm, view_model::use_products_add_view_model,
};
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn ProductsAddPage() -> impl IntoView {
    let navigate = use_navigate();
    let vm = use_products_add_view_model(move |path| navigate(path, Default::default()));

    view! {
        <Layout>
            <div class="flex items-center mb-6">
                <ReturnBackButton />
                <h1 class="text-3xl font-bold text-fg">"Ajouter produit"</h1>
            </div>
            <ProductForm vm=vm />
        </Layout>
    }
}
