use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        dashboard::DashboardPage,
        products::ProductsPage,
        products_add::{view_model::PRODUCTS_ROUTE, ProductsAddPage},
    },
    state::notification::provide_notifications,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_notifications();
    view! {
        <Title text="Back Office" />
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path=PRODUCTS_ROUTE view=ProductsPage/>
                <Route path="/dashboard/products/add" view=ProductsAddPage/>
            </Routes>
        </Router>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;

    fn render_at(path: &str) -> String {
        let runtime = create_runtime();
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: format!("http://localhost{path}"),
        }));
        let html = app_root().into_view().render_to_string().to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn post_create_target_renders_the_listing() {
        with_local_runtime_async(|| async {
            let html = render_at(PRODUCTS_ROUTE);
            assert!(html.contains("Home / Products"));
            assert!(!html.contains("name=\"price\""));
        });
    }

    #[test]
    fn add_route_renders_the_product_form() {
        with_local_runtime_async(|| async {
            let html = render_at("/dashboard/products/add");
            assert!(html.contains("name=\"price\""));
            assert!(!html.contains("Home / Products"));
        });
    }
}
