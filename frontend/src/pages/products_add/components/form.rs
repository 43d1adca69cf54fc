use crate::components::{
    common::{Button, ButtonVariant},
    forms::{FormErrorBanner, FormField},
};
use crate::pages::products_add::{schema::PRODUCT_FORM, view_model::ProductsAddViewModel};
use crate::state::form::InputKind;
use leptos::*;
use web_sys::File;

#[component]
pub fn ProductForm(vm: ProductsAddViewModel) -> impl IntoView {
    let on_file = Callback::new(move |file: Option<File>| vm.attach_file(file));
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let fields = PRODUCT_FORM
        .fields()
        .iter()
        .map(|spec| match (spec.kind, vm.options_for(spec.name)) {
            (_, Some(options)) => {
                view! { <FormField spec=spec form=vm.form options=options /> }.into_view()
            }
            (InputKind::File { .. }, None) => {
                view! { <FormField spec=spec form=vm.form on_file=on_file /> }.into_view()
            }
            (_, None) => view! { <FormField spec=spec form=vm.form /> }.into_view(),
        })
        .collect_view();

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 max-w-2xl" on:submit=on_submit>
            <FormErrorBanner form=vm.form />
            {fields}
            <div class="flex justify-end gap-2 mt-4">
                <Button
                    variant=ButtonVariant::Ghost
                    attr:type="reset"
                    on:click=move |_| vm.reset()
                    disabled=vm.is_submitting()
                >
                    "Reset"
                </Button>
                <Button attr:type="submit" loading=vm.is_submitting()>
                    "Create"
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_api;
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;

    #[test]
    fn renders_every_product_field() {
        with_local_runtime_async(|| async {
            let runtime = create_runtime();
            let server = MockServer::start_async().await;
            provide_api(&server);
            let vm = ProductsAddViewModel::new(|_| {});

            let html = view! { <ProductForm vm=vm /> }
                .into_view()
                .render_to_string()
                .to_string();

            for label in ["Nom", "Price", "Quantity KG", "Categorie", "Producer", "Image"] {
                assert!(html.contains(label), "{label}");
            }
            assert!(html.contains("Select a category"));
            assert!(html.contains("Select a producer"));
            assert!(html.contains(".jpg,.jpeg,.png"));
            assert!(html.contains("Create"));
            runtime.dispose();
        });
    }
}
