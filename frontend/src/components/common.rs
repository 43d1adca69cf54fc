use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-brand text-white hover:bg-brand-dark shadow",
            ButtonVariant::Ghost => "border border-border text-fg-muted hover:text-fg hover:bg-surface",
        }
    }
}

fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let mut class = String::from(
        "inline-flex items-center gap-2 rounded px-4 py-2 text-sm font-medium disabled:opacity-50 disabled:cursor-not-allowed ",
    );
    class.push_str(variant.classes());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Action button. While `loading` it shows a spinner and refuses clicks.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, &class);
    view! {
        <button
            class=class
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <i class="fas fa-spinner animate-spin"></i>
            </Show>
            {children()}
        </button>
    }
}

/// Steps back one entry in the browser history.
#[component]
pub fn ReturnBackButton() -> impl IntoView {
    let go_back = move |_| {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(err) = history.back() {
            log::warn!("history.back() failed: {:?}", err);
        }
    };
    view! {
        <button
            type="button"
            class="inline-flex items-center justify-center p-2 mr-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
            aria-label="Back"
            on:click=go_back
        >
            <i class="fas fa-arrow-left"></i>
        </button>
    }
}
