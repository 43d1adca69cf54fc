use crate::state::notification::use_notifications;
use leptos::*;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/dashboard", "Dashboard"),
    ("/dashboard/products", "Products"),
    ("/dashboard/products/add", "Ajouter produit"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated border-b border-border">
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-4 h-14">
                <a href="/dashboard" class="text-lg font-bold text-fg">"Back Office"</a>
                <ul class="flex gap-1">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href class="rounded px-3 py-2 text-sm text-fg-muted hover:text-fg hover:bg-surface">
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-surface">
            <Header/>
            <main class="mx-auto w-full max-w-6xl flex-1 px-4 py-6">{children()}</main>
            <Toast/>
        </div>
    }
}

#[component]
pub fn SectionTitle(#[prop(into)] title: String, #[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="section-title-div border-b py-3 border-border mb-6">
            <h1 class="section-title-title text-6xl font-bold text-center mb-5 max-sm:text-5xl text-fg">{title}</h1>
            <p class="section-title-path text-lg text-center text-fg-muted">{path}</p>
        </div>
    }
}

/// Renders the current app-wide notification, if any.
#[component]
pub fn Toast() -> impl IntoView {
    let notifications = use_notifications();
    let current = notifications.current();
    view! {
        <div class="fixed bottom-4 right-4 z-50" aria-live="polite">
            {move || {
                current
                    .get()
                    .map(|notification| {
                        let id = notification.id;
                        view! {
                            <div
                                class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded shadow-lg animate-pop-in"
                                role="status"
                            >
                                <div class="flex items-start gap-3">
                                    <i class="fas fa-check-circle mt-0.5"></i>
                                    <div>
                                        <p class="font-semibold">{notification.title}</p>
                                        <p class="text-sm">{notification.description}</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="ml-2 text-sm opacity-70 hover:opacity-100"
                                        aria-label="Dismiss"
                                        on:click=move |_| notifications.dismiss(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
