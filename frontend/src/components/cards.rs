use leptos::*;

/// Headline number with a caption, as shown on the dashboard.
#[component]
pub fn MetricCard(
    title: &'static str,
    label: &'static str,
    unit: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="h-full w-full bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="flex flex-row justify-between items-center px-4 pt-5 sm:px-6">
                <h2 class="text-xl text-fg">{title}</h2>
                <i class=format!("fas {} text-fg-muted", icon)></i>
            </div>
            <div class="flex flex-row justify-between items-center px-4 pb-5 pt-3 sm:px-6">
                <div>
                    <p class="text-lg text-fg">{label}</p>
                    <p class="text-sm text-fg-muted">{move || format!("{} {}", value.get(), unit)}</p>
                </div>
            </div>
        </div>
    }
}
