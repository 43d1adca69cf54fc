use crate::api::SelectOption;
use crate::state::form::{dispatch, FieldSpec, FormAction, FormState, InputKind, NumberKind};
use crate::utils::file::first_selected_file;
use leptos::*;
use web_sys::{File, HtmlInputElement};

const INPUT_CLASS: &str =
    "w-full md:p-2 px-2 py-1 max-md:text-xs border border-border rounded bg-surface-elevated";

/// One labelled input bound to `form`, with its inline error slot.
///
/// Select fields read their entries from `options`; file fields hand the
/// chosen file to `on_file`, since reading it is asynchronous.
#[component]
pub fn FormField(
    spec: &'static FieldSpec,
    form: RwSignal<FormState>,
    #[prop(optional, into)] options: Option<Signal<Vec<SelectOption>>>,
    #[prop(optional)] on_file: Option<Callback<Option<File>>>,
) -> impl IntoView {
    let name = spec.name;
    let disabled = move || form.with(FormState::is_submitting);
    let on_edit = move |ev: ev::Event| {
        dispatch(
            form,
            FormAction::Edit {
                field: name,
                value: event_target_value(&ev),
            },
        )
    };

    let control = match spec.kind {
        InputKind::Text | InputKind::Number(_) => {
            let (input_type, step) = match spec.kind {
                InputKind::Number(NumberKind::Float) => ("number", Some("any")),
                InputKind::Number(NumberKind::Integer) => ("number", Some("1")),
                _ => ("text", None),
            };
            view! {
                <input
                    id=name
                    name=name
                    type=input_type
                    step=step
                    placeholder=spec.label
                    class=INPUT_CLASS
                    prop:value=move || form.with(|state| state.value(name).to_string())
                    on:input=on_edit
                    disabled=disabled
                />
            }
            .into_view()
        }
        InputKind::Select { placeholder } => {
            let options = options.unwrap_or_else(|| Signal::derive(Vec::new));
            view! {
                <select
                    id=name
                    name=name
                    class=INPUT_CLASS
                    prop:value=move || form.with(|state| state.value(name).to_string())
                    on:change=on_edit
                    disabled=disabled
                >
                    <option value="">{placeholder}</option>
                    <For
                        each=move || options.get()
                        key=|option: &SelectOption| option.id
                        children=move |option: SelectOption| {
                            view! { <option value=option.id.to_string()>{option.name}</option> }
                        }
                    />
                </select>
            }
            .into_view()
        }
        InputKind::File { accept } => {
            let on_change = move |ev: ev::Event| {
                let input = event_target::<HtmlInputElement>(&ev);
                let file = first_selected_file(&input);
                match on_file {
                    Some(callback) => callback.call(file),
                    None if file.is_none() => {
                        dispatch(form, FormAction::AttachFile { field: name, file: None })
                    }
                    None => log::warn!("no file handler for `{}`", name),
                }
            };
            view! {
                <input
                    id=name
                    name=name
                    type="file"
                    accept=accept
                    class=INPUT_CLASS
                    on:change=on_change
                    disabled=disabled
                />
            }
            .into_view()
        }
    };

    view! {
        <div class="mb-3">
            <label for=name class="block mb-1 max-md:text-sm">{spec.label}</label>
            {control}
            <span class="text-status-error-text text-sm">
                {move || form.with(|state| state.error(name).map(str::to_string))}
            </span>
        </div>
    }
}

/// Banner for errors that do not belong to a single field.
#[component]
pub fn FormErrorBanner(form: RwSignal<FormState>) -> impl IntoView {
    let message = move || form.with(|state| state.form_error().map(str::to_string));
    view! {
        <Show when=move || message().is_some()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2" role="alert">
                <p class="text-sm">{move || message().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
