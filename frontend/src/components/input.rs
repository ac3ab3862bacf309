use crate::components::error::FieldErrorMessage;
use leptos::*;

/// Labelled text input bound to a signal, showing the field's validation error.
#[component]
pub fn Input(
    id: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] input_type: Option<MaybeSignal<&'static str>>,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    let input_type = input_type.unwrap_or(MaybeSignal::Static("text"));
    let error = Signal::derive(move || error.get());
    let error_id = format!("{}-error", id);
    let has_error = move || error.with(|e| e.is_some());

    view! {
        <div class="w-full relative">
            <label for=id class="block text-sm font-medium text-fg mb-1">
                {label}
                {required.then(|| view! { <span class="text-status-error-text">{" *"}</span> })}
            </label>
            <input
                id=id
                name=id
                type=move || input_type.get()
                autocomplete=autocomplete
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=error_id.clone()
                class=move || {
                    format!(
                        "w-full p-4 font-light bg-surface border-2 rounded-md outline-none transition disabled:opacity-70 disabled:cursor-not-allowed {}",
                        if has_error() {
                            "border-status-error-border focus:border-status-error-border"
                        } else {
                            "border-border focus:border-fg"
                        }
                    )
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldErrorMessage id=error_id message=error />
        </div>
    }
}
