use leptos::*;

/// Inline validation message rendered under a form field.
#[component]
pub fn FieldErrorMessage(
    #[prop(into)] id: String,
    #[prop(into)] message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p id=id.clone() class="mt-1 text-sm text-status-error-text" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
