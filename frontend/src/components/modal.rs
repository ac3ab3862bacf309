use crate::components::common::{Button, ButtonVariant};
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::*;

/// Dialog shell with a body, an action button that submits, and an optional footer.
///
/// The body sits inside a `<form>`, so pressing Enter in a field runs the same
/// `on_submit` as the action button. Browser-side validation is off; callers
/// validate and render their own messages.
#[component]
pub fn Modal(
    #[prop(into)] action_label: String,
    on_submit: Callback<()>,
    #[prop(into)] body: View,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] footer: Option<View>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(into, default = MaybeSignal::Static(true))] is_open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get());
    let is_open = Signal::derive(move || is_open.get());
    let action_label = store_value(action_label);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        on_submit.call(());
    };
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            if let Some(close) = on_close {
                ev.prevent_default();
                close.call(());
            }
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="relative z-50 flex items-center justify-center w-full"
                role="dialog"
                aria-modal="true"
                on:keydown=handle_keydown
            >
                <div class="relative w-full md:w-4/6 lg:w-3/6 xl:w-2/5 my-6 mx-auto">
                    <form
                        class="relative flex flex-col w-full rounded-lg shadow-lg bg-surface-elevated border border-border outline-none"
                        novalidate=true
                        on:submit=handle_submit
                    >
                        {title.clone().map(|title| view! {
                            <div class="flex items-center justify-center p-6 rounded-t border-b border-border">
                                <h2 class="text-lg font-semibold text-fg">{title}</h2>
                            </div>
                        })}
                        {on_close.map(|close| view! {
                            <button
                                type="button"
                                aria-label="Zamknij"
                                class="absolute right-6 top-6 text-fg-muted hover:text-fg"
                                on:click=move |_| close.call(())
                            >
                                {"✕"}
                            </button>
                        })}
                        <div class="relative p-6 flex-auto">{body.clone()}</div>
                        <div class="flex flex-col gap-2 p-6 pt-0">
                            <Button variant=ButtonVariant::Primary disabled=disabled attr:type="submit">
                                {action_label.get_value()}
                            </Button>
                            {footer.clone()}
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
