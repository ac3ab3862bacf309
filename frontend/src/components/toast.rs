use crate::state::toast::{use_toasts, Toast, ToastLevel};
use leptos::*;

fn toast_classes(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        ToastLevel::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

fn toast_icon(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "✓",
        ToastLevel::Error => "✕",
    }
}

/// Renders the notification queue from context, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-[9999] flex flex-col items-center gap-2" aria-live="polite">
            <For
                each=move || toasts.toasts().get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "flex items-center gap-3 px-4 py-3 rounded-lg border shadow-md text-sm animate-pop-in {}",
                                toast_classes(toast.level)
                            )
                        >
                            <span aria-hidden="true">{toast_icon(toast.level)}</span>
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Zamknij powiadomienie"
                                class="ml-2 opacity-60 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
