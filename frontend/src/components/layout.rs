use crate::{
    router::LOGIN_PATH,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    {
        create_effect(move |_| {
            if let Some(result) = logout_action.value().get() {
                if let Err(err) = result {
                    log::warn!("Logout request failed, local session cleared: {}", err);
                }
                if let Ok(win) = crate::utils::storage::window() {
                    let _ = win.location().set_href(LOGIN_PATH);
                }
            }
        });
    }
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">
                        <span class="text-brand">"CSL"</span>"Schedule"
                    </h1>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-fg-muted">{display_name}</span>
                        <button
                            type="button"
                            class="text-sm font-medium text-fg-muted hover:text-fg disabled:opacity-50"
                            disabled=move || logout_pending.get()
                            on:click=on_logout
                        >
                            "Wyloguj"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">{children()}</div>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
