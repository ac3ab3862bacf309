use crate::{components::common::ButtonVariant, router::LOGIN_PATH};
use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

/// Landing screen for the "activate account" link on the login form.
#[component]
pub fn ActivatePage() -> impl IntoView {
    view! {
        <Title text="Aktywacja konta | CSLSchedule"/>
        <div class="min-h-screen flex items-center justify-center bg-surface-inverse px-4">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated border border-border shadow-lg p-6 space-y-4">
                <h1 class="text-2xl font-bold text-fg">{"Aktywuj konto"}</h1>
                <p class="text-sm text-fg-muted">
                    {"Otwórz link aktywacyjny z wiadomości e-mail, aby ustawić hasło. Po aktywacji możesz zalogować się do CSLSchedule."}
                </p>
                <A
                    href=LOGIN_PATH
                    class=format!(
                        "inline-flex w-full justify-center rounded-lg px-3 py-1 text-sm {}",
                        ButtonVariant::Outline.classes()
                    )
                >
                    {"Wróć do logowania"}
                </A>
            </div>
        </div>
    }
}
