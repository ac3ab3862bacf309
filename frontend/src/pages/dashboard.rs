use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| format!("Witaj, {}!", user.display_name()))
            .unwrap_or_else(|| "Witaj!".to_string())
    };

    view! {
        <Title text="Panel | CSLSchedule"/>
        <Layout>
            <div class="space-y-2">
                <h1 class="text-2xl font-bold text-fg">{greeting}</h1>
                <p class="text-sm text-fg-muted">{"Jesteś zalogowany w CSLSchedule."}</p>
            </div>
        </Layout>
    }
}
