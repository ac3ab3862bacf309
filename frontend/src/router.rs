use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, toast::Toaster},
    pages::{activate::ActivatePage, dashboard::DashboardPage, login::LoginPage},
    state::{auth::AuthProvider, toast::ToastContext},
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ACTIVATE_PATH: &str = "/activate";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    provide_context(ToastContext::new());
    view! {
        <AuthProvider>
            <Router>
                <Toaster/>
                <Routes>
                    <Route path=HOME_PATH view=LoginPage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
                    <Route path=ACTIVATE_PATH view=ActivatePage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::{helpers::sample_user, ssr::render_to_string};

    #[test]
    fn protected_dashboard_is_hidden_from_signed_out_users() {
        let html = render_to_string(|| {
            provide_context(create_signal(AuthState::default()));
            view! { <ProtectedDashboard/> }
        });
        assert!(!html.contains("Witaj,"));
    }

    #[test]
    fn protected_dashboard_renders_for_signed_in_users() {
        let html = render_to_string(|| {
            provide_context(create_signal(AuthState {
                user: Some(sample_user("a@b.com")),
                is_authenticated: true,
                loading: false,
            }));
            view! { <ProtectedDashboard/> }
        });
        assert!(html.contains("Witaj, Anna Kowalska!"));
    }
}
