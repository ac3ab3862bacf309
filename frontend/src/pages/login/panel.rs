use crate::pages::login::{
    components::form::LoginForm,
    utils::LoginField,
    view_model::{use_login_view_model, LoginViewModel},
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    view! { <LoginPanelView vm=vm /> }
}

#[component]
pub fn LoginPanelView(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;

    let email_input = Callback::new(move |value: String| form.set_field(LoginField::Email, value));
    let password_input =
        Callback::new(move |value: String| form.set_field(LoginField::Password, value));

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.submit())
    };
    let toggle_password = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.toggle_password_visibility())
    };
    let activate = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.navigate_to_activation())
    };

    view! {
        <LoginForm
            email=form.email.into()
            password=form.password.into()
            errors=form.errors.into()
            password_visible=form.password_visible.into()
            submitting=vm.is_submitting()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
            on_toggle_password=toggle_password
            on_activate=activate
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        pages::login::repository::LoginRepository,
        state::{auth::AuthState, toast::ToastContext},
        test_support::{
            helpers::{recording_navigator, FakeAuthClient},
            ssr::render_to_string,
        },
    };
    use std::rc::Rc;

    #[test]
    fn panel_renders_view_model_state() {
        let html = render_to_string(|| {
            let (_auth, set_auth) = create_signal(AuthState::default());
            let (navigate, _visited) = recording_navigator();
            let vm = LoginViewModel::new(
                LoginRepository::new_with_client(Rc::new(FakeAuthClient::succeeding())),
                set_auth,
                ToastContext::new(),
                navigate,
            );
            vm.form.set_field(LoginField::Password, "secret".into());
            assert!(vm.start_submission().is_none());
            view! { <LoginPanelView vm=vm /> }
        });
        assert!(html.contains("To pole jest wymagane"));
        assert!(html.contains("Zaloguj się"));
    }
}
