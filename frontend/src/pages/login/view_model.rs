use super::{
    repository::LoginRepository,
    utils::{self, FieldErrors, LoginField},
};
use crate::{
    api::LoginRequest,
    router::{ACTIVATE_PATH, DASHBOARD_PATH},
    state::{
        auth::{self, AuthState},
        toast::{use_toasts, ToastContext},
    },
};
use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_visible: RwSignal<bool>,
    pub errors: RwSignal<FieldErrors>,
    /// Set by the first submit; from then on every edit re-validates its field.
    pub attempted: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            password_visible: create_rw_signal(false),
            errors: create_rw_signal(FieldErrors::default()),
            attempted: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn field(&self, field: LoginField) -> RwSignal<String> {
        match field {
            LoginField::Email => self.email,
            LoginField::Password => self.password,
        }
    }

    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn set_field(&self, field: LoginField, value: String) {
        if self.attempted.get_untracked() {
            let error = utils::validate_required(&value);
            self.errors.update(|errors| errors.set(field, error));
        }
        self.field(field).set(value);
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub phase: RwSignal<SubmitPhase>,
    repo: LoginRepository,
    set_auth: WriteSignal<AuthState>,
    toasts: ToastContext,
    navigate: Callback<String>,
}

impl LoginViewModel {
    pub fn new(
        repo: LoginRepository,
        set_auth: WriteSignal<AuthState>,
        toasts: ToastContext,
        navigate: Callback<String>,
    ) -> Self {
        Self {
            form: LoginFormState::default(),
            phase: create_rw_signal(SubmitPhase::Idle),
            repo,
            set_auth,
            toasts,
            navigate,
        }
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get() == SubmitPhase::Submitting)
    }

    pub fn submit(&self) {
        if let Some(request) = self.start_submission() {
            let vm = self.clone();
            spawn_local(async move { vm.resolve_submission(request).await });
        }
    }

    /// Validates and enters `Submitting`. Returns the credentials to send, or
    /// `None` when the form is invalid or a submission is already in flight.
    pub fn start_submission(&self) -> Option<LoginRequest> {
        if self.phase.get_untracked() == SubmitPhase::Submitting {
            return None;
        }
        self.form.attempted.set(true);

        let request = self.form.credentials();
        if let Err(errors) = utils::validate_credentials(&request) {
            self.form.errors.set(errors);
            return None;
        }

        self.form.errors.set(FieldErrors::default());
        self.phase.set(SubmitPhase::Submitting);
        Some(request)
    }

    /// Awaits the single authentication outcome and returns to `Idle`.
    pub async fn resolve_submission(&self, request: LoginRequest) {
        match auth::login_request(request, &self.repo, self.set_auth).await {
            Ok(session) => {
                log::debug!("Signed in as {}", session.user.id);
                self.toasts.success(utils::LOGIN_SUCCESS_MESSAGE);
                self.phase.set(SubmitPhase::Idle);
                self.navigate.call(DASHBOARD_PATH.to_string());
            }
            Err(err) => {
                log::error!("Error during login: {} (code: {})", err, err.code);
                self.toasts.error(utils::LOGIN_FAILURE_MESSAGE);
                self.phase.set(SubmitPhase::Idle);
            }
        }
    }

    pub fn toggle_password_visibility(&self) {
        self.form.password_visible.update(|visible| *visible = !*visible);
    }

    pub fn navigate_to_activation(&self) {
        self.navigate.call(ACTIVATE_PATH.to_string());
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let (_auth, set_auth) = auth::use_auth();
    let navigate = leptos_router::use_navigate();
    LoginViewModel::new(
        LoginRepository::from_context(),
        set_auth,
        use_toasts(),
        Callback::new(move |path: String| navigate(&path, Default::default())),
    )
}
