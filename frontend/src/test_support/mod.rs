#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::{ApiError, AuthClient, LoginRequest, LoginResponse, UserResponse};
    use async_trait::async_trait;
    use leptos::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    pub fn sample_user(email: &str) -> UserResponse {
        UserResponse {
            id: "u-1".into(),
            email: email.into(),
            full_name: Some("Anna Kowalska".into()),
        }
    }

    pub fn sample_session(email: &str) -> LoginResponse {
        LoginResponse {
            access_token: "access-token".into(),
            refresh_token: Some("refresh-token".into()),
            user: sample_user(email),
        }
    }

    enum Outcome {
        Succeed,
        Fail(ApiError),
    }

    /// Scripted `AuthClient` that records every call.
    pub struct FakeAuthClient {
        outcome: Outcome,
        requests: RefCell<Vec<LoginRequest>>,
        logouts: Cell<usize>,
        probe: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl FakeAuthClient {
        pub fn succeeding() -> Self {
            Self::with_outcome(Outcome::Succeed)
        }

        pub fn failing(error: ApiError) -> Self {
            Self::with_outcome(Outcome::Fail(error))
        }

        fn with_outcome(outcome: Outcome) -> Self {
            Self {
                outcome,
                requests: RefCell::new(Vec::new()),
                logouts: Cell::new(0),
                probe: RefCell::new(None),
            }
        }

        /// Runs `probe` while a login call is in flight.
        pub fn set_probe(&self, probe: impl Fn() + 'static) {
            *self.probe.borrow_mut() = Some(Box::new(probe));
        }

        pub fn login_requests(&self) -> Vec<LoginRequest> {
            self.requests.borrow().clone()
        }

        pub fn login_calls(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn logout_calls(&self) -> usize {
            self.logouts.get()
        }
    }

    #[async_trait(?Send)]
    impl AuthClient for FakeAuthClient {
        async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
            if let Some(probe) = self.probe.borrow().as_ref() {
                probe();
            }
            let email = request.email.clone();
            self.requests.borrow_mut().push(request);
            match &self.outcome {
                Outcome::Succeed => Ok(sample_session(&email)),
                Outcome::Fail(error) => Err(error.clone()),
            }
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logouts.set(self.logouts.get() + 1);
            Ok(())
        }
    }

    /// Navigation callback that records every destination it is asked for.
    pub fn recording_navigator() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let navigate = Callback::new(move |path: String| sink.borrow_mut().push(path));
        (navigate, visited)
    }
}
