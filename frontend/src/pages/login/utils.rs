use crate::api::LoginRequest;

pub const REQUIRED_MESSAGE: &str = "To pole jest wymagane";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Zalogowano pomyślnie";
pub const LOGIN_FAILURE_MESSAGE: &str = "Nie udało się zalogować";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    pub fn id(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Hasło",
        }
    }

    fn value<'a>(&self, request: &'a LoginRequest) -> &'a str {
        match self {
            LoginField::Email => &request.email,
            LoginField::Password => &request.password,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: LoginField) -> Option<&str> {
        match field {
            LoginField::Email => self.email.as_deref(),
            LoginField::Password => self.password.as_deref(),
        }
    }

    pub fn set(&mut self, field: LoginField, message: Option<String>) {
        match field {
            LoginField::Email => self.email = message,
            LoginField::Password => self.password = message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// `required` rule: only the empty string is missing; whitespace is a value.
pub fn validate_required(value: &str) -> Option<String> {
    value.is_empty().then(|| REQUIRED_MESSAGE.to_string())
}

pub fn validate_credentials(request: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in LoginField::ALL {
        errors.set(field, validate_required(field.value(request)));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}
