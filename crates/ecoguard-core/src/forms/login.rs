use serde::Serialize;

use super::{require_filled, Destination, FormSubmission, SuccessMarker};
use crate::config::ApiConfig;
use crate::error::FormResult;

/// Login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Body of `POST /login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubmission {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }
}

impl FormSubmission for LoginForm {
    type Body = CredentialSubmission;

    fn kind(&self) -> &'static str {
        "login"
    }

    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str {
        &config.endpoints.login
    }

    fn success_marker(&self, config: &ApiConfig) -> SuccessMarker {
        SuccessMarker::Message(config.markers.login.clone())
    }

    fn destination(&self) -> Option<Destination> {
        Some(Destination::PersonalAccount)
    }

    fn rejection_notice(&self) -> &'static str {
        "Неверный email или пароль!"
    }

    fn build(&self) -> FormResult<CredentialSubmission> {
        require_filled(&[&self.email, &self.password])?;
        Ok(CredentialSubmission {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }
}
