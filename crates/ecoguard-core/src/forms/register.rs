use serde::Serialize;

use super::{require_filled, require_matching, Destination, FormSubmission, SuccessMarker};
use crate::config::ApiConfig;
use crate::error::FormResult;

/// Registration form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /register/`. The confirmation never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSubmission {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }
}

impl FormSubmission for RegisterForm {
    type Body = RegistrationSubmission;

    fn kind(&self) -> &'static str {
        "register"
    }

    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str {
        &config.endpoints.register
    }

    // The backend answers with the created user record.
    fn success_marker(&self, _config: &ApiConfig) -> SuccessMarker {
        SuccessMarker::HasField("id")
    }

    fn destination(&self) -> Option<Destination> {
        Some(Destination::Login)
    }

    fn rejection_notice(&self) -> &'static str {
        "Не удалось завершить регистрацию."
    }

    fn build(&self) -> FormResult<RegistrationSubmission> {
        require_filled(&[
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.first_name,
            &self.last_name,
        ])?;
        require_matching(&self.password, &self.confirm_password)?;
        Ok(RegistrationSubmission {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormError, FILL_ALL_FIELDS, PASSWORDS_DIFFER};

    fn filled() -> RegisterForm {
        let mut form = RegisterForm::default();
        form.set_email("a@b.com");
        form.set_password("secret");
        form.set_confirm_password("secret");
        form.set_first_name("Анна");
        form.set_last_name("Иванова");
        form
    }

    #[test]
    fn test_missing_confirmation() {
        let mut form = filled();
        form.set_confirm_password("");
        assert_eq!(
            form.build(),
            Err(FormError::Validation(FILL_ALL_FIELDS.to_string()))
        );
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut form = filled();
        form.set_confirm_password("secret2");
        assert_eq!(
            form.build(),
            Err(FormError::Validation(PASSWORDS_DIFFER.to_string()))
        );
    }

    #[test]
    fn test_body_omits_confirmation() {
        let body = serde_json::to_value(filled().build().unwrap()).unwrap();
        assert!(body.get("confirm_password").is_none());
        assert_eq!(body["first_name"], "Анна");
        assert_eq!(body["last_name"], "Иванова");
    }
}
