//! Two-step password recovery: request a mailed code, then reset with it.

use serde::Serialize;

use super::{require_filled, require_matching, Destination, FormSubmission, SuccessMarker};
use crate::config::ApiConfig;
use crate::error::FormResult;
use crate::field::FieldName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryStep {
    /// Only the email is shown; submit mails a verification code
    #[default]
    RequestCode,
    /// Code and new password are shown; submit replaces the password
    ResetPassword,
}

/// Password recovery form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordRecoveryForm {
    pub step: RecoveryStep,
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Body of `POST /send-verification-code/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationCodeRequest {
    pub email: String,
}

/// Body of `POST /reset-password/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetSubmission {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecoveryBody {
    Code(VerificationCodeRequest),
    Reset(PasswordResetSubmission),
}

impl PasswordRecoveryForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_new_password(&mut self, new_password: impl Into<String>) {
        self.new_password = new_password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    /// Move to the code-entry step once the code has been sent.
    pub fn advance(&mut self) {
        self.step = RecoveryStep::ResetPassword;
    }

    /// Go back to requesting a code, e.g. after the code expired.
    ///
    /// Returns the fields that were emptied; the email is kept.
    pub fn restart(&mut self) -> [FieldName; 3] {
        self.step = RecoveryStep::RequestCode;
        self.code.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        [FieldName::Code, FieldName::Password, FieldName::ConfirmPassword]
    }
}

impl FormSubmission for PasswordRecoveryForm {
    type Body = RecoveryBody;

    fn kind(&self) -> &'static str {
        match self.step {
            RecoveryStep::RequestCode => "send-code",
            RecoveryStep::ResetPassword => "reset-password",
        }
    }

    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str {
        match self.step {
            RecoveryStep::RequestCode => &config.endpoints.send_code,
            RecoveryStep::ResetPassword => &config.endpoints.reset_password,
        }
    }

    fn success_marker(&self, config: &ApiConfig) -> SuccessMarker {
        match self.step {
            RecoveryStep::RequestCode => SuccessMarker::Message(config.markers.code_sent.clone()),
            RecoveryStep::ResetPassword => {
                SuccessMarker::Message(config.markers.password_reset.clone())
            }
        }
    }

    fn destination(&self) -> Option<Destination> {
        match self.step {
            RecoveryStep::RequestCode => None,
            RecoveryStep::ResetPassword => Some(Destination::Login),
        }
    }

    fn rejection_notice(&self) -> &'static str {
        match self.step {
            RecoveryStep::RequestCode => "Не удалось отправить код подтверждения.",
            RecoveryStep::ResetPassword => "Не удалось сбросить пароль.",
        }
    }

    fn build(&self) -> FormResult<RecoveryBody> {
        match self.step {
            RecoveryStep::RequestCode => {
                require_filled(&[&self.email])?;
                Ok(RecoveryBody::Code(VerificationCodeRequest {
                    email: self.email.clone(),
                }))
            }
            RecoveryStep::ResetPassword => {
                require_filled(&[
                    &self.email,
                    &self.code,
                    &self.new_password,
                    &self.confirm_password,
                ])?;
                require_matching(&self.new_password, &self.confirm_password)?;
                Ok(RecoveryBody::Reset(PasswordResetSubmission {
                    email: self.email.clone(),
                    code: self.code.clone(),
                    new_password: self.new_password.clone(),
                }))
            }
        }
    }
}
