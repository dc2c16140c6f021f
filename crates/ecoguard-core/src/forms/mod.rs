//! Form state and submission payloads.
//!
//! Each form is a plain struct of controlled values with setters that accept
//! anything, including empty strings. Validation happens only when a form is
//! turned into its request body by [`FormSubmission::build`].

mod contact;
mod login;
mod recovery;
mod register;
mod report;

pub use contact::{ContactForm, ContactMessage};
pub use login::{CredentialSubmission, LoginForm};
pub use recovery::{
    PasswordRecoveryForm, PasswordResetSubmission, RecoveryBody, RecoveryStep,
    VerificationCodeRequest,
};
pub use register::{RegisterForm, RegistrationSubmission};
pub use report::{IncidentReport, ReportForm};

use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{FormError, FormResult, FILL_ALL_FIELDS, PASSWORDS_DIFFER};

/// Where a successful submission sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Statistics,
    Contacts,
    Report,
    Login,
    ForgotPassword,
    PersonalAccount,
    Register,
}

impl Destination {
    /// URL path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Statistics => "/statistics",
            Destination::Contacts => "/contacts",
            Destination::Report => "/zayvka",
            Destination::Login => "/login",
            Destination::ForgotPassword => "/forgotpassword",
            Destination::PersonalAccount => "/personalacc",
            Destination::Register => "/register",
        }
    }
}

/// How a 2xx payload is recognized as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessMarker {
    /// `message` must equal this string exactly
    Message(String),
    /// The payload must carry this key (e.g. the `id` of a created record)
    HasField(&'static str),
}

impl SuccessMarker {
    pub fn matches(&self, payload: &Value) -> bool {
        match self {
            SuccessMarker::Message(expected) => payload
                .get("message")
                .and_then(Value::as_str)
                .is_some_and(|m| m == expected),
            SuccessMarker::HasField(key) => payload.get(*key).is_some_and(|v| !v.is_null()),
        }
    }
}

/// A form that can be validated and posted by the submission controller.
pub trait FormSubmission {
    /// JSON request body.
    type Body: Serialize;

    /// Short name used in log fields.
    fn kind(&self) -> &'static str;

    /// Endpoint path the body is posted to.
    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str;

    /// How the response payload is recognized as success.
    fn success_marker(&self, config: &ApiConfig) -> SuccessMarker;

    /// Route to open after success; `None` keeps the user on the page.
    fn destination(&self) -> Option<Destination>;

    /// Notice shown when a 2xx response lacks the success marker.
    fn rejection_notice(&self) -> &'static str;

    /// Validate the current values and build the request body.
    fn build(&self) -> FormResult<Self::Body>;
}

/// Fail with the "fill all fields" notice if any value is empty.
pub(crate) fn require_filled(values: &[&str]) -> FormResult<()> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(FormError::Validation(FILL_ALL_FIELDS.to_string()));
    }
    Ok(())
}

pub(crate) fn require_matching(password: &str, confirmation: &str) -> FormResult<()> {
    if password != confirmation {
        return Err(FormError::Validation(PASSWORDS_DIFFER.to_string()));
    }
    Ok(())
}
