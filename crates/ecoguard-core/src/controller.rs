//! Submission controller.
//!
//! Drives one form through validate → single request → interpret → navigate.
//!
//! ```text
//!            submit (valid)                 success marker
//!   Idle ─────────────────────▶ Submitting ────────────────▶ Succeeded
//!    ▲  ▲                            │                          │
//!    │  └────── submit (valid) ── Failed ◀── anything else ─────┘ (no destination:
//!    └──────────────────────────────────────────────────────────    back to Idle)
//! ```
//!
//! Submits arriving while a request is in flight, or after a submission has
//! navigated away, are ignored with [`FormError::InFlight`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::api::{ApiClient, ServerResponse};
use crate::error::{FormError, FormResult};
use crate::forms::{Destination, FormSubmission};

/// Route transition capability supplied by the page shell.
pub trait Navigate {
    fn navigate(&self, to: Destination);
}

impl<F> Navigate for F
where
    F: Fn(Destination),
{
    fn navigate(&self, to: Destination) {
        self(to)
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a new submission may start from this state.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    /// Route the controller navigated to, if any
    pub destination: Option<Destination>,
    /// Payload of the success response
    pub payload: Value,
}

/// Validates and posts forms, guarding against overlapping submissions.
///
/// Clones share state, so a clone moved into a spawned task still sees
/// submissions started from the original.
#[derive(Debug, Clone)]
pub struct SubmissionController {
    api: ApiClient,
    state: Arc<Mutex<SubmissionState>>,
}

impl SubmissionController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Submit `form`, navigating on recognized success.
    ///
    /// Validation failures return before any request and leave the state
    /// unchanged. The form itself is never modified.
    #[tracing::instrument(skip_all, fields(form = form.kind()))]
    pub async fn submit<F, N>(&self, form: &F, navigator: &N) -> FormResult<Submitted>
    where
        F: FormSubmission,
        N: Navigate + ?Sized,
    {
        let body = {
            let mut state = self.state.lock();
            if !state.accepts_submit() {
                tracing::debug!(state = ?*state, "submit ignored");
                return Err(FormError::InFlight);
            }
            let body = form.build()?;
            *state = SubmissionState::Submitting;
            body
        };

        let config = self.api.config();
        let result = self.api.post_json(form.endpoint(config), &body).await;

        match result {
            Ok(response) if response.is_success() && form.success_marker(config).matches(&response.payload) => {
                let destination = form.destination();
                self.set_state(match destination {
                    Some(_) => SubmissionState::Succeeded,
                    None => SubmissionState::Idle,
                });
                tracing::info!(status = response.status, ?destination, "submission succeeded");
                if let Some(to) = destination {
                    navigator.navigate(to);
                }
                Ok(Submitted {
                    destination,
                    payload: response.payload,
                })
            }
            Ok(response) => {
                self.set_state(SubmissionState::Failed);
                let err = rejection(form, &response);
                tracing::warn!(status = response.status, "submission rejected");
                Err(err)
            }
            Err(err) => {
                self.set_state(SubmissionState::Failed);
                tracing::error!(error = %err, "submission failed");
                Err(err)
            }
        }
    }

    fn set_state(&self, next: SubmissionState) {
        *self.state.lock() = next;
    }
}

/// Turn a response without the success marker into a notice-bearing error.
fn rejection<F: FormSubmission>(form: &F, response: &ServerResponse) -> FormError {
    let detail = if response.is_success() {
        None
    } else {
        response.detail()
    };
    FormError::Rejected {
        status: response.status,
        detail: detail
            .map(|d| format!("Ошибка: {d}"))
            .unwrap_or_else(|| form.rejection_notice().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::forms::LoginForm;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_accepts_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Failed.accepts_submit());
        assert!(!SubmissionState::Submitting.accepts_submit());
        assert!(!SubmissionState::Succeeded.accepts_submit());
    }

    #[test]
    fn test_closure_navigator() {
        let seen = RefCell::new(Vec::new());
        let nav = |to: Destination| seen.borrow_mut().push(to);
        nav.navigate(Destination::Login);
        assert_eq!(*seen.borrow(), vec![Destination::Login]);
    }

    #[test]
    fn test_rejection_of_2xx_uses_form_notice() {
        let response = ServerResponse {
            status: 200,
            payload: json!({"message": "bad", "detail": "ignored"}),
        };
        let err = rejection(&LoginForm::default(), &response);
        assert_eq!(err.notice(), "Неверный email или пароль!");
    }

    #[test]
    fn test_rejection_of_error_status_uses_server_detail() {
        let response = ServerResponse {
            status: 400,
            payload: json!({"detail": "Неверные учетные данные"}),
        };
        let err = rejection(&LoginForm::default(), &response);
        assert_eq!(
            err,
            FormError::Rejected {
                status: 400,
                detail: "Ошибка: Неверные учетные данные".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_state_idle() {
        let controller = SubmissionController::new(ApiClient::new(ApiConfig::default()).unwrap());
        let nav = |_: Destination| panic!("must not navigate");
        let err = controller.submit(&LoginForm::default(), &nav).await.unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
