//! Backend and navigation context for Ecoguard pages.
//!
//! The [`ApiClient`] is provided as root context at launch. Pages build a
//! [`SubmissionController`] per mount, so its in-flight state is discarded
//! when the user navigates away.
//!
//! ## Usage
//!
//! ```ignore
//! let controller = use_submission_controller();
//! let navigator = use_router_navigator();
//!
//! spawn(async move {
//!     let result = controller.submit(&form, &navigator).await;
//! });
//! ```

use dioxus::prelude::*;
use ecoguard_core::{ApiClient, Destination, FormError, FormResult, Navigate, SubmissionController};

use crate::app::Route;

/// Hook to access the backend client from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook creating a submission controller that lives as long as the page.
pub fn use_submission_controller() -> SubmissionController {
    let api = use_api();
    use_hook(move || SubmissionController::new(api))
}

/// Bridges core navigation requests onto the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(Navigator);

impl Navigate for RouterNavigator {
    fn navigate(&self, to: Destination) {
        tracing::info!(path = to.path(), "navigating");
        self.0.push(Route::from(to));
    }
}

/// Hook returning a [`Navigate`] implementation backed by the router.
pub fn use_router_navigator() -> RouterNavigator {
    RouterNavigator(use_navigator())
}

/// Whether a submit result ends the page's busy state.
///
/// `InFlight` means the click was ignored and an earlier submission is still
/// running, so its busy flag must stay set.
pub fn submission_settled<T>(result: &FormResult<T>) -> bool {
    !matches!(result, Err(FormError::InFlight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_submit_keeps_busy_state() {
        assert!(!submission_settled::<()>(&Err(FormError::InFlight)));
    }

    #[test]
    fn completed_submits_settle() {
        assert!(submission_settled(&Ok(())));
        assert!(submission_settled::<()>(&Err(FormError::Validation(
            "Пожалуйста, заполните все поля.".to_string()
        ))));
        assert!(submission_settled::<()>(&Err(FormError::Network(
            "connection refused".to_string()
        ))));
    }
}
