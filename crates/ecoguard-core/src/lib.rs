//! Ecoguard Core Library
//!
//! Form state, field focus tracking and submission control for the Ecoguard
//! environmental-reporting client.
//!
//! ## Overview
//!
//! Pages hold a form struct (e.g. [`LoginForm`]) and a [`FocusTracker`] in
//! reactive state. On submit they hand the form to a [`SubmissionController`],
//! which validates it, posts it once through the [`ApiClient`], and either
//! navigates through the supplied [`Navigate`] implementation or returns a
//! [`FormError`] whose [`FormError::notice`] the page renders.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ecoguard_core::{ApiClient, ApiConfig, Destination, LoginForm, SubmissionController};
//!
//! let controller = SubmissionController::new(ApiClient::new(ApiConfig::default())?);
//!
//! let mut form = LoginForm::default();
//! form.set_email("a@b.com");
//! form.set_password("x");
//!
//! match controller.submit(&form, &|to: Destination| println!("go to {}", to.path())).await {
//!     Ok(_) => {}
//!     Err(e) => eprintln!("{}", e.notice()),
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod forms;

// Re-exports
pub use api::{ApiClient, ServerResponse, SiteStatistics};
pub use config::{ApiConfig, Endpoints, SuccessMarkers, DEFAULT_BASE_URL};
pub use controller::{Navigate, SubmissionController, SubmissionState, Submitted};
pub use error::{FormError, FormResult};
pub use field::{FieldName, FocusTracker};
pub use forms::{
    ContactForm, Destination, FormSubmission, LoginForm, PasswordRecoveryForm, RecoveryStep,
    RegisterForm, ReportForm, SuccessMarker,
};
