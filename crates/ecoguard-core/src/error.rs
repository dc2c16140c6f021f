//! Error types for Ecoguard form submissions

use thiserror::Error;

/// Shown when a required field is left empty.
pub const FILL_ALL_FIELDS: &str = "Пожалуйста, заполните все поля.";

/// Shown when a password and its confirmation differ.
pub const PASSWORDS_DIFFER: &str = "Пароли не совпадают.";

/// Shown when coordinates cannot be parsed as decimal numbers.
pub const COORDINATES_NOT_NUMERIC: &str = "Координаты должны быть числами.";

/// Shown when the incident report has no photo attached.
pub const PHOTO_REQUIRED: &str = "Прикрепите фотографию.";

/// Shown when the request could not reach the server.
pub const NETWORK_FAILURE: &str =
    "Произошла ошибка при подключении к серверу. Пожалуйста, попробуйте позже.";

/// Main error type for Ecoguard form operations.
///
/// Every variant is recoverable: the form stays usable and the page renders
/// [`FormError::notice`] in place of a blocking dialog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A required field is empty or malformed; no request was made
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The server answered, but not with the expected success marker
    #[error("Submission rejected (status {status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The request could not complete
    #[error("Network error: {0}")]
    Network(String),

    /// A submission is already in flight or has already completed
    #[error("Submission already in progress")]
    InFlight,

    /// The configured base URL or endpoint path is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FormError {
    /// User-facing notification text for this error.
    pub fn notice(&self) -> String {
        match self {
            FormError::Validation(message) => message.clone(),
            FormError::Rejected { detail, .. } => detail.clone(),
            FormError::Network(_) => NETWORK_FAILURE.to_string(),
            FormError::InFlight => "Запрос уже отправлен, дождитесь ответа.".to_string(),
            FormError::InvalidUrl(url) => format!("Некорректный адрес сервера: {url}"),
            FormError::Decode(_) => "Сервер вернул некорректный ответ.".to_string(),
        }
    }
}

impl From<reqwest::Error> for FormError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FormError::Decode(err.to_string())
        } else {
            FormError::Network(err.to_string())
        }
    }
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;
