//! API configuration.
//!
//! The base URL, endpoint paths and success markers are injected here rather
//! than embedded in the controllers. Defaults match the development backend.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Base URL of the development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Message the development backend returns on a successful login.
///
/// Dev-only contract: a real backend should signal success structurally
/// (status code, token) rather than through a literal message.
pub const DEFAULT_LOGIN_MARKER: &str = "Вход успешен";

/// Message returned once a verification code has been mailed.
pub const DEFAULT_CODE_SENT_MARKER: &str = "Код подтверждения отправлен на ваш email";

/// Message returned once the password has been replaced.
pub const DEFAULT_PASSWORD_RESET_MARKER: &str = "Пароль успешно сброшен";

/// Endpoint paths, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub login: String,
    pub register: String,
    pub send_code: String,
    pub reset_password: String,
    pub messages: String,
    pub applications: String,
    pub statistics: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/login/".to_string(),
            register: "/register/".to_string(),
            send_code: "/send-verification-code/".to_string(),
            reset_password: "/reset-password/".to_string(),
            messages: "/messages/".to_string(),
            applications: "/applications/".to_string(),
            statistics: "/statistics/".to_string(),
        }
    }
}

/// Literal `message` values that mark a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessMarkers {
    pub login: String,
    pub code_sent: String,
    pub password_reset: String,
}

impl Default for SuccessMarkers {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_MARKER.to_string(),
            code_sent: DEFAULT_CODE_SENT_MARKER.to_string(),
            password_reset: DEFAULT_PASSWORD_RESET_MARKER.to_string(),
        }
    }
}

/// Configuration for talking to the Ecoguard backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
    pub markers: SuccessMarkers,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a configuration with default paths and markers for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: Endpoints::default(),
            markers: SuccessMarkers::default(),
        }
    }

    /// Replace the login success marker.
    pub fn with_login_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.login = marker.into();
        self
    }

    /// Parse the base URL, normalized to end with a slash so relative joins
    /// keep any path prefix (`http://host/api` + `login/`).
    pub fn base(&self) -> FormResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| FormError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(FormError::InvalidUrl(raw));
        }
        Ok(url)
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint_url(&self, path: &str) -> FormResult<Url> {
        let base = self.base()?;
        base.join(path.trim_start_matches('/'))
            .map_err(|e| FormError::InvalidUrl(format!("{path}: {e}")))
    }
}
