//! Incident report ("заявка"): a photo of the site plus where and what.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use super::{require_filled, Destination, FormSubmission, SuccessMarker};
use crate::config::ApiConfig;
use crate::error::{FormError, FormResult, COORDINATES_NOT_NUMERIC, PHOTO_REQUIRED};

/// Incident report form values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    pub phone_number: String,
    pub description: String,
    pub latitude: String,
    pub longitude: String,
    /// Encoded image bytes, as picked from disk
    pub photo: Option<Vec<u8>>,
}

/// Body of `POST /applications/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentReport {
    /// Base64 text of the image bytes
    pub photo: String,
    pub phone_number: String,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
}

impl ReportForm {
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_latitude(&mut self, latitude: impl Into<String>) {
        self.latitude = latitude.into();
    }

    pub fn set_longitude(&mut self, longitude: impl Into<String>) {
        self.longitude = longitude.into();
    }

    pub fn set_photo(&mut self, photo: Option<Vec<u8>>) {
        self.photo = photo;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse a coordinate, accepting a decimal comma.
fn parse_coordinate(raw: &str) -> FormResult<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormError::Validation(COORDINATES_NOT_NUMERIC.to_string()))
}

impl FormSubmission for ReportForm {
    type Body = IncidentReport;

    fn kind(&self) -> &'static str {
        "incident-report"
    }

    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str {
        &config.endpoints.applications
    }

    fn success_marker(&self, _config: &ApiConfig) -> SuccessMarker {
        SuccessMarker::HasField("id")
    }

    fn destination(&self) -> Option<Destination> {
        None
    }

    fn rejection_notice(&self) -> &'static str {
        "Не удалось отправить заявку."
    }

    fn build(&self) -> FormResult<IncidentReport> {
        require_filled(&[
            &self.phone_number,
            &self.description,
            &self.latitude,
            &self.longitude,
        ])?;
        let photo = match self.photo.as_deref() {
            Some(bytes) if !bytes.is_empty() => STANDARD.encode(bytes),
            _ => return Err(FormError::Validation(PHOTO_REQUIRED.to_string())),
        };
        Ok(IncidentReport {
            photo,
            phone_number: self.phone_number.clone(),
            longitude: parse_coordinate(&self.longitude)?,
            latitude: parse_coordinate(&self.latitude)?,
            description: self.description.clone(),
        })
    }
}
