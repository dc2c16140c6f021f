use serde::Serialize;

use super::{require_filled, Destination, FormSubmission, SuccessMarker};
use crate::config::ApiConfig;
use crate::error::FormResult;

/// Contact page message form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone_number: String,
    pub message: String,
}

/// Body of `POST /messages/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub phone_number: String,
    pub name: String,
    pub message: String,
}

impl ContactForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl FormSubmission for ContactForm {
    type Body = ContactMessage;

    fn kind(&self) -> &'static str {
        "contact-message"
    }

    fn endpoint<'a>(&self, config: &'a ApiConfig) -> &'a str {
        &config.endpoints.messages
    }

    fn success_marker(&self, _config: &ApiConfig) -> SuccessMarker {
        SuccessMarker::HasField("id")
    }

    fn destination(&self) -> Option<Destination> {
        None
    }

    fn rejection_notice(&self) -> &'static str {
        "Не удалось отправить сообщение."
    }

    fn build(&self) -> FormResult<ContactMessage> {
        require_filled(&[&self.name, &self.phone_number, &self.message])?;
        Ok(ContactMessage {
            phone_number: self.phone_number.clone(),
            name: self.name.clone(),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn test_all_fields_required() {
        let mut form = ContactForm::default();
        form.set_name("Пётр");
        form.set_phone_number("+79990000000");
        assert!(matches!(form.build(), Err(FormError::Validation(_))));

        form.set_message("Свалка у реки");
        let body = form.build().unwrap();
        assert_eq!(body.message, "Свалка у реки");
    }

    #[test]
    fn test_clear() {
        let mut form = ContactForm::default();
        form.set_name("x");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
