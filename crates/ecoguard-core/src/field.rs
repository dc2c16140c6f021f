//! Field focus tracking.
//!
//! A field is "active" while it has focus or holds content. Active fields get
//! the `focus` CSS class, which floats the label above the input. The state is
//! purely visual and never consulted by validation or submission.

use std::collections::HashSet;
use std::fmt;

/// Every input the forms expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Code,
    Name,
    Phone,
    Message,
    Description,
    Latitude,
    Longitude,
}

impl FieldName {
    /// Stable identifier, used for element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm-password",
            FieldName::FirstName => "first-name",
            FieldName::LastName => "last-name",
            FieldName::Code => "code",
            FieldName::Name => "name",
            FieldName::Phone => "phone",
            FieldName::Message => "message",
            FieldName::Description => "description",
            FieldName::Latitude => "latitude",
            FieldName::Longitude => "longitude",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which fields have focus or content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTracker {
    active: HashSet<FieldName>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus always marks the field active, whatever its value.
    pub fn on_focus(&mut self, field: FieldName) {
        self.active.insert(field);
    }

    /// Blur deactivates the field only when it was left empty.
    pub fn on_blur(&mut self, field: FieldName, current_value: &str) {
        if current_value.is_empty() {
            self.active.remove(&field);
        }
    }

    pub fn is_active(&self, field: FieldName) -> bool {
        self.active.contains(&field)
    }

    /// CSS class list for the wrapper around `field`.
    pub fn class_for(&self, field: FieldName) -> &'static str {
        if self.is_active(field) {
            "input-div focus"
        } else {
            "input-div"
        }
    }

    /// Deactivate a single field whose value was cleared programmatically.
    pub fn release(&mut self, field: FieldName) {
        self.active.remove(&field);
    }

    /// Forget all focus state, e.g. after a form is cleared.
    pub fn reset(&mut self) {
        self.active.clear();
    }
}
