//! Notice Banner
//!
//! Inline, dismissible replacement for `alert()` dialogs. Pages keep an
//! `Option<Notice>` signal and set it from submission results.

use dioxus::prelude::*;
use ecoguard_core::FormError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Success => "notice notice-success",
        }
    }
}

/// A message for the user.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }
}

impl From<&FormError> for Notice {
    fn from(err: &FormError) -> Self {
        Notice::error(err.notice())
    }
}

/// Renders the current notice, if any, with a close control.
#[component]
pub fn NoticeBanner(mut notice: Signal<Option<Notice>>) -> Element {
    let current = notice.read().clone();

    rsx! {
        if let Some(n) = current {
            div { class: n.kind.class(), role: "alert",
                span { class: "notice-text", "{n.text}" }
                button {
                    class: "notice-close",
                    r#type: "button",
                    "aria-label": "Закрыть",
                    onclick: move |_| {
                        tracing::debug!(kind = ?n.kind, "notice dismissed");
                        notice.set(None);
                    },
                    "\u{00D7}"
                }
            }
        }
    }
}
