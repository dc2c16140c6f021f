//! Contacts page: how to reach the team, plus a message form.

use dioxus::prelude::*;
use ecoguard_core::{ContactForm, FieldName, FocusTracker, FormError};
use ecoguard_ui::{Button, FloatingInput, Notice, NoticeBanner, TextArea};

use crate::context::{submission_settled, use_router_navigator, use_submission_controller};

const CONTACT_EMAIL: &str = "info@ecoguard.ru";
const CONTACT_PHONE: &str = "+7 (800) 555-35-35";

#[component]
pub fn Contacts() -> Element {
    let router = use_router_navigator();
    let controller = use_submission_controller();

    let mut form = use_signal(ContactForm::default);
    let mut tracker = use_signal(FocusTracker::new);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);
    let mut copied = use_signal(|| false);

    let copy_email = move |_| {
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(CONTACT_EMAIL).is_ok() {
                        copied.set(true);
                        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                }
                Err(e) => tracing::warn!("Clipboard not available: {}", e),
            }
        });
    };

    let on_send = move |_: ()| {
        let controller = controller.clone();
        spawn(async move {
            let snapshot = form.read().clone();
            notice.set(None);
            submitting.set(true);
            let result = controller.submit(&snapshot, &router).await;
            if submission_settled(&result) {
                submitting.set(false);
            }
            match result {
                Ok(_) => {
                    form.write().clear();
                    tracker.write().reset();
                    notice.set(Some(Notice::success("Сообщение отправлено. Мы свяжемся с вами.")));
                }
                Err(FormError::InFlight) => {}
                Err(e) => notice.set(Some(Notice::from(&e))),
            }
        });
    };

    rsx! {
        section { class: "contacts",
            h1 { class: "page-title", "Контакты" }

            div { class: "contacts-grid",
                div { class: "card contact-details",
                    h3 { "Связаться с нами" }
                    p { class: "body-text", "Телефон: {CONTACT_PHONE}" }
                    p { class: "body-text",
                        "Email: {CONTACT_EMAIL} "
                        button {
                            r#type: "button",
                            class: "btn-link",
                            onclick: copy_email,
                            if copied() { "Скопировано" } else { "Скопировать" }
                        }
                    }
                    p { class: "muted", "Ежедневно с 9:00 до 21:00" }
                }

                div { class: "card contact-form",
                    h3 { "Напишите нам" }
                    NoticeBanner { notice }

                    FloatingInput {
                        field: FieldName::Name,
                        label: "Ваше имя".to_string(),
                        value: form.read().name.clone(),
                        oninput: move |s: String| form.write().set_name(s),
                        tracker,
                    }
                    FloatingInput {
                        field: FieldName::Phone,
                        label: "Телефон".to_string(),
                        value: form.read().phone_number.clone(),
                        oninput: move |s: String| form.write().set_phone_number(s),
                        tracker,
                        input_type: "tel".to_string(),
                        icon: "\u{260E}".to_string(),
                    }
                    TextArea {
                        field: FieldName::Message,
                        label: "Сообщение".to_string(),
                        value: form.read().message.clone(),
                        oninput: move |s: String| form.write().set_message(s),
                        tracker,
                        rows: 5,
                    }

                    Button { busy: submitting(), onclick: on_send, "Отправить" }
                }
            }
        }
    }
}
