//! Incident report page ("заявка").
//!
//! Collects a photo, coordinates and a description of the violation and
//! posts them as a new application. The form stays on the page after a
//! successful send so the next report can be filed straight away.

use dioxus::prelude::*;
use ecoguard_core::{FieldName, FocusTracker, FormError, ReportForm};
use ecoguard_ui::{Button, FloatingInput, Notice, NoticeBanner, TextArea};

use crate::components::{PhotoPicker, PickedPhoto};
use crate::context::{submission_settled, use_router_navigator, use_submission_controller};

#[component]
pub fn Report() -> Element {
    let router = use_router_navigator();
    let controller = use_submission_controller();

    let mut form = use_signal(ReportForm::default);
    let mut tracker = use_signal(FocusTracker::new);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);
    let mut attached = use_signal(|| Option::<String>::None);

    let on_pick = move |photo: PickedPhoto| {
        attached.set(Some(photo.file_name));
        form.write().set_photo(Some(photo.jpeg));
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
                    attached.set(None);
                    notice.set(Some(Notice::success("Заявка отправлена. Спасибо!")));
                }
                Err(FormError::InFlight) => {}
                Err(e) => notice.set(Some(Notice::from(&e))),
            }
        });
    };

    rsx! {
        section { class: "report",
            h1 { class: "page-title", "Заявка о нарушении" }
            p { class: "muted",
                "Координаты можно скопировать из любого картографического сервиса, например 55,7522."
            }

            div { class: "card report-form",
                NoticeBanner { notice }

                PhotoPicker { on_pick, attached: attached() }

                div { class: "name-row",
                    FloatingInput {
                        field: FieldName::Latitude,
                        label: "Широта".to_string(),
                        value: form.read().latitude.clone(),
                        oninput: move |s: String| form.write().set_latitude(s),
                        tracker,
                    }
                    FloatingInput {
                        field: FieldName::Longitude,
                        label: "Долгота".to_string(),
                        value: form.read().longitude.clone(),
                        oninput: move |s: String| form.write().set_longitude(s),
                        tracker,
                    }
                }
                FloatingInput {
                    field: FieldName::Phone,
                    label: "Телефон для связи".to_string(),
                    value: form.read().phone_number.clone(),
                    oninput: move |s: String| form.write().set_phone_number(s),
                    tracker,
                    input_type: "tel".to_string(),
                    icon: "\u{260E}".to_string(),
                }
                TextArea {
                    field: FieldName::Description,
                    label: "Что случилось?".to_string(),
                    value: form.read().description.clone(),
                    oninput: move |s: String| form.write().set_description(s),
                    tracker,
                }

                Button { busy: submitting(), onclick: on_send, "Отправить заявку" }
            }
        }
    }
}
