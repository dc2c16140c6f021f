//! Registration page.

use dioxus::prelude::*;
use ecoguard_core::{FieldName, FocusTracker, FormError, RegisterForm};
use ecoguard_ui::{Button, FloatingInput, Notice, NoticeBanner};

use crate::app::Route;
use crate::components::AuthCard;
use crate::context::{submission_settled, use_router_navigator, use_submission_controller};

/// New account form. Success sends the user to the login page.
#[component]
pub fn Register() -> Element {
    let router = use_router_navigator();
    let controller = use_submission_controller();

    let mut form = use_signal(RegisterForm::default);
    let tracker = use_signal(FocusTracker::new);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let on_register = move |_: ()| {
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
                Ok(_) => tracing::info!("Account registered"),
                Err(FormError::InFlight) => {}
                Err(e) => notice.set(Some(Notice::from(&e))),
            }
        });
    };

    rsx! {
        AuthCard { title: "Регистрация".to_string(),
            NoticeBanner { notice }

            div { class: "name-row",
                FloatingInput {
                    field: FieldName::FirstName,
                    label: "Имя".to_string(),
                    value: form.read().first_name.clone(),
                    oninput: move |s: String| form.write().set_first_name(s),
                    tracker,
                }
                FloatingInput {
                    field: FieldName::LastName,
                    label: "Фамилия".to_string(),
                    value: form.read().last_name.clone(),
                    oninput: move |s: String| form.write().set_last_name(s),
                    tracker,
                }
            }
            FloatingInput {
                field: FieldName::Email,
                label: "Email".to_string(),
                value: form.read().email.clone(),
                oninput: move |s: String| form.write().set_email(s),
                tracker,
                input_type: "email".to_string(),
                icon: "\u{2709}".to_string(),
            }
            FloatingInput {
                field: FieldName::Password,
                label: "Пароль".to_string(),
                value: form.read().password.clone(),
                oninput: move |s: String| form.write().set_password(s),
                tracker,
                input_type: "password".to_string(),
                icon: "\u{1F512}".to_string(),
            }
            FloatingInput {
                field: FieldName::ConfirmPassword,
                label: "Повторите пароль".to_string(),
                value: form.read().confirm_password.clone(),
                oninput: move |s: String| form.write().set_confirm_password(s),
                tracker,
                input_type: "password".to_string(),
                icon: "\u{1F512}".to_string(),
            }

            div { class: "buttons-wrapper",
                Button { busy: submitting(), onclick: on_register, "Зарегистрироваться" }
                p { class: "register-link",
                    "Уже есть аккаунт? "
                    Link { to: Route::Login {}, class: "register-btn", "Войти" }
                }
            }
        }
    }
}
