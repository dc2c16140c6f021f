//! Login page.

use dioxus::prelude::*;
use ecoguard_core::{FieldName, FocusTracker, FormError, LoginForm};
use ecoguard_ui::{Button, ButtonVariant, Checkbox, FloatingInput, Notice, NoticeBanner};

use crate::app::Route;
use crate::components::AuthCard;
use crate::context::{submission_settled, use_router_navigator, use_submission_controller};

/// Email + password form. Success opens the personal account.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let router = use_router_navigator();
    let controller = use_submission_controller();

    let mut form = use_signal(LoginForm::default);
    let tracker = use_signal(FocusTracker::new);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let on_login = move |_: ()| {
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
                Ok(_) | Err(FormError::InFlight) => {}
                Err(e) => notice.set(Some(Notice::from(&e))),
            }
        });
    };

    rsx! {
        AuthCard { title: "Вход".to_string(),
            NoticeBanner { notice }

            FloatingInput {
                field: FieldName::Email,
                label: "Email".to_string(),
                value: form.read().email.clone(),
                oninput: move |s: String| form.write().set_email(s),
                tracker,
                icon: "\u{1F464}".to_string(),
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

            div { class: "options-wrapper",
                Checkbox {
                    id: "remember-me".to_string(),
                    label: "Запомнить меня".to_string(),
                    checked: form.read().remember_me,
                    onchange: move |checked| form.write().set_remember_me(checked),
                }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_: ()| {
                        navigator.push(Route::ForgotPassword {});
                    },
                    "Забыли пароль?"
                }
            }

            div { class: "buttons-wrapper",
                Button { busy: submitting(), onclick: on_login, "Войти" }
                p { class: "register-link",
                    "У вас нет аккаунта? "
                    Link { to: Route::Register {}, class: "register-btn", "Зарегистрироваться" }
                }
            }
        }
    }
}
