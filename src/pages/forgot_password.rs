//! Password recovery page.
//!
//! Step one mails a six-digit code; step two sets a new password with it.

use dioxus::prelude::*;
use ecoguard_core::{FieldName, FocusTracker, FormError, PasswordRecoveryForm, RecoveryStep};
use ecoguard_ui::{Button, ButtonVariant, FloatingInput, Notice, NoticeBanner};

use crate::app::Route;
use crate::components::AuthCard;
use crate::context::{submission_settled, use_router_navigator, use_submission_controller};

#[component]
pub fn ForgotPassword() -> Element {
    let router = use_router_navigator();
    let controller = use_submission_controller();

    let mut form = use_signal(PasswordRecoveryForm::default);
    let mut tracker = use_signal(FocusTracker::new);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let step = form.read().step;

    let on_submit = move |_: ()| {
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
                Ok(_) if snapshot.step == RecoveryStep::RequestCode => {
                    form.write().advance();
                    notice.set(Some(Notice::success(format!(
                        "Код подтверждения отправлен на {}",
                        snapshot.email
                    ))));
                }
                Ok(_) | Err(FormError::InFlight) => {}
                Err(e) => notice.set(Some(Notice::from(&e))),
            }
        });
    };

    let on_restart = move |_: ()| {
        let cleared = form.write().restart();
        let mut active = tracker.write();
        for field in cleared {
            active.release(field);
        }
        notice.set(None);
    };

    rsx! {
        AuthCard { title: "Восстановление пароля".to_string(),
            NoticeBanner { notice }

            FloatingInput {
                field: FieldName::Email,
                label: "Email".to_string(),
                value: form.read().email.clone(),
                oninput: move |s: String| form.write().set_email(s),
                tracker,
                input_type: "email".to_string(),
                icon: "\u{2709}".to_string(),
            }

            if step == RecoveryStep::ResetPassword {
                FloatingInput {
                    field: FieldName::Code,
                    label: "Код из письма".to_string(),
                    value: form.read().code.clone(),
                    oninput: move |s: String| form.write().set_code(s),
                    tracker,
                    icon: "#".to_string(),
                }
                FloatingInput {
                    field: FieldName::Password,
                    label: "Новый пароль".to_string(),
                    value: form.read().new_password.clone(),
                    oninput: move |s: String| form.write().set_new_password(s),
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
            }

            div { class: "buttons-wrapper",
                Button {
                    busy: submitting(),
                    onclick: on_submit,
                    if step == RecoveryStep::RequestCode { "Отправить код" } else { "Сбросить пароль" }
                }
                if step == RecoveryStep::ResetPassword {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: on_restart,
                        "Отправить код повторно"
                    }
                }
                p { class: "register-link",
                    "Вспомнили пароль? "
                    Link { to: Route::Login {}, class: "register-btn", "Войти" }
                }
            }
        }
    }
}
