//! Personal account page.
//!
//! There is no session: the page is reachable directly and shows the same
//! content to everyone.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn PersonalAccount() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "account",
            h1 { class: "page-title", "Личный кабинет" }
            p { class: "body-text",
                "Здесь собраны ваши заявки о нарушениях и их статусы."
            }

            div { class: "account-grid",
                div { class: "card",
                    h3 { "Мои заявки" }
                    p { class: "muted", "Вы ещё не отправили ни одной заявки." }
                    Link { to: Route::Report {}, class: "btn", "Подать заявку" }
                }
                div { class: "card",
                    h3 { "Статистика сайта" }
                    p { class: "muted", "Сколько нарушений уже обработано." }
                    Link { to: Route::Statistics {}, class: "btn btn-outline", "Открыть" }
                }
            }

            button {
                r#type: "button",
                class: "btn-link",
                onclick: move |_| {
                    tracing::info!("Leaving personal account");
                    navigator.replace(Route::Login {});
                },
                "Выйти"
            }
        }
    }
}
