//! Landing page - what the site is for and where to start.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "hero",
            h1 { class: "page-title", "Защитник природы" }
            p { class: "tagline",
                "Увидели свалку, слив отходов или вырубку? Сообщите нам, и мы передадим заявку ответственным службам."
            }
            div { class: "hero-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Report {});
                    },
                    "Сообщить о нарушении"
                }
                Link { to: Route::Statistics {}, class: "btn btn-outline", "Статистика" }
            }
        }

        section { class: "steps",
            h2 { class: "section-header", "Как это работает" }
            div { class: "steps-grid",
                div { class: "card",
                    span { class: "step-number", "1" }
                    h3 { "Сфотографируйте" }
                    p { class: "muted", "Сделайте снимок места нарушения." }
                }
                div { class: "card",
                    span { class: "step-number", "2" }
                    h3 { "Отправьте заявку" }
                    p { class: "muted", "Укажите координаты и коротко опишите, что случилось." }
                }
                div { class: "card",
                    span { class: "step-number", "3" }
                    h3 { "Следите за статусом" }
                    p { class: "muted", "Статус заявки меняется по мере её рассмотрения." }
                }
            }
        }
    }
}
