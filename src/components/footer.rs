//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                span { "\u{00A9} {year} Защитник природы" }
                nav { class: "footer-links",
                    Link { to: Route::Report {}, "Сообщить о нарушении" }
                    Link { to: Route::Contacts {}, "Связаться с нами" }
                }
            }
        }
    }
}
