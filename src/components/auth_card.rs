//! Shared frame for the login, registration and recovery forms.

use dioxus::prelude::*;

/// Wave background, illustration column and a titled form card.
#[component]
pub fn AuthCard(title: String, children: Element) -> Element {
    rsx! {
        div { class: "login-container",
            div { class: "wave" }
            div { class: "login-grid",
                div { class: "login-illustration",
                    span { class: "illustration-glyph", "\u{1F30D}" }
                }
                div { class: "login-content",
                    form {
                        onsubmit: move |e| e.prevent_default(),
                        div { class: "avatar-wrapper",
                            span { class: "avatar", "\u{1F464}" }
                        }
                        h2 { class: "title", "{title}" }
                        {children}
                    }
                }
            }
        }
    }
}
