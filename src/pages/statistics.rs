//! Statistics page - site-wide counters fetched on mount.

use dioxus::prelude::*;
use ecoguard_core::SiteStatistics;
use ecoguard_ui::{Button, ButtonVariant};

use crate::context::use_api;

#[component]
pub fn Statistics() -> Element {
    let api = use_api();

    let mut stats = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_statistics().await }
    });

    let body = match &*stats.read_unchecked() {
        Some(Ok(s)) => render_counters(*s),
        Some(Err(e)) => {
            tracing::warn!("Failed to load statistics: {}", e);
            rsx! {
                div { class: "notice notice-error", role: "alert",
                    span { class: "notice-text", "{e.notice()}" }
                }
            }
        }
        None => rsx! {
            div { class: "loading-state",
                p { class: "loading-message", "Загрузка статистики..." }
            }
        },
    };

    rsx! {
        section { class: "statistics",
            h1 { class: "page-title", "Статистика" }
            {body}
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_: ()| stats.restart(),
                "Обновить"
            }
        }
    }
}

fn render_counters(stats: SiteStatistics) -> Element {
    let percent = stats.completion_percent();

    rsx! {
        div { class: "stats-grid",
            div { class: "card stat",
                span { class: "stat-value", "{stats.total_users}" }
                span { class: "stat-label", "пользователей" }
            }
            div { class: "card stat",
                span { class: "stat-value", "{stats.total_applications}" }
                span { class: "stat-label", "заявок подано" }
            }
            div { class: "card stat",
                span { class: "stat-value", "{stats.completed_applications}" }
                span { class: "stat-label", "заявок выполнено" }
            }
        }
        div { class: "progress",
            div { class: "progress-bar", style: "width: {percent}%;" }
        }
        p { class: "muted", "Обработано {percent}% заявок" }
    }
}
