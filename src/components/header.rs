//! Navigation Header Component
//!
//! Fixed green bar: brand on the left, page links, and the account icon that
//! opens the login form. On narrow windows the links collapse behind a toggle.

use dioxus::prelude::*;

use crate::app::Route;

/// Pages reachable from the header links
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Statistics,
    Contacts,
    Report,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Home,
        NavLocation::Statistics,
        NavLocation::Contacts,
        NavLocation::Report,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Главная",
            NavLocation::Statistics => "Статистика",
            NavLocation::Contacts => "Контакты",
            NavLocation::Report => "Заявка",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Statistics => Route::Statistics {},
            NavLocation::Contacts => Route::Contacts {},
            NavLocation::Report => Route::Report {},
        }
    }

    /// The header link to highlight for `route`, if any
    pub fn for_route(route: &Route) -> Option<NavLocation> {
        match route {
            Route::Home {} => Some(NavLocation::Home),
            Route::Statistics {} => Some(NavLocation::Statistics),
            Route::Contacts {} => Some(NavLocation::Contacts),
            Route::Report {} => Some(NavLocation::Report),
            _ => None,
        }
    }
}

/// Navigation Header component
#[component]
pub fn Header() -> Element {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let current = NavLocation::for_route(&route);
    let mut expanded = use_signal(|| false);

    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    span { class: "brand-logo", "\u{1F33F}" }
                    span { class: "brand-name", "Защитник природы" }
                }

                button {
                    r#type: "button",
                    class: "navbar-toggle",
                    "aria-label": "Меню",
                    "aria-expanded": "{expanded()}",
                    onclick: move |_| expanded.set(!expanded()),
                    "\u{2630}"
                }

                nav { class: if expanded() { "navbar-links open" } else { "navbar-links" },
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if Some(location) == current { "nav-link active" } else { "nav-link" },
                            onclick: move |_| expanded.set(false),
                            "{location.display_name()}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "user-icon",
                    "aria-label": "Войти",
                    onclick: move |_| {
                        navigator.push(Route::Login {});
                    },
                    // Lucide user icon
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        circle { cx: "12", cy: "8", r: "5" }
                        path { d: "M20 21a8 8 0 0 0-16 0" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_links_round_trip_their_routes() {
        for location in NavLocation::ALL {
            assert_eq!(NavLocation::for_route(&location.route()), Some(location));
        }
    }

    #[test]
    fn auth_pages_highlight_nothing() {
        assert_eq!(NavLocation::for_route(&Route::Login {}), None);
        assert_eq!(NavLocation::for_route(&Route::PersonalAccount {}), None);
    }
}
