use dioxus::prelude::*;
use ecoguard_core::Destination;

use crate::components::{Footer, Header};
use crate::pages::{
    Contacts, ForgotPassword, Home, Login, PersonalAccount, Register, Report, Statistics,
};
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Landing page
/// - `/statistics` - Site-wide counters
/// - `/contacts` - Contact details and message form
/// - `/zayvka` - Incident report form
/// - `/login`, `/register`, `/forgotpassword` - Authentication forms
/// - `/personalacc` - Personal account (no session guard)
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/statistics")]
        Statistics {},
        #[route("/contacts")]
        Contacts {},
        #[route("/zayvka")]
        Report {},
        #[route("/login")]
        Login {},
        #[route("/forgotpassword")]
        ForgotPassword {},
        #[route("/personalacc")]
        PersonalAccount {},
        #[route("/register")]
        Register {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Statistics => Route::Statistics {},
            Destination::Contacts => Route::Contacts {},
            Destination::Report => Route::Report {},
            Destination::Login => Route::Login {},
            Destination::ForgotPassword => Route::ForgotPassword {},
            Destination::PersonalAccount => Route::PersonalAccount {},
            Destination::Register => Route::Register {},
        }
    }
}

/// Root application component.
///
/// Provides global styles and routing. The backend client is supplied as
/// root context by the launcher (see `main`).
#[component]
pub fn App() -> Element {
    let palette = use_hook(root_variables);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Header and footer chrome around every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "page",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
