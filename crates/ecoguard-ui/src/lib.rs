//! Ecoguard UI Components
//!
//! Dioxus widgets shared by the Ecoguard pages: floating-label inputs wired to
//! the core focus tracker, buttons, and the inline notice banner that stands
//! in for blocking alert dialogs.

pub mod components;

pub use components::*;
