//! UI Components for Ecoguard.
//!
//! Page chrome and page-specific widgets. Generic form widgets live in the
//! `ecoguard-ui` crate.

mod auth_card;
mod footer;
mod header;
mod photo_picker;

pub use auth_card::AuthCard;
pub use footer::Footer;
pub use header::Header;
pub use photo_picker::{PhotoPicker, PickedPhoto};
