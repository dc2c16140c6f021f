//! Reusable form components.
//!
//! Class names match the selectors in the application stylesheet.

mod button;
mod input;
mod notice;

pub use button::*;
pub use input::*;
pub use notice::*;
