//! Visual theme: palette and the global stylesheet.

mod colors;
mod styles;

pub use colors::root_variables;
pub use styles::GLOBAL_STYLES;
