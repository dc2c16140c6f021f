//! Color constants for the green "nature" palette.
//!
//! These are emitted once as CSS custom properties (see [`root_variables`]);
//! the stylesheet only ever refers to the `var(--…)` names.

// === GREEN (brand, primary actions) ===
pub const GREEN: &str = "#2cb641";
pub const GREEN_DARK: &str = "#1f8a30";
pub const GREEN_SOFT: &str = "#e8f7eb";

// === SURFACES ===
pub const PAGE_BG: &str = "#f6f8f5";
pub const CARD_BG: &str = "#ffffff";
pub const BORDER: &str = "#d9d9d9";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#333333";
pub const TEXT_SECONDARY: &str = "#555555";
pub const TEXT_MUTED: &str = "#999999";

// === SEMANTIC ===
pub const DANGER: &str = "#d93636";
pub const DANGER_SOFT: &str = "#fdeaea";
pub const SUCCESS_SOFT: &str = "#e3f6e6";

const PALETTE: [(&str, &str); 12] = [
    ("green", GREEN),
    ("green-dark", GREEN_DARK),
    ("green-soft", GREEN_SOFT),
    ("page-bg", PAGE_BG),
    ("card-bg", CARD_BG),
    ("border", BORDER),
    ("text-primary", TEXT_PRIMARY),
    ("text-secondary", TEXT_SECONDARY),
    ("text-muted", TEXT_MUTED),
    ("danger", DANGER),
    ("danger-soft", DANGER_SOFT),
    ("success-soft", SUCCESS_SOFT),
];

/// `:root { --name: value; … }` block for the whole palette.
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{name}: {value};\n"));
    }
    css.push('}');
    css
}
