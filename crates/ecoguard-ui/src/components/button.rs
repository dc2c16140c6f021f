//! Button Components
//!
//! - Primary: green filled form button ("Войти", "Отправить")
//! - Outline: bordered secondary action
//! - Link: inline text action ("Забыли пароль?")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main form action
    #[default]
    Primary,
    /// Secondary action with a border and no fill
    Outline,
    /// Looks like a text link
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Shows a busy label and blocks clicks while a request is in flight
    #[props(default = false)]
    pub busy: bool,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button. Always `type="button"` so Enter in a field never triggers
/// a native form post.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         busy: submitting(),
///         onclick: move |_| on_login(),
///         "Войти"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.variant.class(), extra),
        _ => props.variant.class().to_string(),
    };
    let busy = props.busy;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled || busy,
            "aria-busy": "{busy}",
            onclick: move |_| {
                if busy {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if busy {
                span { class: "btn-spinner" }
                "Отправка..."
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
