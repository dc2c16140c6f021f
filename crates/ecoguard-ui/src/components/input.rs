//! Input Field Components
//!
//! Floating-label inputs. The label sits inside the box until the field is
//! focused or filled, then floats above it. Which fields are floated is kept
//! in a shared [`FocusTracker`] signal owned by the page.

use dioxus::prelude::*;
use ecoguard_core::{FieldName, FocusTracker};

/// Properties for the FloatingInput component
#[derive(Clone, PartialEq, Props)]
pub struct FloatingInputProps {
    /// Which form field this is; also used as the element id
    pub field: FieldName,
    /// Label text shown inside / above the input
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Page-owned focus state
    pub tracker: Signal<FocusTracker>,
    /// Input type (text, email, password, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Leading icon glyph
    #[props(default)]
    pub icon: Option<String>,
}

/// Single-line input with a floating label.
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(LoginForm::default);
/// let tracker = use_signal(FocusTracker::new);
///
/// rsx! {
///     FloatingInput {
///         field: FieldName::Email,
///         label: "Email".to_string(),
///         value: form.read().email.clone(),
///         oninput: move |s| form.write().set_email(s),
///         tracker,
///     }
/// }
/// ```
#[component]
pub fn FloatingInput(props: FloatingInputProps) -> Element {
    let field = props.field;
    let mut tracker = props.tracker;
    let wrapper_class = tracker.read().class_for(field);
    let current = props.value.clone();

    rsx! {
        div { class: "{wrapper_class}",
            div { class: "input-icon",
                if let Some(icon) = &props.icon {
                    "{icon}"
                }
            }
            div { class: "input-wrapper",
                label { r#for: "{field}", "{props.label}" }
                input {
                    id: "{field}",
                    class: "input",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onfocus: move |_| tracker.write().on_focus(field),
                    onblur: move |_| tracker.write().on_blur(field, &current),
                }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub field: FieldName,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub tracker: Signal<FocusTracker>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
}

/// Multi-line variant of [`FloatingInput`].
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let field = props.field;
    let mut tracker = props.tracker;
    let wrapper_class = tracker.read().class_for(field);
    let current = props.value.clone();

    rsx! {
        div { class: "{wrapper_class} input-div--multiline",
            div { class: "input-wrapper",
                label { r#for: "{field}", "{props.label}" }
                textarea {
                    id: "{field}",
                    class: "input textarea",
                    rows: "{props.rows}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onfocus: move |_| tracker.write().on_focus(field),
                    onblur: move |_| tracker.write().on_blur(field, &current),
                }
            }
        }
    }
}

/// Labelled checkbox ("Запомнить меня").
#[component]
pub fn Checkbox(id: String, label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "checkbox-wrapper",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            label { r#for: "{id}", "{label}" }
        }
    }
}
