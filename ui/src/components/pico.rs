//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            style: "margin-right: 0.5rem;",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxProps {
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
}

/// An inline checkbox with its label, reporting the new checked state.
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            style: "display: inline-flex; align-items: center; margin-right: 1rem; white-space: nowrap;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |evt: FormEvent| props.on_change.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    /// `(value, label)` pairs.
    options: Vec<(&'static str, &'static str)>,
    selected: &'static str,
    on_change: EventHandler<String>,
}

/// A compact `<select>` sized for table headers.
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        select {
            style: "width: 100%; margin-bottom: 0.25rem; padding: 2px 4px; font-size: 0.8rem; height: auto;",
            onchange: move |evt| props.on_change.call(evt.value()),
            for (value, label) in props.options {
                option {
                    value: "{value}",
                    selected: value == props.selected,
                    "{label}"
                }
            }
        }
    }
}
