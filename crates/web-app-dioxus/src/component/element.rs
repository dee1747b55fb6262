use dioxus::prelude::*;
use strum::Display;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container",
                h1 {
                    class: "title is-5",
                    "{title}"
                }
            }
        }
    }
}

#[component]
pub fn Icon(name: String, is_small: Option<bool>) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            i { class: "fas fa-{name}" }
        }
    }
}

/// A single clickable control with label, color and an optional leading
/// icon. Invokes `onclick` once per activation.
#[component]
pub fn Button(
    label: String,
    color: Color,
    icon: Option<String>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "button is-{color}",
            onclick: move |event| onclick.call(event),
            if let Some(icon) = &icon {
                Icon { name: icon.clone(), is_small: true }
            }
            span { "{label}" }
        }
    }
}
