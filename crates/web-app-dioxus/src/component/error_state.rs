use dioxus::prelude::*;
use dioxus::router::Navigator;

use taskflow_web_app as web_app;

use crate::component::element::{Button, Color, Icon};

/// Terminal error screen: a fixed circular icon badge, a heading,
/// explanatory text and a single recovery action navigating to the
/// configured target route.
#[component]
pub fn ErrorState(config: web_app::ErrorStateConfig) -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "has-text-centered px-4 my-6",
            div {
                class: "icon-badge has-background-grey-lighter has-text-grey mb-5",
                Icon { name: config.icon.to_string() }
            }
            h1 { class: "title is-2", "{config.heading}" }
            p { class: "subtitle is-5 has-text-grey", "{config.message}" }
            Button {
                label: config.action_label.to_string(),
                color: Color::Dark,
                icon: "arrow-left",
                onclick: move |_| config.activate(&RouterNavigator { navigator }),
            }
        }
    }
}

/// Router-backed implementation of the navigation capability consumed by
/// the error screens. Requests are fire-and-forget; failures are left to
/// the router's error policy.
struct RouterNavigator {
    navigator: Navigator,
}

impl web_app::Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        self.navigator.push(path.to_string());
    }
}
