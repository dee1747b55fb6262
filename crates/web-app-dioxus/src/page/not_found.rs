use dioxus::prelude::*;
use log::warn;

use taskflow_web_app::error_state;

use crate::component::error_state::ErrorState;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    warn!("page not found: /{}", route.join("/"));

    rsx! {
        ErrorState { config: error_state::NOT_FOUND }
    }
}
