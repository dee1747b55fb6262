use dioxus::prelude::*;

use taskflow_web_app::error_state;

use crate::component::error_state::ErrorState;

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        ErrorState { config: error_state::UNAUTHORIZED }
    }
}
