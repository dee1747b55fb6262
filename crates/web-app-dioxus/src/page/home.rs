use dioxus::prelude::*;

use crate::component::element::{CenteredBlock, Title};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { title: "Welcome to TaskFlow".to_string() }
        CenteredBlock {
            p {
                class: "has-text-grey",
                "Organize your tasks, notes, habits and budget in one place."
            }
        }
    }
}
