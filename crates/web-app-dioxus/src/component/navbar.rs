use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Navbar() -> Element {
    let page_title = match use_route::<Route>() {
        Route::Home {} => "TaskFlow".to_string(),
        Route::Unauthorized {} | Route::NotFound { .. } => String::new(),
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div { class: "navbar-item is-size-5", "{page_title}" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
