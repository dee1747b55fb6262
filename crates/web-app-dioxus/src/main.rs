#![warn(clippy::pedantic)]

use dioxus::prelude::*;
use log::error;

use taskflow_web_app as web_app;

use component::navbar::Navbar;
use page::{home::Home, not_found::NotFound, unauthorized::Unauthorized};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init();
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("main"))
        {
            element.set_inner_html(&format!("
                <section class=\"section\">
                    <div class=\"container\">
                        <div class=\"message is-danger\">
                            <div class=\"message-header\">
                                <p>Something went wrong</p>
                            </div>
                            <div class=\"message-body\">
                                <div class=\"block\">
                                    An unexpected error occurred and the application cannot continue.
                                </div>
                                <div class=\"block\">
                                    <pre>{info}</pre>
                                </div>
                                <div class=\"block field is-grouped is-grouped-centered\">
                                    <button class=\"button\" onclick=\"location.reload()\">
                                        <span class=\"icon\">
                                            <i class=\"fa fa-arrow-rotate-right\"></i>
                                        </span>
                                        <span>Reload page</span>
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>
            "));
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
    }
}
