//! docview app
//!
//! Single-page viewer and editor for JSON-hosted documentation.

use std::sync::LazyLock;

use dioxus::prelude::*;
use docview_core::{HttpSource, Session};

pub mod components;
pub mod config;
pub mod download;
pub mod views;

use components::ToastProvider;
use config::Config;
use views::{DocPage, Home, Viewer};

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::default);

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Viewer)]
        #[route("/")]
        Home {},
        #[route("/:slug")]
        DocPage { slug: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::new()));
    use_context_provider(HttpSource::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}
