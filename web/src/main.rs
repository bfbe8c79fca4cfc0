use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use views::{Home, UploadIngredients};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/upload_ingredients")]
    UploadIngredients {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialised: {e}");
    }
    tracing::info!("Starting Hungr web app");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Hungr AI" }

        Router::<Route> {}
    }
}
