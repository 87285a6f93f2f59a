use dioxus::prelude::*;

use ui::ThemeProvider;
use views::{Dashboard, SignIn, SignUp, Welcome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageTransition)]
        #[route("/")]
        Welcome {},
        #[route("/signin")]
        SignIn {},
        #[route("/signup")]
        SignUp {},
        #[route("/dashboard")]
        Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider {
            Router::<Route> {}
        }
    }
}

/// Layout that replays the page-enter animation whenever the path changes.
/// Keying the wrapper on the current route remounts it per navigation, which
/// restarts the CSS transition (the stand-in for the original exit/enter pair).
#[component]
fn PageTransition() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div {
            key: "{route}",
            class: "page-enter",
            Outlet::<Route> {}
        }
    }
}
