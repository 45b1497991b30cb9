use dioxus::prelude::*;

use crate::Route;

/// Catch-all page for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "The page /{path} does not exist." }
            Link { class: "button button-primary", to: Route::Home {}, "Back home" }
        }
    }
}
