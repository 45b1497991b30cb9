use dioxus::prelude::*;

use crate::Route;

/// Static page about the organization.
#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "static-page",

            h1 { "About PawHome" }
            p {
                "PawHome is a volunteer-run organization dedicated to animal "
                "welfare. We rescue dogs and cats in vulnerable situations, "
                "care for them and find them responsible homes."
            }

            h2 { "What we do" }
            ul {
                li { "Rescue and rehabilitate abandoned dogs and cats" }
                li { "Vaccinate and neuter every animal before adoption" }
                li { "Match each pet with an adopter who fits its needs" }
            }

            Link { class: "button button-primary", to: Route::Pets {}, "Meet the pets" }
        }
    }
}
