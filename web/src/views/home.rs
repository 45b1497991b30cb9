//! Landing page: hero plus a showcase of adoptable pets.

use api::Pet;
use dioxus::prelude::*;
use ui::{featured, make_client, PetCard};

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let mut pets = use_signal(Vec::<Pet>::new);
    let mut loading = use_signal(|| true);

    // Same single-resource loading as the catalog page; a load failure
    // only hides the showcase, the hero stays up.
    let _loader = use_resource(move || async move {
        match api::pets::list(&make_client()).await {
            Ok(data) => pets.set(data),
            Err(err) => tracing::warn!("failed to load the showcase: {err}"),
        }
        loading.set(false);
    });

    let all = pets();
    let showcase = featured(&all);

    rsx! {
        div {
            class: "hero",
            h1 { "Adopt your best friend" }
            p { "PawHome connects rescued dogs and cats with the people who will love them." }
            Link { class: "button button-primary", to: Route::Pets {}, "Meet the pets" }
        }

        if !loading() && !showcase.is_empty() {
            section {
                class: "showcase",
                h2 { "Featured pets" }
                div {
                    class: "catalog-grid",
                    for pet in showcase {
                        PetCard {
                            key: "{pet.id}",
                            pet: pet.clone(),
                            on_select: move |id: String| {
                                nav.push(Route::PetDetail { id });
                            },
                        }
                    }
                }
                Link { class: "button button-secondary", to: Route::Pets {}, "See all pets" }
            }
        }

        section {
            class: "pitch",
            div {
                h3 { "Unconditional love" }
                p { "Every pet arrives ready to give all the affection it has." }
            }
            div {
                h3 { "Safe process" }
                p { "All our pets are vaccinated and neutered before adoption." }
            }
            div {
                h3 { "Find your match" }
                p { "Dogs and cats of every age, size and personality." }
            }
        }
    }
}
