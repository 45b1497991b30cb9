use api::Pet;
use dioxus::prelude::*;

/// Catalog card for a single pet. Navigation is delegated to the caller
/// through `on_select`, so this crate stays free of the route table.
#[component]
pub fn PetCard(pet: Pet, on_select: EventHandler<String>) -> Element {
    let pet_id = pet.id.clone();

    rsx! {
        div {
            class: "pet-card",
            onclick: move |_| on_select.call(pet_id.clone()),

            img {
                class: "pet-card-image",
                src: "{pet.image}",
                alt: "{pet.name}",
            }

            div {
                class: "pet-card-body",
                h3 { class: "pet-card-name", "{pet.name}" }

                div {
                    class: "pet-card-chips",
                    span { class: "chip chip-primary", "{pet.species.as_str()}" }
                    span { class: "chip chip-secondary", "{pet.age} years" }
                    span { class: "chip chip-info", "{pet.breed}" }
                }

                p { class: "pet-card-description", "{pet.description}" }
            }
        }
    }
}
