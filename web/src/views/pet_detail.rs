//! Pet detail page: a public read with an owner contact block.

use api::Pet;
use dioxus::prelude::*;
use ui::{make_client, use_auth};

use crate::Route;

/// Detail page component.
#[component]
pub fn PetDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut pet = use_signal(|| Option::<Pet>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let fetch_id = id.clone();
    let _loader = use_resource(move || {
        let id = fetch_id.clone();
        async move {
            loading.set(true);
            match api::pets::get(&make_client(), &id).await {
                Ok(data) => pet.set(Some(data)),
                Err(err) if err.is_not_found() => {
                    error.set(Some("This pet does not exist.".to_string()));
                }
                Err(err) => {
                    tracing::error!("failed to load pet {id}: {err}");
                    error.set(Some("Could not load this pet.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let delete_id = id.clone();
    let handle_delete = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            match api::pets::delete(&make_client(), &id).await {
                Ok(()) => {
                    nav.replace(Route::Pets {});
                }
                Err(err) => {
                    tracing::error!("failed to delete pet {id}: {err}");
                    error.set(Some("Could not delete this pet.".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    if let Some(err) = error() {
        return rsx! {
            div { class: "alert alert-error", "{err}" }
        };
    }

    let Some(p) = pet() else {
        return rsx! {
            div { class: "alert alert-error", "This pet does not exist." }
        };
    };

    // Owners and admins may manage the record.
    let can_manage = auth()
        .user
        .map_or(false, |u| u.role.is_admin() || u.id == p.owner_id);

    rsx! {
        div {
            class: "pet-detail",

            img { class: "pet-detail-image", src: "{p.image}", alt: "{p.name}" }

            div {
                class: "pet-detail-body",
                h1 { "{p.name}" }

                div {
                    class: "pet-card-chips",
                    span { class: "chip chip-primary", "{p.species.as_str()}" }
                    span { class: "chip chip-secondary", "{p.gender.as_str()}" }
                    span { class: "chip chip-info", "{p.size.as_str()}" }
                    span { class: "chip", "{p.age} years" }
                    span { class: "chip", "{p.color}" }
                    span { class: "chip chip-status", "{p.status.as_str()}" }
                }

                p { class: "pet-detail-description", "{p.description}" }

                if let Some(owner) = &p.owner {
                    div {
                        class: "pet-detail-owner",
                        h2 { "Contact" }
                        p { "{owner.name}" }
                        p { "{owner.email}" }
                        if !owner.phone.is_empty() {
                            p { "{owner.phone}" }
                        }
                    }
                }

                if can_manage {
                    div {
                        class: "pet-detail-actions",
                        Link {
                            class: "button",
                            to: Route::PetEdit { id: p.id.clone() },
                            "Edit"
                        }
                        button {
                            class: "button button-danger",
                            onclick: handle_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
