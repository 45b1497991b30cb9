//! The adoptable-pet catalog: search, filters, paginated grid.

use api::{Gender, Pet, PetSize, Species};
use dioxus::prelude::*;
use ui::{make_client, use_auth, CatalogQuery, PetCard};

use crate::guard::use_return_to;
use crate::Route;

/// Catalog page component.
#[component]
pub fn Pets() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let return_to = use_return_to();
    let mut pets = use_signal(Vec::<Pet>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(CatalogQuery::default);

    // One resource per screen: a restart drops the superseded future, so
    // a stale response cannot overwrite a newer one.
    let _loader = use_resource(move || async move {
        loading.set(true);
        match api::pets::list(&make_client()).await {
            Ok(data) => pets.set(data),
            Err(err) => {
                tracing::error!("failed to load pets: {err}");
                error.set(Some(
                    "Could not load the pets. Try again later.".to_string(),
                ));
            }
        }
        loading.set(false);
    });

    let handle_add = move |_| {
        if auth().user.is_some() {
            nav.push(Route::PetNew {});
        } else {
            let mut remembered = return_to.0;
            remembered.set(Some(Route::PetNew {}));
            nav.push(Route::Login {});
        }
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

    let q = query();
    let species_value = q.species().map_or("all", Species::as_str);
    let gender_value = q.gender().map_or("all", Gender::as_str);
    let size_value = q.size().map_or("all", PetSize::as_str);
    let all = pets();
    let filtered = q.filter(&all);
    let found = filtered.len();
    let total_pages = CatalogQuery::total_pages(found);
    let visible: Vec<Pet> = q.paginate(&filtered).into_iter().cloned().collect();

    rsx! {
        div {
            class: "catalog",

            div {
                class: "catalog-header",
                h1 { "Adopt your best friend" }
                button { class: "button button-primary", onclick: handle_add, "Add pet" }
            }

            div {
                class: "catalog-filters",

                input {
                    class: "catalog-search",
                    r#type: "search",
                    placeholder: "Search by name, breed or description...",
                    value: "{q.search()}",
                    oninput: move |evt| query.with_mut(|q| q.set_search(evt.value())),
                }

                select {
                    value: "{species_value}",
                    onchange: move |evt| {
                        query.with_mut(|q| q.set_species(Species::parse(&evt.value())))
                    },
                    option { value: "all", "All types" }
                    option { value: "dog", "Dog" }
                    option { value: "cat", "Cat" }
                }

                select {
                    value: "{gender_value}",
                    onchange: move |evt| {
                        query.with_mut(|q| q.set_gender(Gender::parse(&evt.value())))
                    },
                    option { value: "all", "All genders" }
                    option { value: "male", "Male" }
                    option { value: "female", "Female" }
                }

                select {
                    value: "{size_value}",
                    onchange: move |evt| {
                        query.with_mut(|q| q.set_size(PetSize::parse(&evt.value())))
                    },
                    option { value: "all", "All sizes" }
                    option { value: "small", "Small" }
                    option { value: "medium", "Medium" }
                    option { value: "large", "Large" }
                }
            }

            p { class: "catalog-count", "{found} pets found" }

            div {
                class: "catalog-grid",
                for pet in visible {
                    PetCard {
                        key: "{pet.id}",
                        pet: pet.clone(),
                        on_select: move |id: String| {
                            nav.push(Route::PetDetail { id });
                        },
                    }
                }
            }

            if total_pages > 1 {
                div {
                    class: "pager",
                    for page in 1..=total_pages {
                        button {
                            class: if page == q.page() { "pager-page active" } else { "pager-page" },
                            onclick: move |_| query.with_mut(|q| q.set_page(page)),
                            "{page}"
                        }
                    }
                }
            }
        }
    }
}
