//! Pet create/edit form with image upload.

use api::{CreatePet, Gender, PetSize, Species, UpdatePet};
use dioxus::prelude::*;
use ui::forms::{validate_pet_form, PetFormInput};
use ui::make_client;

use crate::Route;

/// Create/edit form. `id` set means edit mode.
#[component]
pub fn PetForm(id: Option<String>) -> Element {
    let nav = use_navigator();
    let is_edit_mode = id.is_some();

    let mut name = use_signal(String::new);
    let mut breed = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut color = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut species = use_signal(|| Species::Dog);
    let mut gender = use_signal(|| Gender::Male);
    let mut size = use_signal(|| PetSize::Medium);
    let mut image = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(move || is_edit_mode);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    // Edit mode: populate the form from the existing record.
    let fetch_id = id.clone();
    let _loader = use_resource(move || {
        let id = fetch_id.clone();
        async move {
            let Some(id) = id else { return };
            match api::pets::get(&make_client(), &id).await {
                Ok(pet) => {
                    name.set(pet.name);
                    breed.set(pet.breed);
                    age.set(pet.age.to_string());
                    color.set(pet.color);
                    description.set(pet.description);
                    species.set(pet.species);
                    gender.set(pet.gender);
                    size.set(pet.size);
                    image.set(pet.image);
                }
                Err(err) => {
                    tracing::error!("failed to load pet {id}: {err}");
                    error.set(Some("Could not load this pet.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else { return };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&file_name).await else {
            return;
        };

        uploading.set(true);
        let client = make_client();
        let previous = image();
        match api::upload::upload_file(&client, &file_name, bytes).await {
            Ok(response) => {
                image.set(response.path);
                // Drop the replaced upload; a leftover file is harmless.
                if let Some(old) = previous.strip_prefix("/uploads/") {
                    if let Err(err) = api::upload::delete_file(&client, old).await {
                        tracing::warn!("failed to remove old upload {old}: {err}");
                    }
                }
            }
            Err(err) => {
                tracing::error!("upload failed: {err}");
                error.set(Some("Could not upload the image.".to_string()));
            }
        }
        uploading.set(false);
    };

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = submit_id.clone();
        spawn(async move {
            error.set(None);

            let input = PetFormInput {
                name: name(),
                breed: breed(),
                age: age(),
                description: description(),
            };
            let problems = validate_pet_form(&input);
            if let Some(first) = problems.into_iter().next() {
                error.set(Some(first));
                return;
            }
            let Ok(parsed_age) = input.age.trim().parse::<u32>() else {
                error.set(Some("Age must be a whole number".to_string()));
                return;
            };

            saving.set(true);
            let client = make_client();
            let result = match &id {
                Some(id) => {
                    let update = UpdatePet {
                        name: Some(input.name.trim().to_string()),
                        species: Some(species()),
                        breed: Some(input.breed.trim().to_string()),
                        age: Some(parsed_age),
                        gender: Some(gender()),
                        color: Some(color().trim().to_string()),
                        size: Some(size()),
                        description: Some(input.description.trim().to_string()),
                        image: Some(image()),
                        status: None,
                    };
                    api::pets::update(&client, id, &update).await
                }
                None => {
                    let create = CreatePet {
                        name: input.name.trim().to_string(),
                        species: species(),
                        breed: input.breed.trim().to_string(),
                        age: parsed_age,
                        gender: gender(),
                        color: color().trim().to_string(),
                        size: size(),
                        description: input.description.trim().to_string(),
                        image: image(),
                    };
                    api::pets::create(&client, &create).await
                }
            };

            match result {
                Ok(pet) => {
                    nav.replace(Route::PetDetail { id: pet.id });
                }
                Err(err) => {
                    tracing::error!("failed to save pet: {err}");
                    saving.set(false);
                    error.set(Some(if is_edit_mode {
                        "Could not update the pet.".to_string()
                    } else {
                        "Could not create the pet.".to_string()
                    }));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    rsx! {
        div {
            class: "form-page",

            h1 {
                if is_edit_mode { "Edit pet" } else { "Add a new pet" }
            }

            form {
                class: "entity-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                label { "Name"
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    label { "Type"
                        select {
                            value: "{species().as_str()}",
                            onchange: move |evt| {
                                species.set(Species::parse(&evt.value()).unwrap_or(Species::Dog))
                            },
                            option { value: "dog", "Dog" }
                            option { value: "cat", "Cat" }
                        }
                    }
                    label { "Gender"
                        select {
                            value: "{gender().as_str()}",
                            onchange: move |evt| {
                                gender.set(Gender::parse(&evt.value()).unwrap_or(Gender::Male))
                            },
                            option { value: "male", "Male" }
                            option { value: "female", "Female" }
                        }
                    }
                    label { "Size"
                        select {
                            value: "{size().as_str()}",
                            onchange: move |evt| {
                                size.set(PetSize::parse(&evt.value()).unwrap_or(PetSize::Medium))
                            },
                            option { value: "small", "Small" }
                            option { value: "medium", "Medium" }
                            option { value: "large", "Large" }
                        }
                    }
                }

                div {
                    class: "form-row",
                    label { "Breed"
                        input {
                            r#type: "text",
                            value: breed(),
                            oninput: move |evt| breed.set(evt.value()),
                        }
                    }
                    label { "Age"
                        input {
                            r#type: "number",
                            min: "0",
                            value: age(),
                            oninput: move |evt| age.set(evt.value()),
                        }
                    }
                    label { "Color"
                        input {
                            r#type: "text",
                            value: color(),
                            oninput: move |evt| color.set(evt.value()),
                        }
                    }
                }

                label { "Description"
                    textarea {
                        rows: "4",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                label {
                    class: "form-upload",
                    if uploading() { "Uploading..." } else if is_edit_mode { "Change image" } else { "Upload image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                }

                if !image().is_empty() {
                    img {
                        class: "form-image-preview",
                        src: "{api::upload::file_url(make_client().base_url(), &image())}",
                        alt: "preview",
                    }
                }

                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: saving() || uploading(),
                    if saving() { "Saving..." } else if is_edit_mode { "Update" } else { "Save" }
                }
            }
        }
    }
}
