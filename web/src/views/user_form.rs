//! User create/edit form for the admin screens.

use api::{CreateUser, Role, UpdateUser};
use dioxus::prelude::*;
use ui::forms::{validate_user_form, UserFormInput};
use ui::make_client;

use crate::Route;

/// Create/edit form. `id` set means edit mode, where an empty password
/// leaves the stored one unchanged.
#[component]
pub fn UserForm(id: Option<String>) -> Element {
    let nav = use_navigator();
    let is_edit_mode = id.is_some();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(move || is_edit_mode);
    let mut saving = use_signal(|| false);

    let fetch_id = id.clone();
    let _loader = use_resource(move || {
        let id = fetch_id.clone();
        async move {
            let Some(id) = id else { return };
            match api::users::get(&make_client(), &id).await {
                Ok(user) => {
                    name.set(user.name);
                    email.set(user.email);
                    phone.set(user.phone);
                    role.set(user.role);
                }
                Err(err) => {
                    tracing::error!("failed to load user {id}: {err}");
                    error.set(Some("Could not load this user.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = submit_id.clone();
        spawn(async move {
            error.set(None);

            let input = UserFormInput {
                name: name(),
                email: email(),
                password: password(),
                phone: phone(),
            };
            let problems = validate_user_form(&input, is_edit_mode);
            if let Some(first) = problems.into_iter().next() {
                error.set(Some(first));
                return;
            }

            saving.set(true);
            let client = make_client();
            let result = match &id {
                Some(id) => {
                    let update = UpdateUser {
                        name: Some(input.name.trim().to_string()),
                        email: Some(input.email.trim().to_string()),
                        password: (!input.password.is_empty()).then(|| input.password.clone()),
                        phone: Some(input.phone.trim().to_string()),
                        role: Some(role()),
                    };
                    api::users::update(&client, id, &update).await
                }
                None => {
                    let create = CreateUser {
                        name: input.name.trim().to_string(),
                        email: input.email.trim().to_string(),
                        password: input.password.clone(),
                        phone: input.phone.trim().to_string(),
                        role: Some(role()),
                    };
                    api::users::create(&client, &create).await
                }
            };

            match result {
                Ok(_) => {
                    nav.replace(Route::Users {});
                }
                Err(err) => {
                    tracing::error!("failed to save user: {err}");
                    saving.set(false);
                    error.set(Some(if is_edit_mode {
                        "Could not update the user.".to_string()
                    } else {
                        "Could not create the user.".to_string()
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
                if is_edit_mode { "Edit user" } else { "Add user" }
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

                label { "Email"
                    input {
                        r#type: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                label {
                    if is_edit_mode { "Password (leave empty to keep)" } else { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                label { "Phone"
                    input {
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt| phone.set(evt.value()),
                    }
                }

                label { "Role"
                    select {
                        value: if role().is_admin() { "admin" } else { "user" },
                        onchange: move |evt| {
                            role.set(if evt.value() == "admin" { Role::Admin } else { Role::User })
                        },
                        option { value: "user", "User" }
                        option { value: "admin", "Admin" }
                    }
                }

                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else if is_edit_mode { "Update" } else { "Add" }
                }
            }
        }
    }
}
