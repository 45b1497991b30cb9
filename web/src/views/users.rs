//! User administration: the admin-only account table.

use api::User;
use dioxus::prelude::*;
use ui::make_client;

use crate::Route;

/// User table component (wrapped by the admin guard in the route table).
#[component]
pub fn UserList() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        loading.set(true);
        match api::users::list(&make_client()).await {
            Ok(data) => users.set(data),
            Err(err) => {
                tracing::error!("failed to load users: {err}");
                error.set(Some("Could not load the users.".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_delete = move |id: String| {
        spawn(async move {
            match api::users::delete(&make_client(), &id).await {
                Ok(()) => users.with_mut(|list| list.retain(|user| user.id != id)),
                Err(err) => {
                    tracing::error!("failed to delete user {id}: {err}");
                    error.set(Some("Could not delete the user.".to_string()));
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
            class: "admin-page",

            div {
                class: "admin-header",
                h1 { "Users" }
                Link { class: "button button-primary", to: Route::UserNew {}, "Add user" }
            }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Role" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users() {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_delete: EventHandler<String>) -> Element {
    let delete_id = user.id.clone();

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.phone}" }
            td { "{user.role:?}" }
            td {
                class: "admin-actions",
                Link {
                    class: "button button-small",
                    to: Route::UserEdit { id: user.id.clone() },
                    "Edit"
                }
                button {
                    class: "button button-small button-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
