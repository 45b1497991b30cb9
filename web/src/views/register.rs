//! Account registration page.

use dioxus::prelude::*;
use ui::forms::{validate_registration, UserFormInput};
use ui::{sign_up, use_auth};

use crate::guard::use_return_to;
use crate::Route;

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let return_to = use_return_to();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !auth().loading && auth().user.is_some() && !loading() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let input = UserFormInput {
                name: name(),
                email: email(),
                password: password(),
                phone: String::new(),
            };
            let problems = validate_registration(&input);
            if let Some(first) = problems.into_iter().next() {
                error.set(Some(first));
                return;
            }

            loading.set(true);
            match sign_up(auth, input.name.trim(), input.email.trim(), &input.password).await {
                Ok(()) => {
                    let mut remembered = return_to.0;
                    let target = remembered.take().unwrap_or(Route::Home {});
                    nav.replace(target);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create your account" }
            p { class: "auth-subtitle", "Join PawHome and help a pet find a home" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
