use dioxus::prelude::*;
use ui::{sign_out, use_auth};

use crate::Route;

/// Top navigation bar, shared by every page via the route layout.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        header {
            class: "navbar",

            Link { class: "navbar-brand", to: Route::Home {}, "PawHome" }

            nav {
                class: "navbar-links",
                Link { to: Route::Pets {}, "Adopt" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Contact {}, "Contact" }

                if let Some(user) = auth().user {
                    if user.role.is_admin() {
                        Link { to: Route::Users {}, "Users" }
                    }
                    span { class: "navbar-user", "{user.name}" }
                    button {
                        class: "navbar-logout",
                        onclick: move |_| {
                            sign_out(auth);
                            nav.replace(Route::Home {});
                        },
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
