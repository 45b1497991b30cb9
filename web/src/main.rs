use dioxus::prelude::*;

use ui::AuthProvider;

use guard::{RequireAuth, ReturnTo};
use views::{
    About, Contact, Home, Login, Navbar, NotFound, PetDetail, PetForm, Pets, Register, UserForm,
    UserList,
};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/pets")]
    Pets {},
    #[route("/pets/new")]
    PetNew {},
    #[route("/pets/:id")]
    PetDetail { id: String },
    #[route("/pets/:id/edit")]
    PetEdit { id: String },
    #[route("/users")]
    Users {},
    #[route("/users/new")]
    UserNew {},
    #[route("/users/:id/edit")]
    UserEdit { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let return_to = use_signal(|| Option::<Route>::None);
    use_context_provider(|| ReturnTo(return_to));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// `/pets/new` — authenticated users only.
#[component]
fn PetNew() -> Element {
    rsx! {
        RequireAuth {
            PetForm {}
        }
    }
}

/// `/pets/:id/edit` — authenticated users only.
#[component]
fn PetEdit(id: String) -> Element {
    rsx! {
        RequireAuth {
            PetForm { id }
        }
    }
}

/// `/users` — admins only.
#[component]
fn Users() -> Element {
    rsx! {
        RequireAuth {
            require_admin: true,
            UserList {}
        }
    }
}

/// `/users/new` — admins only.
#[component]
fn UserNew() -> Element {
    rsx! {
        RequireAuth {
            require_admin: true,
            UserForm {}
        }
    }
}

/// `/users/:id/edit` — admins only.
#[component]
fn UserEdit(id: String) -> Element {
    rsx! {
        RequireAuth {
            require_admin: true,
            UserForm { id }
        }
    }
}
