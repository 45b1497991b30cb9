//! Route guarding: the access decision applied at navigation time.

use dioxus::prelude::*;
use ui::{check_access, use_auth, Access};

use crate::Route;

/// Where to send the user after a successful login.
///
/// Set by [`RequireAuth`] when an unauthenticated visitor hits a guarded
/// route; consumed (and cleared) by the login view.
#[derive(Clone, Copy)]
pub struct ReturnTo(pub Signal<Option<Route>>);

pub fn use_return_to() -> ReturnTo {
    use_context::<ReturnTo>()
}

/// Gate around guarded destinations.
///
/// Re-evaluated on every render, so a logout while viewing a guarded page
/// redirects immediately. Unauthenticated visitors go to the login page
/// with the attempted route remembered; authenticated visitors lacking the
/// required role go to the home page.
#[component]
pub fn RequireAuth(
    #[props(default = false)] require_admin: bool,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let return_to = use_return_to();

    // Wait for the stored session to restore before deciding, so a reload
    // on a guarded page does not bounce a logged-in user to login.
    if auth().loading {
        return rsx! {};
    }

    let state = auth();
    match check_access(state.user.as_ref(), require_admin) {
        Access::Granted => rsx! {
            {children}
        },
        Access::NeedsLogin => {
            let mut remembered = return_to.0;
            remembered.set(Some(route));
            nav.replace(Route::Login {});
            rsx! {}
        }
        Access::Forbidden => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}
