//! Navigation-time access decisions.

use store::Identity;

/// Outcome of an access check for a guarded destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the destination.
    Granted,
    /// Unauthenticated: send the user to the login page, remembering
    /// where they were headed.
    NeedsLogin,
    /// Authenticated but lacking the required role: send the user home.
    Forbidden,
}

/// Decide whether the current user may enter a guarded destination.
///
/// Checked in order: authentication first, then the role requirement.
/// Pure and stateless; callers re-evaluate on every session-state change,
/// so a logout while viewing a guarded page redirects immediately.
pub fn check_access(user: Option<&Identity>, require_admin: bool) -> Access {
    let Some(user) = user else {
        return Access::NeedsLogin;
    };
    if require_admin && !user.role.is_admin() {
        return Access::Forbidden;
    }
    Access::Granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role,
            phone: String::new(),
        }
    }

    #[test]
    fn unauthenticated_needs_login_regardless_of_role_requirement() {
        assert_eq!(check_access(None, false), Access::NeedsLogin);
        assert_eq!(check_access(None, true), Access::NeedsLogin);
    }

    #[test]
    fn plain_user_on_an_admin_route_is_forbidden_not_sent_to_login() {
        let user = identity(Role::User);
        assert_eq!(check_access(Some(&user), true), Access::Forbidden);
    }

    #[test]
    fn plain_user_passes_ordinary_guarded_routes() {
        let user = identity(Role::User);
        assert_eq!(check_access(Some(&user), false), Access::Granted);
    }

    #[test]
    fn admin_passes_everywhere() {
        let admin = identity(Role::Admin);
        assert_eq!(check_access(Some(&admin), false), Access::Granted);
        assert_eq!(check_access(Some(&admin), true), Access::Granted);
    }
}
