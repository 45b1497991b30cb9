//! Client-side form validation.
//!
//! Rules are parameterized by an explicit `is_edit_mode` flag rather than
//! inferred from which fields happen to be filled: on edit, an empty
//! password means "leave unchanged"; on create, it is an error.

/// Raw input of the user form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Raw input of the pet form. `age` is the unparsed field text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetFormInput {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub description: String,
}

/// Validate the user management form. Returns user-facing messages; empty
/// means valid. Unlike registration, a contact phone is mandatory here: it
/// is what the pet detail page shows to prospective adopters.
pub fn validate_user_form(input: &UserFormInput, is_edit_mode: bool) -> Vec<String> {
    let mut errors = account_errors(input, is_edit_mode);

    if input.phone.trim().is_empty() {
        errors.push("Phone is required".to_string());
    }

    errors
}

/// Validate the self-service registration form. The phone field is not
/// part of sign-up, so only the account fields are checked.
pub fn validate_registration(input: &UserFormInput) -> Vec<String> {
    account_errors(input, false)
}

fn account_errors(input: &UserFormInput, is_edit_mode: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if input.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(input.email.trim()) {
        errors.push("Email is not valid".to_string());
    }
    if !is_edit_mode && input.password.is_empty() {
        errors.push("Password is required".to_string());
    }
    if !input.password.is_empty() && input.password.len() < 6 {
        errors.push("Password must be at least 6 characters".to_string());
    }

    errors
}

/// Validate the pet form. Returns user-facing messages; empty means valid.
pub fn validate_pet_form(input: &PetFormInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if input.breed.trim().is_empty() {
        errors.push("Breed is required".to_string());
    }
    if input.description.trim().is_empty() {
        errors.push("Description is required".to_string());
    }
    if input.age.trim().parse::<u32>().is_err() {
        errors.push("Age must be a whole number".to_string());
    }

    errors
}

fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserFormInput {
        UserFormInput {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            phone: "555-0101".to_string(),
        }
    }

    #[test]
    fn valid_user_input_passes_both_modes() {
        assert!(validate_user_form(&valid_user(), false).is_empty());
        assert!(validate_user_form(&valid_user(), true).is_empty());
    }

    #[test]
    fn password_is_required_only_when_creating() {
        let mut input = valid_user();
        input.password.clear();

        let create_errors = validate_user_form(&input, false);
        assert!(create_errors.iter().any(|e| e.contains("Password")));

        // On edit an empty password means "leave unchanged".
        assert!(validate_user_form(&input, true).is_empty());
    }

    #[test]
    fn short_password_is_rejected_in_both_modes() {
        let mut input = valid_user();
        input.password = "abc".to_string();

        assert!(!validate_user_form(&input, false).is_empty());
        assert!(!validate_user_form(&input, true).is_empty());
    }

    #[test]
    fn phone_is_required_on_the_user_form_but_not_for_registration() {
        let mut input = valid_user();
        input.phone = "  ".to_string();

        for edit in [false, true] {
            assert!(validate_user_form(&input, edit)
                .iter()
                .any(|e| e.contains("Phone")));
        }

        assert!(validate_registration(&input).is_empty());
    }

    #[test]
    fn email_must_look_like_an_address() {
        let mut input = valid_user();
        for bad in ["plainaddress", "a@nodot", "@example.com", "a@.com"] {
            input.email = bad.to_string();
            assert!(
                !validate_user_form(&input, false).is_empty(),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn pet_form_requires_fields_and_a_numeric_age() {
        let input = PetFormInput {
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            age: "3".to_string(),
            description: "Friendly.".to_string(),
        };
        assert!(validate_pet_form(&input).is_empty());

        let mut bad = input.clone();
        bad.age = "three".to_string();
        assert!(validate_pet_form(&bad)
            .iter()
            .any(|e| e.contains("Age")));

        let mut empty = input;
        empty.name.clear();
        empty.description = "  ".to_string();
        assert_eq!(validate_pet_form(&empty).len(), 2);
    }
}
