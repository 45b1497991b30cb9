mod navbar;
pub use navbar::Navbar;

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod pets;
pub use pets::Pets;

mod pet_detail;
pub use pet_detail::PetDetail;

mod pet_form;
pub use pet_form::PetForm;

mod users;
pub use users::UserList;

mod user_form;
pub use user_form::UserForm;

mod not_found;
pub use not_found::NotFound;
