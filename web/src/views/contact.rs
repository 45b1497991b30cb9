use dioxus::prelude::*;

/// Static contact information page.
#[component]
pub fn Contact() -> Element {
    rsx! {
        div {
            class: "static-page",

            h1 { "Contact" }

            h2 { "Reach us" }
            ul {
                li { "Phone: (11) 99999-9999" }
                li { "Email: contact@pawhome.org" }
                li { "Address: 123 Example St, São Paulo - SP" }
            }

            h2 { "Opening hours" }
            ul {
                li { "Monday to Friday: 9am to 6pm" }
                li { "Saturday: 9am to 1pm" }
                li { "Sunday: closed" }
            }
        }
    }
}
