use dioxus::prelude::*;

use minted_common::style::ButtonVariant;

use super::NEWSLETTER_ANCHOR;

// signup markup only, nothing is submitted or stored
#[component]
pub fn Newsletter() -> Element {
    rsx! {
        section { id: NEWSLETTER_ANCHOR, class: "newsletter",
            div { class: "container",
                div { class: "newsletter-card",
                    h3 { "Don't Miss the Next Drop" }
                    p {
                        "Join the VIP list for early access to new arrivals and exclusive discounts."
                    }
                    div { class: "newsletter-form",
                        input {
                            r#type: "email",
                            placeholder: "Enter your email address",
                        }
                        button { class: ButtonVariant::Primary.class(), r#type: "button", "Subscribe" }
                    }
                }
            }
        }
    }
}
