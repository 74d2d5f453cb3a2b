use dioxus::prelude::*;

use minted_common::{catalog::ESTABLISHED, nav::NavLink, style::ButtonVariant};

use super::NEWSLETTER_ANCHOR;

#[component]
pub fn Hero() -> Element {
    let primary = format!("{} btn-raised", ButtonVariant::Primary.class());
    let outline = ButtonVariant::Outline.class();

    rsx! {
        section { id: NavLink::Home.anchor(), class: "hero",
            div { class: "argyle-bg hero-pattern" }
            div { class: "hero-glow" }

            div { class: "container",
                div { class: "hero-content",
                    div { class: "hero-badge", {ESTABLISHED} }
                    h1 { class: "hero-title",
                        "Collectibles "
                        br {}
                        span { class: "accent", "Born & Bred." }
                    }
                    p { class: "hero-subtitle",
                        "Premium trading cards, memorabilia, and exclusive drops for the true fan. Certified authentic, delivered with Southern hospitality."
                    }
                    div { class: "hero-actions",
                        a { class: primary, href: NavLink::ShopDrops.href(), "Shop Latest Drop" }
                        a { class: outline, href: "#{NEWSLETTER_ANCHOR}", "Join the Community" }
                    }
                }
            }
        }
    }
}
