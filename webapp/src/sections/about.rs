use dioxus::prelude::*;

use minted_common::{catalog::BRAND_MONOGRAM, nav::NavLink};

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: NavLink::AboutUs.anchor(), class: "section about",
            div { class: "container",
                div { class: "about-inner",
                    div { class: "about-monogram",
                        span { {BRAND_MONOGRAM} }
                    }
                    h2 { "Preserving History." }
                    p {
                        "Carolina Minted Collectibles isn't just a shop; it's a tribute to the legends who paved the way. "
                        "We source the finest cards and memorabilia with a focus on North Carolina sports history. "
                        "Whether you are hunting for that elusive rookie card or a piece of the hardwood, we are your trusted partner."
                    }
                    div { class: "about-rule" }
                }
            }
        }
    }
}
