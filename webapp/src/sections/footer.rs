use dioxus::prelude::*;

use minted_common::{
    catalog::{BRAND_NAME, COPYRIGHT, FOOTER_BLURB, FOOTER_COLUMNS},
    nav::NavLink,
};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { id: NavLink::Contact.anchor(), class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h4 { class: "footer-brand", {BRAND_NAME} }
                        p { {FOOTER_BLURB} }
                    }
                    for column in FOOTER_COLUMNS {
                        div {
                            h4 { {column.heading} }
                            ul {
                                for label in column.links.iter() {
                                    li {
                                        a { href: "#", {*label} }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { {COPYRIGHT} }
                    // social placeholders
                    div { class: "footer-social",
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}
