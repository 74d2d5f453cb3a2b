use dioxus::prelude::*;

use minted_common::{
    catalog::{PRODUCTS, Product},
    nav::NavLink,
    style::ButtonVariant,
};

#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    product: Product,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product;

    let finish = format!("background-color: {};", product.finish.palette().var());
    let price = product.price().to_string();

    rsx! {
        div { class: "product-card",
            div { class: "product-image",
                div { class: "product-pattern" }
                div { class: "card-mock", style: finish,
                    div { class: "card-mock-window" }
                    div { class: "card-mock-seal" }
                }
                div { class: "product-badge", {product.kind.badge()} }
            }

            div { class: "product-info",
                h3 { class: "product-title", {product.title} }
                div { class: "product-meta",
                    span { class: "product-price", "{price}" }
                    span { class: "product-cta", "Add to Cart" }
                }
            }
        }
    }
}

#[component]
pub fn ShopSection() -> Element {
    let view_all = format!("{} btn-wide", ButtonVariant::Outline.class());

    rsx! {
        section { id: NavLink::ShopDrops.anchor(), class: "section shop",
            div { class: "container",
                div { class: "section-heading",
                    h2 { "Latest Drops" }
                    p {
                        "Fresh from the vault. Secure your piece of history before they're gone."
                    }
                }

                div { class: "product-grid",
                    for product in PRODUCTS {
                        ProductCard { product }
                    }
                }

                div { class: "shop-more",
                    button { class: view_all, r#type: "button", "View All Inventory" }
                }
            }
        }
    }
}
