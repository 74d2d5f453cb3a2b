use dioxus::prelude::*;

use minted_common::catalog::{FEATURES, Feature};

use crate::common::icons::Icon;

#[derive(Clone, PartialEq, Props)]
struct FeatureCardProps {
    feature: Feature,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    let feature = props.feature;

    rsx! {
        div { class: "feature-card",
            div { class: "feature-icon",
                Icon { glyph: feature.glyph }
            }
            h3 { class: "feature-title", {feature.title} }
            p { class: "feature-desc", {feature.description} }
        }
    }
}

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "section features",
            div { class: "container",
                div { class: "features-grid",
                    for feature in FEATURES {
                        FeatureCard { feature }
                    }
                }
            }
        }
    }
}
