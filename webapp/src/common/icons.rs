use dioxus::prelude::*;

use minted_common::catalog::Glyph;

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    glyph: Glyph,
}

// 24x24 stroked outline icons
#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = props.glyph;

    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: glyph.stroke(),
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": glyph.label(),
            match glyph {
                Glyph::Menu => rsx! {
                    line { x1: "3", y1: "12", x2: "21", y2: "12" }
                    line { x1: "3", y1: "6", x2: "21", y2: "6" }
                    line { x1: "3", y1: "18", x2: "21", y2: "18" }
                },
                Glyph::Close => rsx! {
                    line { x1: "18", y1: "6", x2: "6", y2: "18" }
                    line { x1: "6", y1: "6", x2: "18", y2: "18" }
                },
                Glyph::Bag => rsx! {
                    path { d: "M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z" }
                    line { x1: "3", y1: "6", x2: "21", y2: "6" }
                    path { d: "M16 10a4 4 0 0 1-8 0" }
                },
                Glyph::Shield => rsx! {
                    path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
                },
                Glyph::Star => rsx! {
                    polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
                },
                Glyph::Bolt => rsx! {
                    polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
                },
            }
        }
    }
}
