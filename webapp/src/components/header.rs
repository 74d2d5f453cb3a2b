use dioxus::prelude::*;

use minted_common::{
    catalog::{BRAND_WORDMARK, Glyph},
    header::{HeaderConfig, HeaderState, HeaderView},
    nav::NavLink,
};

use crate::common::{
    icons::Icon,
    viewport::{use_viewport, use_viewport_source},
};

/// Reactive handle on the header's view-state, owned by the component that called
/// [`use_header`].
#[derive(Clone, Copy)]
pub struct HeaderHandle {
    state: Signal<HeaderState>,
    width: Signal<f64>,
}

impl HeaderHandle {
    // layout mode is derived from the width on every call, never cached
    pub fn view(&self) -> HeaderView {
        self.state.read().view(*self.width.read())
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.read().is_menu_open()
    }

    pub fn toggle(&mut self) {
        self.state.write().toggle_menu();
    }

    pub fn follow(&mut self, link: NavLink) {
        self.state.write().activate_link(link);
    }
}

/// Header view-state kept in step with the provided viewport source for as long as the calling
/// component is mounted.
pub fn use_header(config: HeaderConfig) -> HeaderHandle {
    let source = use_viewport_source();

    let mut state = use_signal(|| HeaderState::new(config));
    let mut width = use_signal(|| source.current().width);

    use_viewport(source, move |viewport| {
        let mut next = *state.peek();
        if next.on_scroll(viewport.scroll_y) {
            state.set(next);
        }

        if *width.peek() != viewport.width {
            width.set(viewport.width);
        }
    });

    HeaderHandle { state, width }
}

#[component]
pub fn Header() -> Element {
    let config = try_use_context::<HeaderConfig>().unwrap_or_default();
    let mut header = use_header(config);

    let view = header.view();
    let menu_open = header.is_menu_open();
    let (wordmark, wordmark_accent) = BRAND_WORDMARK;

    rsx! {
        header { class: view.chrome.class(),
            div { class: "container header-bar",
                div { class: "brand",
                    div { class: "brand-mark",
                        span { "C" }
                    }
                    div { class: "brand-words",
                        span { class: "brand-primary", "{wordmark}" }
                        span { class: "brand-secondary", "{wordmark_accent}" }
                    }
                }

                // a menu opened while narrow stays open after widening until a link is followed
                if view.show_inline_nav {
                    nav { class: "inline-nav",
                        for link in NavLink::ALL {
                            a {
                                href: link.href(),
                                onclick: move |_| header.follow(link),
                                "{link}"
                            }
                        }
                        if view.show_cart {
                            button { class: "icon-button", r#type: "button",
                                Icon { glyph: Glyph::Bag }
                            }
                        }
                    }
                }

                if view.show_toggle {
                    button {
                        class: "icon-button",
                        r#type: "button",
                        aria_expanded: menu_open,
                        onclick: move |_| header.toggle(),
                        Icon { glyph: view.toggle_glyph }
                    }
                }
            }

            // clicking elsewhere on the page leaves the drawer open
            if view.show_drawer {
                nav { class: "drawer",
                    for link in NavLink::ALL {
                        a {
                            href: link.href(),
                            onclick: move |_| header.follow(link),
                            "{link}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use pretty_assertions::assert_eq;

    use minted_common::{
        header::{LayoutMode, ScrollChrome},
        viewport::{Viewport, ViewportSource, testing::ManualViewport},
    };

    use super::*;
    use crate::common::viewport::ViewportSignals;

    #[derive(Clone, Default)]
    struct Captured(Rc<Cell<Option<HeaderHandle>>>);

    #[component]
    fn Harness() -> Element {
        let header = use_header(HeaderConfig::default());
        use_context::<Captured>().0.set(Some(header));
        rsx! {}
    }

    struct Mounted {
        dom: VirtualDom,
        header: HeaderHandle,
    }

    impl Mounted {
        fn new(source: &Rc<ManualViewport>) -> Self {
            let captured = Captured::default();
            let signals: Rc<dyn ViewportSource> = source.clone();

            let mut dom = VirtualDom::new(Harness)
                .with_root_context(ViewportSignals(signals))
                .with_root_context(captured.clone());
            dom.rebuild_in_place();
            dom.process_events();

            let header = captured.0.get().expect("harness did not render");
            Mounted { dom, header }
        }

        fn emit(&mut self, source: &ManualViewport, scroll_y: f64, width: f64) {
            source.emit(Viewport { scroll_y, width });
            self.dom.process_events();
            self.dom.render_immediate(&mut NoOpMutations);
        }

        fn view(&self) -> HeaderView {
            self.dom.in_runtime(|| self.header.view())
        }

        fn menu_open(&self) -> bool {
            self.dom.in_runtime(|| self.header.is_menu_open())
        }

        fn toggle(&mut self) {
            let mut header = self.header;
            self.dom.in_runtime(|| header.toggle());
        }

        fn follow(&mut self, link: NavLink) {
            let mut header = self.header;
            self.dom.in_runtime(|| header.follow(link));
        }
    }

    #[test]
    fn initial_width_comes_from_source() {
        let source = Rc::new(ManualViewport::new(Viewport { scroll_y: 0.0, width: 500.0 }));
        let mounted = Mounted::new(&source);

        let view = mounted.view();
        assert_eq!(view.layout, LayoutMode::Narrow);
        assert_eq!(view.chrome, ScrollChrome::AtTop);
        assert!(source.is_listening());
    }

    #[test]
    fn scroll_resize_toggle_contact_then_unmount() {
        let source = Rc::new(ManualViewport::new(Viewport { scroll_y: 0.0, width: 1280.0 }));
        let mut mounted = Mounted::new(&source);

        assert_eq!(mounted.view().layout, LayoutMode::Wide);
        assert!(mounted.view().show_inline_nav);

        mounted.emit(&source, 50.0, 1280.0);
        assert_eq!(mounted.view().chrome, ScrollChrome::Scrolled);

        mounted.emit(&source, 50.0, 600.0);
        let view = mounted.view();
        assert_eq!(view.layout, LayoutMode::Narrow);
        assert!(view.show_toggle);
        assert!(!view.show_drawer);

        mounted.toggle();
        assert!(mounted.menu_open());
        assert!(mounted.view().show_drawer);
        assert_eq!(mounted.view().toggle_glyph, Glyph::Close);

        mounted.follow(NavLink::Contact);
        assert!(!mounted.menu_open());
        assert!(!mounted.view().show_drawer);

        mounted.emit(&source, 10.0, 600.0);
        assert_eq!(mounted.view().chrome, ScrollChrome::AtTop);

        drop(mounted);

        assert_eq!(source.releases.get(), 1);
        assert!(!source.is_listening());

        // an event queued before unmount reaches nothing
        source.emit_stale(Viewport { scroll_y: 900.0, width: 320.0 });
        assert_eq!(source.releases.get(), 1);
    }

    #[test]
    fn inline_link_closes_menu_left_open_by_widening() {
        let source = Rc::new(ManualViewport::new(Viewport { scroll_y: 0.0, width: 600.0 }));
        let mut mounted = Mounted::new(&source);

        mounted.toggle();
        mounted.emit(&source, 0.0, 1024.0);

        let view = mounted.view();
        assert!(mounted.menu_open());
        assert!(view.show_inline_nav);
        assert!(!view.show_drawer);

        mounted.follow(NavLink::ShopDrops);
        assert!(!mounted.menu_open());

        mounted.emit(&source, 0.0, 600.0);
        assert!(!mounted.view().show_drawer);
    }

    #[test]
    fn stale_event_after_unmount_leaves_source_released() {
        let source = Rc::new(ManualViewport::new(Viewport { scroll_y: 0.0, width: 1280.0 }));
        let mut mounted = Mounted::new(&source);
        mounted.emit(&source, 30.0, 1280.0);
        assert_eq!(mounted.view().chrome, ScrollChrome::Scrolled);

        drop(mounted);
        source.emit_stale(Viewport { scroll_y: 0.0, width: 320.0 });
        source.emit(Viewport { scroll_y: 0.0, width: 320.0 });

        assert_eq!(source.releases.get(), 1);
        assert!(!source.is_listening());
    }
}
