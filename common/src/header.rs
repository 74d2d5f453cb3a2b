//! Header view state.
//!
//! The header owns two independent flags: whether the page has scrolled past the chrome
//! threshold, and whether the mobile drawer is open. Its layout mode is never stored; it is
//! derived from the viewport width each time the header is rendered.

use serde::Deserialize;
use tracing::debug;

use crate::{NARROW_BREAKPOINT_PX, SCROLL_THRESHOLD_PX, catalog::Glyph, nav::NavLink};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    // offsets strictly above this switch the header to its scrolled chrome
    pub scroll_threshold: f64,

    // widths at or below this use the narrow (toggle + drawer) layout
    pub narrow_breakpoint: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            scroll_threshold: SCROLL_THRESHOLD_PX,
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollChrome {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollChrome {
    pub fn class(self) -> &'static str {
        match self {
            Self::AtTop => "site-header",
            Self::Scrolled => "site-header scrolled",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    config: HeaderConfig,
    chrome: ScrollChrome,
    menu: MenuState,
}

impl HeaderState {
    pub fn new(config: HeaderConfig) -> Self {
        HeaderState {
            config,
            chrome: ScrollChrome::AtTop,
            menu: MenuState::Closed,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.chrome == ScrollChrome::Scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Applies a scroll offset and reports whether the chrome changed.
    ///
    /// Only offsets strictly greater than the threshold count as scrolled; negative
    /// overscroll and NaN leave the header at the top.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let next = if offset > self.config.scroll_threshold {
            ScrollChrome::Scrolled
        } else {
            ScrollChrome::AtTop
        };

        if next == self.chrome {
            return false;
        }

        debug!(offset, from = ?self.chrome, to = ?next, "header scroll chrome changed");
        self.chrome = next;
        true
    }

    pub fn toggle_menu(&mut self) {
        let next = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };

        debug!(from = ?self.menu, to = ?next, "header menu toggled");
        self.menu = next;
    }

    /// Following a navigation link closes the drawer if it was open.
    ///
    /// Returns whether the menu changed.
    pub fn activate_link(&mut self, link: NavLink) -> bool {
        if self.menu == MenuState::Closed {
            return false;
        }

        debug!(link = %link, "drawer closed by navigation");
        self.menu = MenuState::Closed;
        true
    }

    pub fn layout_for(&self, width: f64) -> LayoutMode {
        if width > self.config.narrow_breakpoint {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }

    pub fn view(&self, width: f64) -> HeaderView {
        let layout = self.layout_for(width);
        let wide = layout == LayoutMode::Wide;

        HeaderView {
            chrome: self.chrome,
            layout,
            show_inline_nav: wide,
            show_cart: wide,
            show_toggle: !wide,
            show_drawer: !wide && self.is_menu_open(),
            toggle_glyph: if self.is_menu_open() {
                Glyph::Close
            } else {
                Glyph::Menu
            },
        }
    }
}

/// What the header shows for a given state and viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub chrome: ScrollChrome,
    pub layout: LayoutMode,
    pub show_inline_nav: bool,
    pub show_cart: bool,
    pub show_toggle: bool,
    pub show_drawer: bool,
    pub toggle_glyph: Glyph,
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::viewport::{Viewport, ViewportSource, testing::ManualViewport};

    fn header() -> HeaderState {
        HeaderState::new(HeaderConfig::default())
    }

    #[test]
    fn starts_at_top_and_closed() {
        let state = header();

        assert!(!state.is_scrolled());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn scrolled_iff_offset_exceeds_threshold() {
        let mut state = header();

        for offset in [0.0, 1.0, 19.5, 20.0, 20.5, 21.0, 50.0, 5000.0, -40.0, f64::NAN] {
            state.on_scroll(offset);
            assert_eq!(state.is_scrolled(), offset > 20.0, "offset {offset}");
        }
    }

    #[test]
    fn threshold_boundary() {
        let mut state = header();

        state.on_scroll(20.0);
        assert_eq!(state.view(1024.0).chrome, ScrollChrome::AtTop);

        state.on_scroll(21.0);
        assert_eq!(state.view(1024.0).chrome, ScrollChrome::Scrolled);

        state.on_scroll(20.0);
        assert_eq!(state.view(1024.0).chrome, ScrollChrome::AtTop);
    }

    #[test]
    fn on_scroll_reports_changes_only() {
        let mut state = header();

        assert!(!state.on_scroll(10.0));
        assert!(state.on_scroll(30.0));
        assert!(!state.on_scroll(300.0));
        assert!(state.on_scroll(0.0));
    }

    #[test]
    fn custom_threshold() {
        let mut state = HeaderState::new(HeaderConfig {
            scroll_threshold: 100.0,
            ..HeaderConfig::default()
        });

        state.on_scroll(50.0);
        assert!(!state.is_scrolled());
        state.on_scroll(101.0);
        assert!(state.is_scrolled());
    }

    #[test]
    fn toggle_pairs_cancel() {
        let mut state = header();

        state.toggle_menu();
        assert!(state.is_menu_open());

        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn any_link_closes_open_menu() {
        for link in NavLink::ALL {
            let mut state = header();
            state.toggle_menu();

            assert!(state.activate_link(link));
            assert!(!state.is_menu_open(), "{link}");
        }
    }

    #[test]
    fn link_on_closed_menu_is_a_no_op() {
        let mut state = header();

        assert!(!state.activate_link(NavLink::Home));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn scrolling_keeps_menu_open() {
        let mut state = header();
        state.toggle_menu();

        state.on_scroll(400.0);
        state.on_scroll(0.0);

        assert!(state.is_menu_open());
    }

    #[test]
    fn links_leave_scroll_chrome_alone() {
        let mut state = header();
        state.on_scroll(90.0);
        state.toggle_menu();

        state.activate_link(NavLink::Contact);

        assert!(state.is_scrolled());
    }

    #[test]
    fn layout_follows_breakpoint() {
        let state = header();

        assert_eq!(state.layout_for(1024.0), LayoutMode::Wide);
        assert_eq!(state.layout_for(769.0), LayoutMode::Wide);
        assert_eq!(state.layout_for(768.0), LayoutMode::Narrow);
        assert_eq!(state.layout_for(320.0), LayoutMode::Narrow);
        assert_eq!(state.layout_for(f64::NAN), LayoutMode::Narrow);
    }

    #[test]
    fn visibility_rules() {
        for width in [320.0, 767.0, 768.0, 769.0, 1440.0] {
            for open in [false, true] {
                let mut state = header();
                if open {
                    state.toggle_menu();
                }

                let view = state.view(width);
                let wide = width > 768.0;

                assert_eq!(view.show_inline_nav, wide, "w={width} open={open}");
                assert_eq!(view.show_cart, wide, "w={width} open={open}");
                assert_eq!(view.show_toggle, !wide, "w={width} open={open}");
                assert_eq!(view.show_drawer, !wide && open, "w={width} open={open}");
            }
        }
    }

    #[test]
    fn open_menu_survives_widening() {
        let mut state = header();
        state.toggle_menu();

        assert!(!state.view(1024.0).show_drawer);
        assert!(state.view(600.0).show_drawer);
    }

    #[test]
    fn toggle_glyph_tracks_menu() {
        let mut state = header();
        assert_eq!(state.view(500.0).toggle_glyph, Glyph::Menu);

        state.toggle_menu();
        assert_eq!(state.view(500.0).toggle_glyph, Glyph::Close);
    }

    #[test]
    fn chrome_classes() {
        assert_eq!(ScrollChrome::AtTop.class(), "site-header");
        assert_eq!(ScrollChrome::Scrolled.class(), "site-header scrolled");
    }

    // mirrors the component wiring: a viewport subscription feeding shared header state
    fn mount(
        source: &ManualViewport,
    ) -> (
        Rc<RefCell<HeaderState>>,
        Rc<RefCell<f64>>,
        crate::viewport::Subscription,
    ) {
        let state = Rc::new(RefCell::new(header()));
        let width = Rc::new(RefCell::new(0.0));

        let (s, w) = (state.clone(), width.clone());
        let subscription = source.subscribe(Box::new(move |vp: Viewport| {
            s.borrow_mut().on_scroll(vp.scroll_y);
            *w.borrow_mut() = vp.width;
        }));

        (state, width, subscription)
    }

    #[test]
    fn unmount_stops_scroll_updates() {
        let source = ManualViewport::default();
        let (state, _, subscription) = mount(&source);

        source.emit(Viewport { scroll_y: 50.0, width: 1024.0 });
        assert!(state.borrow().is_scrolled());

        drop(subscription);
        source.emit(Viewport { scroll_y: 0.0, width: 1024.0 });
        source.emit_stale(Viewport { scroll_y: 0.0, width: 1024.0 });

        assert!(state.borrow().is_scrolled());
        assert_eq!(source.releases.get(), 1);
    }

    #[test]
    fn scroll_resize_toggle_contact_scenario() {
        let source = ManualViewport::default();
        let (state, width, _subscription) = mount(&source);

        source.emit(Viewport { scroll_y: 0.0, width: 1024.0 });
        let view = state.borrow().view(*width.borrow());
        assert_eq!(view.chrome, ScrollChrome::AtTop);
        assert_eq!(view.layout, LayoutMode::Wide);
        assert!(!view.show_drawer);

        source.emit(Viewport { scroll_y: 50.0, width: 1024.0 });
        let view = state.borrow().view(*width.borrow());
        assert_eq!(view.chrome, ScrollChrome::Scrolled);
        assert_eq!(view.layout, LayoutMode::Wide);

        source.emit(Viewport { scroll_y: 50.0, width: 500.0 });
        let view = state.borrow().view(*width.borrow());
        assert!(!view.show_inline_nav);
        assert!(view.show_toggle);

        state.borrow_mut().toggle_menu();
        let view = state.borrow().view(*width.borrow());
        assert!(view.show_drawer);
        assert_eq!(NavLink::ALL.len(), 4);

        state.borrow_mut().activate_link(NavLink::Contact);
        let view = state.borrow().view(*width.borrow());
        assert!(!view.show_drawer);
        assert!(!state.borrow().is_menu_open());
    }
}
