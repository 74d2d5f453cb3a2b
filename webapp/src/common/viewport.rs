use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};

use minted_common::viewport::{
    Liveness, Subscription, Viewport, ViewportHandler, ViewportSource, guard,
};

// window events that can change what the header shows
const SIGNALS: [&str; 2] = ["scroll", "resize"];

fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };

    Viewport {
        scroll_y: window.scroll_y().unwrap_or_default(),
        width: window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default(),
    }
}

// scroll and resize listeners on the browser window
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    fn current(&self) -> Viewport {
        current_viewport()
    }

    fn subscribe(&self, handler: ViewportHandler) -> Subscription {
        let live = Liveness::new();

        let Some(window) = web_sys::window() else {
            warn!("no browser window, viewport signals unavailable");
            return Subscription::new(live, || ());
        };

        let mut handler = guard(live.clone(), handler);
        let callback = Closure::<dyn FnMut()>::new(move || handler(current_viewport()));

        for signal in SIGNALS {
            if let Err(err) =
                window.add_event_listener_with_callback(signal, callback.as_ref().unchecked_ref())
            {
                warn!(signal, ?err, "failed to add viewport listener");
            }
        }

        // the closure has to outlive its registration, so the release step owns it
        Subscription::new(live, move || {
            for signal in SIGNALS {
                if let Err(err) = window
                    .remove_event_listener_with_callback(signal, callback.as_ref().unchecked_ref())
                {
                    warn!(signal, ?err, "failed to remove viewport listener");
                }
            }
        })
    }
}

/// Host of the viewport signals, provided as context by the app root.
#[derive(Clone)]
pub struct ViewportSignals(pub Rc<dyn ViewportSource>);

/// Returns the provided [`ViewportSignals`] source, or the browser window when none is set.
pub fn use_viewport_source() -> Rc<dyn ViewportSource> {
    try_use_context::<ViewportSignals>()
        .map(|signals| signals.0)
        .unwrap_or_else(|| Rc::new(BrowserViewport))
}

/// Calls `on_change` with a fresh [`Viewport`] on every scroll or resize while the calling
/// component is mounted.
///
/// The listeners on `source` are registered once, on first render, and removed when the component
/// is dropped. Snapshots travel through a channel into a task owned by the component, so
/// `on_change` always runs inside the dioxus runtime and may write signals.
pub fn use_viewport(source: Rc<dyn ViewportSource>, on_change: impl FnMut(Viewport) + 'static) {
    let slot = use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<Viewport>();

        let subscription = source.subscribe(Box::new(move |viewport| {
            // the receiving task is gone once the component unmounts
            let _ = tx.unbounded_send(viewport);
        }));

        let mut on_change = on_change;
        spawn(async move {
            while let Some(viewport) = rx.next().await {
                on_change(viewport);
            }
        });

        debug!("subscribed to viewport signals");
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        if let Some(subscription) = slot.borrow_mut().take() {
            subscription.release();
            debug!("released viewport signals");
        }
    });
}
