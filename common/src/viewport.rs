//! Ambient viewport signals.
//!
//! The header reads scroll offset and viewport width from its host. Hosts expose both through
//! a [`ViewportSource`]; acquiring a subscription hands back a [`Subscription`] guard that
//! releases the underlying listeners exactly once, when dropped or explicitly released.

use std::{cell::Cell, fmt, rc::Rc};

use tracing::trace;

/// Snapshot of the signals the header reacts to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
    /// Viewport width in CSS pixels.
    pub width: f64,
}

pub type ViewportHandler = Box<dyn FnMut(Viewport)>;

pub trait ViewportSource {
    /// Reads the signals as they stand right now.
    fn current(&self) -> Viewport;

    /// Starts delivering a snapshot on every scroll or resize.
    fn subscribe(&self, handler: ViewportHandler) -> Subscription;
}

/// Shared flag cleared when a subscription is released.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    fn end(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps `handler` so that it does nothing once `live` has ended.
///
/// Sources hand the wrapped closure to their event system. A callback that was already queued
/// when the subscription went away still runs, but can no longer reach component state.
pub fn guard<T>(live: Liveness, mut handler: impl FnMut(T)) -> impl FnMut(T) {
    move |value| {
        if live.is_live() {
            handler(value)
        } else {
            trace!("dropping signal delivered after release");
        }
    }
}

pub struct Subscription {
    live: Liveness,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(live: Liveness, release: impl FnOnce() + 'static) -> Self {
        Subscription {
            live,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            // handlers must see the flag before the listeners go away
            self.live.end();
            release();
            trace!("viewport subscription released");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut(Viewport)>>>>;

    // host double: keeps the registered handler around so tests can fire it by hand, even
    // after release, the way a browser may still dispatch an already queued event
    #[derive(Default)]
    pub struct ManualViewport {
        slot: Slot,
        retained: Slot,
        latest: Rc<Cell<Viewport>>,
        pub releases: Rc<Cell<usize>>,
    }

    impl ManualViewport {
        pub fn new(initial: Viewport) -> Self {
            let source = ManualViewport::default();
            source.latest.set(initial);
            source
        }

        pub fn emit(&self, viewport: Viewport) {
            self.latest.set(viewport);
            if let Some(handler) = self.slot.borrow_mut().as_mut() {
                handler(viewport);
            }
        }

        pub fn emit_stale(&self, viewport: Viewport) {
            if let Some(handler) = self.retained.borrow_mut().as_mut() {
                handler(viewport);
            }
        }

        pub fn is_listening(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    impl ViewportSource for ManualViewport {
        fn current(&self) -> Viewport {
            self.latest.get()
        }

        fn subscribe(&self, handler: ViewportHandler) -> Subscription {
            let live = Liveness::new();
            let guarded = Rc::new(RefCell::new(guard(live.clone(), handler)));

            let current = guarded.clone();
            *self.slot.borrow_mut() = Some(Box::new(move |vp: Viewport| {
                (&mut *current.borrow_mut())(vp)
            }));
            *self.retained.borrow_mut() = Some(Box::new(move |vp: Viewport| {
                (&mut *guarded.borrow_mut())(vp)
            }));

            let slot = self.slot.clone();
            let releases = self.releases.clone();
            Subscription::new(live, move || {
                slot.borrow_mut().take();
                releases.set(releases.get() + 1);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::{testing::ManualViewport, *};

    fn recorder() -> (Rc<RefCell<Vec<Viewport>>>, ViewportHandler) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |vp| sink.borrow_mut().push(vp)))
    }

    #[test]
    fn delivers_until_dropped() {
        let source = ManualViewport::default();
        let (seen, handler) = recorder();

        let subscription = source.subscribe(handler);
        source.emit(Viewport { scroll_y: 5.0, width: 1024.0 });
        drop(subscription);
        source.emit(Viewport { scroll_y: 50.0, width: 1024.0 });

        assert_eq!(*seen.borrow(), vec![Viewport { scroll_y: 5.0, width: 1024.0 }]);
        assert!(!source.is_listening());
    }

    #[test]
    fn current_tracks_last_emit() {
        let source = ManualViewport::new(Viewport { scroll_y: 0.0, width: 1280.0 });
        assert_eq!(source.current().width, 1280.0);

        let _subscription = source.subscribe(Box::new(|_| {}));
        source.emit(Viewport { scroll_y: 40.0, width: 600.0 });

        assert_eq!(source.current(), Viewport { scroll_y: 40.0, width: 600.0 });
    }

    #[test]
    fn release_runs_exactly_once() {
        let source = ManualViewport::default();
        let (_, handler) = recorder();

        let subscription = source.subscribe(handler);
        assert!(subscription.is_active());
        subscription.release();

        assert_eq!(source.releases.get(), 1);
    }

    #[test]
    fn stale_callbacks_are_inert() {
        let source = ManualViewport::default();
        let (seen, handler) = recorder();

        let subscription = source.subscribe(handler);
        subscription.release();
        source.emit_stale(Viewport { scroll_y: 500.0, width: 320.0 });

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn guard_follows_liveness() {
        let live = Liveness::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut handler = guard(live.clone(), move |n: usize| counter.set(counter.get() + n));

        handler(2);
        live.end();
        handler(3);

        assert_eq!(count.get(), 2);
    }
}
