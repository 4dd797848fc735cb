//! Viewport signal with scoped subscriptions.
//!
//! The window size is modeled as a signal rather than ambient global state.
//! An open viewer holds a [`ViewportSubscription`]; dropping it (on close)
//! deregisters the listener, so repeated open/close cycles never pile up
//! listeners.
//!
//! Resize events are coalesced: [`ViewportSignal::set`] only marks
//! subscriptions dirty, and [`ViewportSubscription::take_change`] hands out
//! the latest size once. A burst of resizes between two polls costs one
//! recompute.

use crate::types::Viewport;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug)]
struct SignalState {
    current: Viewport,
    next_id: u64,
    /// Subscription id → has an unseen change.
    dirty: BTreeMap<u64, bool>,
}

/// Single-threaded observable window size.
#[derive(Debug, Clone)]
pub struct ViewportSignal {
    state: Rc<RefCell<SignalState>>,
}

impl ViewportSignal {
    pub fn new(initial: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState {
                current: initial,
                next_id: 0,
                dirty: BTreeMap::new(),
            })),
        }
    }

    pub fn current(&self) -> Viewport {
        self.state.borrow().current
    }

    /// Record a resize event. Setting the same size again is not a change.
    pub fn set(&self, viewport: Viewport) {
        let mut state = self.state.borrow_mut();
        if state.current == viewport {
            return;
        }
        state.current = viewport;
        for dirty in state.dirty.values_mut() {
            *dirty = true;
        }
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.dirty.insert(id, false);
        tracing::trace!(subscription = id, "viewport subscribed");
        ViewportSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().dirty.len()
    }
}

/// Registration on a [`ViewportSignal`], released on drop.
#[derive(Debug)]
pub struct ViewportSubscription {
    id: u64,
    state: Weak<RefCell<SignalState>>,
}

impl ViewportSubscription {
    /// The latest viewport if it changed since the last call.
    pub fn take_change(&mut self) -> Option<Viewport> {
        let state = self.state.upgrade()?;
        let mut state = state.borrow_mut();
        let current = state.current;
        let dirty = state.dirty.get_mut(&self.id)?;
        if std::mem::take(dirty) {
            Some(current)
        } else {
            None
        }
    }

    /// Current viewport, regardless of change tracking.
    pub fn current(&self) -> Option<Viewport> {
        self.state.upgrade().map(|s| s.borrow().current)
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().dirty.remove(&self.id);
            tracing::trace!(subscription = self.id, "viewport unsubscribed");
        }
    }
}
