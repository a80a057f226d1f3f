//! Navigation events and history.
//!
//! [`NavigationBus`] is a single-threaded publish/subscribe channel. Each
//! subscriber holds a [`Subscription`]; dropping it removes the listener, so
//! a listener lives exactly as long as the component that owns the handle.
//!
//! [`Navigator`] ties a [`History`] implementation to a bus: pushing a new
//! location and broadcasting it happen in one call.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::link::{ClickModifiers, LinkOutcome};
use crate::location::Location;

type Listener = Rc<dyn Fn(&Location)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Process-wide navigation event channel.
#[derive(Clone, Default)]
pub struct NavigationBus {
    inner: Rc<RefCell<Listeners>>,
}

impl NavigationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Notify every listener registered at the time of the call.
    ///
    /// Listeners run with the bus unlocked, so they may subscribe or
    /// unsubscribe (themselves included) while being notified.
    pub fn broadcast(&self, location: &Location) {
        let snapshot: Vec<(u64, Listener)> = self.inner.borrow().entries.clone();
        for (id, listener) in snapshot {
            // Skip listeners removed by an earlier listener in this round
            let still_registered = self.inner.borrow().entries.iter().any(|(i, _)| *i == id);
            if still_registered {
                listener(location);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Handle for a registered listener. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Remove the listener now. Same as dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

// ============================================================================
// History
// ============================================================================

/// Host navigation history (the browser's, or an in-memory stand-in).
pub trait History {
    /// Location the history currently points at.
    fn current(&self) -> Location;

    /// Push a new entry without reloading the page.
    fn push(&self, location: &Location);
}

/// In-memory history stack with back/forward.
#[derive(Debug)]
pub struct MemoryHistory {
    state: RefCell<(Vec<Location>, usize)>,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            state: RefCell::new((vec![initial], 0)),
        }
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.1 == 0 {
            return false;
        }
        state.1 -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.1 + 1 >= state.0.len() {
            return false;
        }
        state.1 += 1;
        true
    }

    /// Number of entries, including forward entries.
    pub fn len(&self) -> usize {
        self.state.borrow().0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().0.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl History for MemoryHistory {
    fn current(&self) -> Location {
        let state = self.state.borrow();
        state.0[state.1].clone()
    }

    fn push(&self, location: &Location) {
        let mut state = self.state.borrow_mut();
        let index = state.1;
        // Pushing drops any forward entries, like the browser does
        state.0.truncate(index + 1);
        state.0.push(location.clone());
        state.1 = index + 1;
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// History plus the bus that announces its changes.
pub struct Navigator<H> {
    history: Rc<H>,
    bus: NavigationBus,
}

impl<H> Clone for Navigator<H> {
    fn clone(&self) -> Self {
        Self {
            history: Rc::clone(&self.history),
            bus: self.bus.clone(),
        }
    }
}

impl<H: History> Navigator<H> {
    pub fn new(history: H) -> Self {
        Self {
            history: Rc::new(history),
            bus: NavigationBus::new(),
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn bus(&self) -> &NavigationBus {
        &self.bus
    }

    pub fn current(&self) -> Location {
        self.history.current()
    }

    /// Listen for navigation events. See [`NavigationBus::subscribe`].
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        self.bus.subscribe(listener)
    }

    /// Push `target` onto the history, then notify every listener synchronously.
    pub fn navigate(&self, target: &Location) {
        self.history.push(target);
        self.bus.broadcast(target);
    }

    /// Re-read the history and broadcast it. Called on back/forward.
    pub fn sync(&self) -> Location {
        let location = self.history.current();
        self.bus.broadcast(&location);
        location
    }

    /// Handle a link click towards `target`.
    ///
    /// A plain click runs `suppress_default` (the host's `preventDefault`)
    /// before the history push and the broadcast. A click with a modifier
    /// held is left to the browser, which opens a new tab.
    pub fn follow(
        &self,
        modifiers: ClickModifiers,
        target: &Location,
        suppress_default: impl FnOnce(),
    ) -> LinkOutcome {
        let outcome = LinkOutcome::classify(modifiers);
        if outcome == LinkOutcome::Handled {
            suppress_default();
            self.navigate(target);
        }
        outcome
    }
}
