//! Synchronous publish/subscribe primitive.
//!
//! [`Publisher`] is the observer abstraction behind attribute events
//! (value-changed, max-reached, min-reached) and character events. Handlers run
//! inline on the emitting thread, in subscription order.
//!
//! Emission works on a snapshot of the handler list, so a handler may subscribe,
//! unsubscribe, or read the emitting attribute without deadlocking. Handlers
//! added during an emission only see later events.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Token returned by [`Publisher::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Handler<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<T>)>,
}

/// A list of callbacks notified on every [`emit`](Publisher::emit).
pub struct Publisher<T> {
    subscribers: RefCell<Subscribers<T>>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Subscribers {
                next_id: 0,
                handlers: Vec::new(),
            }),
        }
    }

    /// Registers `handler` and returns its subscription token.
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.handlers.push((id, Rc::new(handler)));
        id
    }

    /// Removes a handler. Returns false if the token was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.handlers.len();
        subscribers.handlers.retain(|(existing, _)| *existing != id);
        subscribers.handlers.len() != before
    }

    /// Invokes every handler registered at the time of the call.
    pub fn emit(&self, event: &T) {
        let handlers: Vec<Handler<T>> = self
            .subscribers
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.subscribers.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.len())
            .finish()
    }
}
