//! Synchronous change notification
//!
//! A [`Notifier`] keeps an ordered list of listeners and calls every one of
//! them, in subscription order, before [`Notifier::notify`] returns. There is
//! no queueing and no deferred delivery.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt;

new_key_type! {
    /// Handle returned by [`Notifier::subscribe`], used to unsubscribe
    pub struct SubscriptionId;
}

/// Listener function type
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered set of listeners for events of type `E`
pub struct Notifier<E> {
    listeners: SlotMap<SubscriptionId, Listener<E>>,
    /// Subscription order; slot iteration order is not insertion order
    order: SmallVec<[SubscriptionId; 4]>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: SmallVec::new(),
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        self.order.push(id);
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener in subscription order
    pub fn notify(&mut self, event: &E) {
        tracing::trace!(listeners = self.order.len(), "notifying listeners");
        for id in &self.order {
            if let Some(listener) = self.listeners.get_mut(*id) {
                listener(event);
            }
        }
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
