//! # cadview_event - Synchronous Signals
//!
//! Typed, single-threaded notification channels for viewport widgets:
//! - Priority-based delivery
//! - Subscriber handles for unsubscription
//! - Delivery runs to completion inside `emit`, on the caller's thread
//!
//! A viewport owns one `Signal` per notification kind (for example
//! "object selected") and the host subscribes closures to it.

use core::fmt;

/// Delivery priority of a subscriber
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Low = 0,
    #[default]
    Normal = 1,
    High = 2,
    Critical = 3,
}

/// Subscriber ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Handler function type
pub type Handler<T> = Box<dyn Fn(&T) + Send + Sync>;

struct Subscriber<T> {
    id: SubscriberId,
    priority: Priority,
    handler: Handler<T>,
}

/// A typed notification channel.
///
/// Handlers run synchronously in `emit`, highest priority first. Handlers
/// sharing a priority run in the order they subscribed.
pub struct Signal<T> {
    subscribers: Vec<Subscriber<T>>,
    next_subscriber_id: u64,
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Subscribe with normal priority
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe_with_priority(handler, Priority::Normal)
    }

    /// Subscribe with priority
    pub fn subscribe_with_priority<F>(&mut self, handler: F, priority: Priority) -> SubscriberId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;

        self.subscribers.push(Subscriber {
            id,
            priority,
            handler: Box::new(handler),
        });

        // Stable sort keeps subscription order within a priority
        self.subscribers.sort_by(|a, b| b.priority.cmp(&a.priority));

        id
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        before != self.subscribers.len()
    }

    /// Deliver an event to every subscriber, returning how many ran
    pub fn emit(&self, event: &T) -> usize {
        log::trace!("Emitting signal to {} subscriber(s)", self.subscribers.len());
        for subscriber in &self.subscribers {
            (subscriber.handler)(event);
        }
        self.subscribers.len()
    }

    /// Drop all subscribers
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
