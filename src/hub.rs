//! Per-category notification channels.
//!
//! Each [`Category`] has its own ordered channel. Subscribers are notified after
//! both layers of their category exist, in the order they subscribed.
//!
//! # Example
//!
//! ```
//! use interlayer::{Category, SubscriptionHub};
//!
//! let hub = SubscriptionHub::new();
//! let sub = hub.subscribe(Category::Background, || {
//!     println!("background layers are ready");
//!     Ok(())
//! });
//! assert_eq!(hub.subscriber_count(Category::Background), 1);
//!
//! hub.unsubscribe(sub);
//! assert_eq!(hub.subscriber_count(Category::Background), 0);
//! ```

use crate::error::InterceptError;
use crate::slot::Category;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

// Shared by every hub so a handle never matches an entry in another hub.
static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(0);

/// A subscriber callback. Returning an error aborts the emission in progress.
pub type Callback = Rc<dyn Fn() -> anyhow::Result<()>>;

/// Handle to one subscription, returned by [`SubscriptionHub::subscribe`].
///
/// Subscribing the same callback twice yields two distinct handles, and each
/// handle removes only its own entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    category: Category,
    id: u64,
}

impl Subscription {
    /// The channel this subscription belongs to.
    pub fn category(&self) -> Category {
        self.category
    }
}

#[derive(Default)]
struct Channel {
    entries: Vec<(u64, Callback)>,
}

#[derive(Default)]
struct HubState {
    channels: [Channel; 4],
}

/// Four independent subscription channels, one per [`Category`].
///
/// Like [`LayerRegistry`](crate::LayerRegistry), this is a shared handle;
/// clones see the same channels. Callbacks may capture a clone and subscribe or
/// unsubscribe while being notified. Such changes take effect from the next
/// emission, because emission runs over the channel as it was when it started.
#[derive(Clone, Default)]
pub struct SubscriptionHub {
    state: Rc<RefCell<HubState>>,
}

impl fmt::Debug for SubscriptionHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        let mut map = f.debug_map();
        for category in Category::ALL {
            map.entry(&category, &state.channels[category.index()].entries.len());
        }
        map.finish()
    }
}

impl SubscriptionHub {
    /// Create a hub with four empty channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback to a category's channel.
    pub fn subscribe<F>(&self, category: Category, callback: F) -> Subscription
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        let id = NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed);
        self.state.borrow_mut().channels[category.index()]
            .entries
            .push((id, Rc::new(callback)));

        tracing::trace!(%category, id, "subscribed");
        Subscription { category, id }
    }

    /// Remove the entry behind `subscription`.
    ///
    /// Handles that are already removed, or that came from another hub, are
    /// ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut state = self.state.borrow_mut();
        state.channels[subscription.category.index()]
            .entries
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Remove every callback subscribed to `category`.
    pub fn unsubscribe_all(&self, category: Category) {
        self.state.borrow_mut().channels[category.index()]
            .entries
            .clear();
    }

    /// Empty all four channels.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        for channel in &mut state.channels {
            channel.entries.clear();
        }
    }

    /// Number of callbacks currently subscribed to `category`.
    pub fn subscriber_count(&self, category: Category) -> usize {
        self.state.borrow().channels[category.index()].entries.len()
    }

    /// Invoke every callback of `category` in subscription order.
    ///
    /// The first failing callback stops the emission and its error is
    /// returned; nothing is swallowed.
    pub(crate) fn emit(&self, category: Category) -> Result<(), InterceptError> {
        // Snapshot so callbacks can touch the hub without a live borrow.
        let callbacks: Vec<Callback> = self.state.borrow().channels[category.index()]
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        tracing::debug!(%category, subscribers = callbacks.len(), "emitting create event");

        for callback in callbacks {
            callback().map_err(|source| InterceptError::Subscriber { category, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    type Boxed = Box<dyn Fn() -> anyhow::Result<()>>;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Boxed) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |tag: &'static str| -> Boxed {
            let sink = Rc::clone(&sink);
            Box::new(move || {
                sink.borrow_mut().push(tag);
                Ok(())
            })
        };
        (log, make)
    }

    #[test]
    fn emits_in_subscription_order() {
        let hub = SubscriptionHub::new();
        let (log, make) = recorder();
        hub.subscribe(Category::Background, make("a"));
        hub.subscribe(Category::Background, make("b"));
        hub.subscribe(Category::Background, make("c"));

        hub.emit(Category::Background).unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn channels_are_independent() {
        let hub = SubscriptionHub::new();
        let (log, make) = recorder();
        hub.subscribe(Category::Foreground, make("fg"));
        hub.subscribe(Category::Spriteset, make("sprites"));

        hub.emit(Category::Spriteset).unwrap();
        hub.emit(Category::WindowLayer).unwrap();
        assert_eq!(*log.borrow(), vec!["sprites"]);
    }

    #[test]
    fn duplicate_callbacks_fire_twice() {
        let hub = SubscriptionHub::new();
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = Rc::clone(&count);
            move || -> anyhow::Result<()> {
                count.set(count.get() + 1);
                Ok(())
            }
        };
        let first = hub.subscribe(Category::WindowLayer, callback.clone());
        let second = hub.subscribe(Category::WindowLayer, callback);
        assert_ne!(first, second);

        hub.emit(Category::WindowLayer).unwrap();
        assert_eq!(count.get(), 2);

        hub.unsubscribe(first);
        hub.emit(Category::WindowLayer).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn unsubscribe_unknown_is_noop() {
        let hub = SubscriptionHub::new();
        let sub = hub.subscribe(Category::Background, || Ok(()));
        hub.unsubscribe(sub);
        hub.unsubscribe(sub);
        assert_eq!(hub.subscriber_count(Category::Background), 0);
    }

    #[test]
    fn handle_from_another_hub_is_ignored() {
        let first = SubscriptionHub::new();
        let second = SubscriptionHub::new();
        let foreign = first.subscribe(Category::Background, || Ok(()));
        let own = second.subscribe(Category::Background, || Ok(()));
        assert_ne!(foreign, own);

        second.unsubscribe(foreign);
        assert_eq!(second.subscriber_count(Category::Background), 1);
        assert_eq!(first.subscriber_count(Category::Background), 1);
    }

    #[test]
    fn unsubscribe_all_clears_one_category() {
        let hub = SubscriptionHub::new();
        hub.subscribe(Category::Background, || Ok(()));
        hub.subscribe(Category::Background, || Ok(()));
        hub.subscribe(Category::Foreground, || Ok(()));

        hub.unsubscribe_all(Category::Background);
        assert_eq!(hub.subscriber_count(Category::Background), 0);
        assert_eq!(hub.subscriber_count(Category::Foreground), 1);
    }

    #[test]
    fn failing_callback_stops_emission() {
        let hub = SubscriptionHub::new();
        let (log, make) = recorder();
        hub.subscribe(Category::Spriteset, make("first"));
        hub.subscribe(Category::Spriteset, || Err(anyhow::anyhow!("broken extension")));
        hub.subscribe(Category::Spriteset, make("never"));

        let err = hub.emit(Category::Spriteset).unwrap_err();
        assert!(matches!(
            err,
            InterceptError::Subscriber {
                category: Category::Spriteset,
                ..
            }
        ));
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn unsubscribing_during_emit_applies_next_time() {
        let hub = SubscriptionHub::new();
        let (log, make) = recorder();
        let handle = Rc::new(Cell::new(None));

        let remover = {
            let hub = hub.clone();
            let handle = Rc::clone(&handle);
            move || -> anyhow::Result<()> {
                if let Some(sub) = handle.get() {
                    hub.unsubscribe(sub);
                }
                Ok(())
            }
        };
        hub.subscribe(Category::Background, remover);
        handle.set(Some(hub.subscribe(Category::Background, make("late"))));

        hub.emit(Category::Background).unwrap();
        hub.emit(Category::Background).unwrap();
        assert_eq!(*log.borrow(), vec!["late"]);
        hub.clear();
    }

    #[test]
    fn resubscribe_after_clear() {
        let hub = SubscriptionHub::new();
        let (log, make) = recorder();
        hub.subscribe(Category::Foreground, make("old"));
        hub.clear();
        for category in Category::ALL {
            assert_eq!(hub.subscriber_count(category), 0);
        }

        hub.subscribe(Category::Foreground, make("new"));
        hub.emit(Category::Foreground).unwrap();
        assert_eq!(*log.borrow(), vec!["new"]);
    }
}
