//! The public face of the layer registry and its subscription channels.

use crate::hub::{Subscription, SubscriptionHub};
use crate::registry::LayerRegistry;
use crate::slot::Category;
use std::fmt;

/// Injected layers plus the channels announcing them.
///
/// Construct one per application and hand it to [`HookInstaller::install`](crate::HookInstaller::install)
/// and to any code that wants to draw into the injected layers. Cloning is
/// cheap and every clone sees the same state.
///
/// # Example
///
/// ```
/// use interlayer::InterceptLayer;
///
/// let layers = InterceptLayer::<u32>::new();
/// let reader = layers.clone();
/// layers.on_create_background(move || {
///     // Both background layers exist by the time this runs.
///     assert!(reader.before_background().is_some());
///     assert!(reader.after_background().is_some());
///     Ok(())
/// });
/// ```
pub struct InterceptLayer<L> {
    registry: LayerRegistry<L>,
    hub: SubscriptionHub,
}

impl<L> Clone for InterceptLayer<L> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            hub: self.hub.clone(),
        }
    }
}

impl<L: Copy> Default for InterceptLayer<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Copy + fmt::Debug> fmt::Debug for InterceptLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptLayer")
            .field("registry", &self.registry)
            .field("hub", &self.hub)
            .finish()
    }
}

impl<L: Copy> InterceptLayer<L> {
    /// Create an empty registry with four empty channels.
    pub fn new() -> Self {
        Self {
            registry: LayerRegistry::new(),
            hub: SubscriptionHub::new(),
        }
    }

    /// The slot storage, for generic access by [`SlotId`](crate::SlotId).
    pub fn registry(&self) -> &LayerRegistry<L> {
        &self.registry
    }

    /// The subscription channels, for generic access by [`Category`].
    pub fn hub(&self) -> &SubscriptionHub {
        &self.hub
    }

    /// Empty all eight slots and all four channels.
    ///
    /// Layers are forgotten, not destroyed. Subscribing afterwards behaves
    /// exactly like subscribing to a fresh instance.
    /// Forget every layer and drop every subscription.
    pub fn clear(&self) {
        self.registry.clear();
        self.hub.clear();
    }

    /// The layer injected below the background, if constructed.
    pub fn before_background(&self) -> Option<L> {
        self.registry.before_background()
    }

    /// The layer injected above the background, if constructed.
    pub fn after_background(&self) -> Option<L> {
        self.registry.after_background()
    }

    /// The layer injected below the foreground, if constructed.
    pub fn before_foreground(&self) -> Option<L> {
        self.registry.before_foreground()
    }

    /// The layer injected above the foreground, if constructed.
    pub fn after_foreground(&self) -> Option<L> {
        self.registry.after_foreground()
    }

    /// The layer injected below the sprite set, if constructed.
    pub fn before_spriteset(&self) -> Option<L> {
        self.registry.before_spriteset()
    }

    /// The layer injected above the sprite set, if constructed.
    pub fn after_spriteset(&self) -> Option<L> {
        self.registry.after_spriteset()
    }

    /// The layer injected below the window layer, if constructed.
    pub fn before_window_layer(&self) -> Option<L> {
        self.registry.before_window_layer()
    }

    /// The layer injected above the window layer, if constructed.
    pub fn after_window_layer(&self) -> Option<L> {
        self.registry.after_window_layer()
    }

    /// Run `callback` each time the background layers are created.
    pub fn on_create_background<F>(&self, callback: F) -> Subscription
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.hub.subscribe(Category::Background, callback)
    }

    /// Run `callback` each time the foreground layers are created.
    pub fn on_create_foreground<F>(&self, callback: F) -> Subscription
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.hub.subscribe(Category::Foreground, callback)
    }

    /// Run `callback` each time the sprite set layers are created.
    pub fn on_create_spriteset<F>(&self, callback: F) -> Subscription
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.hub.subscribe(Category::Spriteset, callback)
    }

    /// Run `callback` each time the window layer's layers are created.
    pub fn on_create_window_layer<F>(&self, callback: F) -> Subscription
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.hub.subscribe(Category::WindowLayer, callback)
    }

    /// Remove one background subscription, or all of them when `None`.
    pub fn off_create_background(&self, subscription: Option<Subscription>) {
        self.off(Category::Background, subscription);
    }

    /// Remove one foreground subscription, or all of them when `None`.
    pub fn off_create_foreground(&self, subscription: Option<Subscription>) {
        self.off(Category::Foreground, subscription);
    }

    /// Remove one sprite set subscription, or all of them when `None`.
    pub fn off_create_spriteset(&self, subscription: Option<Subscription>) {
        self.off(Category::Spriteset, subscription);
    }

    /// Remove one window layer subscription, or all of them when `None`.
    pub fn off_create_window_layer(&self, subscription: Option<Subscription>) {
        self.off(Category::WindowLayer, subscription);
    }

    fn off(&self, category: Category, subscription: Option<Subscription>) {
        match subscription {
            None => self.hub.unsubscribe_all(category),
            Some(sub) if sub.category() == category => self.hub.unsubscribe(sub),
            Some(sub) => {
                tracing::warn!(
                    expected = %category,
                    actual = %sub.category(),
                    "ignoring unsubscribe for another channel"
                );
            }
        }
    }
}
