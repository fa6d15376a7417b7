//! Construction hooks that wrap a host's scene-building steps.
//!
//! A [`HookInstaller`] is an ordered table of `(scope, category)` entries saying
//! which screens get layers injected around which construction step. Installing
//! it against an [`InterceptLayer`] yields [`LayerHooks`], which the host calls
//! in place of running a construction step directly.
//!
//! # Construction Flow
//!
//! ```text
//! construct(Background) ──▶ create BeforeBackground ──▶ original step
//!                                                            │
//!              emit Background ◀── create AfterBackground ◀──┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let layers = InterceptLayer::new();
//! let hooks = HookInstaller::standard().install(layers.clone(), InterceptConfig::default());
//!
//! // Inside the host's scene construction:
//! hooks.construct(&mut host, &lineage, scene_root, Category::Background, |host| {
//!     host.build_background(scene_root)
//! })?;
//! ```

use crate::config::InterceptConfig;
use crate::error::InterceptError;
use crate::intercept::InterceptLayer;
use crate::layer::{LayerDesc, LayerHost};
use crate::slot::{Category, Slot, SlotId};
use std::fmt;

/// Name of a screen type, such as `Title` or `Map`.
///
/// Names are compared exactly after trimming surrounding whitespace, so
/// `" Title"` and `"Title"` hook the same screen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.trim() {
            trimmed if trimmed.len() == name.len() => Self(name),
            trimmed => Self(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name given to the root container of a constructed screen, `Scene_<name>`.
    pub fn root_name(&self) -> String {
        format!("Scene_{}", self.0)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ScreenId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Which screens an entry applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookScope {
    /// A screen type and every screen derived from it.
    Screen(ScreenId),
    /// Any screen without a more specific entry for the category.
    AllScreens,
}

/// One injection point: layers go around `category` on screens in `scope`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookEntry {
    pub scope: HookScope,
    pub category: Category,
}

/// Builder for the table of injection points.
///
/// Entries keep their insertion order; adding an entry twice has no effect.
///
/// # Example
///
/// ```
/// use interlayer::{Category, HookInstaller};
///
/// let installer = HookInstaller::new()
///     .screen("Title", Category::Background)
///     .screen("Title", Category::Foreground)
///     .all_screens(Category::WindowLayer);
/// assert_eq!(installer.entries().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HookInstaller {
    entries: Vec<HookEntry>,
}

impl HookInstaller {
    /// Creates an empty installer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock injection table.
    ///
    /// - Background on `Splash`, `Title`, `Gameover` and `MenuBase`
    /// - Foreground on `Title`
    /// - Spriteset on `Map` and `Battle`
    /// - WindowLayer on every screen
    pub fn standard() -> Self {
        Self::new()
            .screen("Splash", Category::Background)
            .screen("Title", Category::Background)
            .screen("Gameover", Category::Background)
            .screen("MenuBase", Category::Background)
            .screen("Title", Category::Foreground)
            .screen("Map", Category::Spriteset)
            .screen("Battle", Category::Spriteset)
            .all_screens(Category::WindowLayer)
    }

    /// Adds an entry.
    pub fn hook(mut self, scope: HookScope, category: Category) -> Self {
        let entry = HookEntry { scope, category };
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
        self
    }

    /// Adds an entry for one screen type and the screens derived from it.
    pub fn screen(self, screen: impl Into<ScreenId>, category: Category) -> Self {
        self.hook(HookScope::Screen(screen.into()), category)
    }

    /// Adds a fallback entry covering every screen.
    pub fn all_screens(self, category: Category) -> Self {
        self.hook(HookScope::AllScreens, category)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HookEntry] {
        &self.entries
    }

    /// Binds the table to the registry and channels it will write to.
    pub fn install<L: Copy>(self, layers: InterceptLayer<L>, config: InterceptConfig) -> LayerHooks<L> {
        tracing::debug!(entries = self.entries.len(), "installed layer hooks");
        LayerHooks {
            entries: self.entries,
            layers,
            config,
        }
    }
}

/// Installed hooks, called by the host around its construction steps.
///
/// Every screen shares the same registry and channels, so after a
/// construction the registry describes the most recently built scene.
pub struct LayerHooks<L> {
    entries: Vec<HookEntry>,
    pub(crate) layers: InterceptLayer<L>,
    pub(crate) config: InterceptConfig,
}

impl<L: Copy + fmt::Debug> fmt::Debug for LayerHooks<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerHooks")
            .field("entries", &self.entries)
            .field("layers", &self.layers)
            .field("config", &self.config)
            .finish()
    }
}

impl<L: Copy + Eq + fmt::Debug> LayerHooks<L> {
    /// The registry and channels these hooks write to.
    pub fn layers(&self) -> &InterceptLayer<L> {
        &self.layers
    }

    /// The table these hooks were installed from.
    pub fn entries(&self) -> &[HookEntry] {
        &self.entries
    }

    pub fn config(&self) -> &InterceptConfig {
        &self.config
    }

    /// Finds the entry that intercepts `category` for a screen.
    ///
    /// `lineage` lists the screen first, then its base screens. The nearest
    /// screen with its own entry wins; [`HookScope::AllScreens`] is the fallback.
    pub fn resolve(&self, lineage: &[ScreenId], category: Category) -> Option<&HookEntry> {
        lineage
            .iter()
            .find_map(|screen| {
                self.entries.iter().find(|entry| {
                    entry.category == category
                        && matches!(&entry.scope, HookScope::Screen(id) if id == screen)
                })
            })
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.category == category && entry.scope == HookScope::AllScreens)
            })
    }

    /// Runs one construction step, injecting layers around it when hooked.
    ///
    /// When an entry resolves, the Before layer is created and attached to
    /// `parent`, then `original` runs, then the After layer is created and
    /// attached above whatever `original` added, and finally the category's
    /// channel is emitted. Without an entry, only `original` runs.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptError::Subscriber`] if a subscriber fails. The layers
    /// stay in the registry and are released by the next
    /// [`terminate`](Self::terminate).
    pub fn construct<H, R, F>(
        &self,
        host: &mut H,
        lineage: &[ScreenId],
        parent: L,
        category: Category,
        original: F,
    ) -> Result<R, InterceptError>
    where
        H: LayerHost<Layer = L>,
        F: FnOnce(&mut H) -> R,
    {
        if self.resolve(lineage, category).is_none() {
            tracing::trace!(%category, screen = ?lineage.first(), "construction step not hooked");
            return Ok(original(host));
        }

        self.inject(host, parent, SlotId::before(category));
        let output = original(host);
        self.inject(host, parent, SlotId::after(category));

        self.layers.hub().emit(category)?;
        Ok(output)
    }

    fn inject<H>(&self, host: &mut H, parent: L, slot: SlotId) -> L
    where
        H: LayerHost<Layer = L>,
    {
        let desc = LayerDesc::new(
            format!("{}_{}", self.config.name_prefix, slot),
            host.output_size(),
        );
        let layer = host.create_layer(&desc);

        if let Slot::Occupied(previous) = self.layers.registry().fill(slot, layer) {
            tracing::debug!(%slot, ?previous, "slot overwritten before teardown");
        }
        host.add_child(parent, layer);

        tracing::trace!(%slot, ?layer, "injected layer");
        layer
    }
}
