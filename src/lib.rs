//! # Interlayer
//!
//! **Inject your own layers around a scene's construction steps.**
//!
//! A scene-based renderer builds each scene in a fixed sequence: background,
//! foreground, sprite set, window layer. Interlayer wraps those steps so that an
//! empty, input-transparent container is created directly before and directly
//! after each one, and tells subscribers when a pair is ready. When the scene
//! ends, the injected containers are destroyed and everything resets.
//!
//! ## Quick Start
//!
//! ```
//! use interlayer::{
//!     Category, Entity, HookInstaller, InterceptConfig, InterceptLayer, ScreenId, StageConfig,
//! };
//! use interlayer::stage::Stage;
//!
//! let layers = InterceptLayer::<Entity>::new();
//! let hooks = HookInstaller::standard().install(layers.clone(), InterceptConfig::default());
//! let mut stage = Stage::new(StageConfig::default());
//! let root = stage.spawn_root("Scene_Title");
//! let title = [ScreenId::from("Title")];
//!
//! let reader = layers.clone();
//! layers.on_create_background(move || {
//!     // Draw between the title backdrop and whatever comes next.
//!     let _above_backdrop = reader.after_background();
//!     Ok(())
//! });
//!
//! hooks.construct(&mut stage, &title, root, Category::Background, |stage| {
//!     stage.spawn_child(root, "TitleBackground");
//! })?;
//! assert!(layers.after_background().is_some());
//!
//! hooks.terminate(&mut stage, |_| ());
//! assert!(layers.after_background().is_none());
//! # Ok::<(), interlayer::InterceptError>(())
//! ```
//!
//! ## Pieces
//!
//! - [`InterceptLayer`]: the eight slot accessors and per-category subscriptions
//! - [`HookInstaller`] / [`LayerHooks`]: which screens are hooked, and the hook calls themselves
//! - [`LayerHost`]: the trait your renderer implements
//! - [`stage`]: a renderer-free host and screen director

mod config;
mod error;
mod hooks;
mod hub;
mod intercept;
mod layer;
mod registry;
mod slot;
pub mod stage;
mod teardown;

pub use config::{InterceptConfig, StageConfig};
pub use error::InterceptError;
pub use hooks::{HookEntry, HookInstaller, HookScope, LayerHooks, ScreenId};
pub use hub::{Callback, Subscription, SubscriptionHub};
pub use intercept::InterceptLayer;
pub use layer::{LayerDesc, LayerHost};
pub use registry::LayerRegistry;
pub use slot::{Category, Placement, Slot, SlotId};

// Re-export the math and ECS types that appear in the public API
pub use glam::UVec2;
pub use hecs::Entity;
