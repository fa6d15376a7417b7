//! A reference host: display tree, screen types, and a screen director.
//!
//! Real applications implement [`LayerHost`](crate::LayerHost) for their own
//! renderer and call [`LayerHooks`](crate::LayerHooks) from their own scene
//! lifecycle. This module provides a small, complete host for driving the hooks
//! without a renderer, which the crate's tests and demo use.
//!
//! # Overview
//!
//! - [`Stage`] stores containers as `hecs` entities with [`LayerNode`] and
//!   [`Hierarchy`] components.
//! - [`Director`] registers screens and constructs one at a time.
//! - Each screen lists its construction steps by [`Category`](crate::Category);
//!   screens derived from a base inherit the base's hooks.
//!
//! # Example
//!
//! ```
//! use interlayer::StageConfig;
//! use interlayer::stage::Director;
//!
//! let mut director = Director::with_standard_hooks(StageConfig::default());
//!
//! director.screen("Map", |screen| {
//!     screen.spriteset(|stage, root| {
//!         stage.spawn_child(root, "Spriteset_Map");
//!     });
//!     screen.window_layer(|stage, root| {
//!         stage.spawn_child(root, "WindowLayer");
//!     });
//! })
//! .on_enter(|layers| {
//!     let reader = layers.registry().clone();
//!     layers.on_create_spriteset(move || {
//!         let overlay = reader.after_spriteset();
//!         assert!(overlay.is_some());
//!         Ok(())
//!     });
//! });
//!
//! director.switch_to("Map").unwrap();
//! director.terminate();
//! assert_eq!(director.stage().layer_count(), 0);
//! ```

mod director;
mod screen;
mod stage;

pub use director::Director;
pub use screen::{EnterFn, ScreenBuilder, ScreenDef, ScreenSetup, StepFn};
pub use stage::{Hierarchy, LayerNode, Stage};
