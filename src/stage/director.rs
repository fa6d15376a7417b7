//! Director for registering screens and switching between them.

use super::screen::{ScreenBuilder, ScreenDef, ScreenSetup};
use super::stage::Stage;
use crate::config::{InterceptConfig, StageConfig};
use crate::error::InterceptError;
use crate::hooks::{HookInstaller, LayerHooks, ScreenId};
use crate::intercept::InterceptLayer;
use crate::layer::LayerHost;
use hecs::Entity;
use std::collections::HashMap;

struct ActiveScreen {
    name: String,
    root: Entity,
}

/// Owns the stage and runs screen lifecycles through the layer hooks.
///
/// The director is responsible for:
/// - Storing registered screens
/// - Tracking the active screen and its root container
/// - Terminating the active screen before building the next one
/// - Running every construction step through [`LayerHooks::construct`]
///
/// Only one screen is active at a time, so the shared registry always
/// describes the active screen.
///
/// # Example
///
/// ```
/// use interlayer::StageConfig;
/// use interlayer::stage::Director;
///
/// let mut director = Director::with_standard_hooks(StageConfig::default());
/// director.screen("Title", |screen| {
///     screen.background(|stage, root| {
///         stage.spawn_child(root, "TitleBackground");
///     });
/// });
///
/// director.switch_to("Title").unwrap();
/// assert!(director.layers().after_background().is_some());
/// ```
pub struct Director {
    stage: Stage,
    hooks: LayerHooks<Entity>,

    /// All registered screens by name.
    pub(crate) screens: HashMap<String, ScreenDef>,

    active: Option<ActiveScreen>,
}

impl Director {
    pub fn new(stage: Stage, hooks: LayerHooks<Entity>) -> Self {
        Self {
            stage,
            hooks,
            screens: HashMap::new(),
            active: None,
        }
    }

    /// A director over a fresh stage with [`HookInstaller::standard`] installed.
    pub fn with_standard_hooks(config: StageConfig) -> Self {
        let hooks =
            HookInstaller::standard().install(InterceptLayer::new(), InterceptConfig::default());
        Self::new(Stage::new(config), hooks)
    }

    /// Register a screen, replacing any screen of the same name.
    pub fn screen<F>(&mut self, id: impl Into<ScreenId>, setup: F) -> ScreenBuilder<'_>
    where
        F: FnOnce(&mut ScreenSetup),
    {
        let id = id.into();
        let mut steps = ScreenSetup::default();
        setup(&mut steps);

        self.screens
            .insert(id.as_str().to_string(), ScreenDef::new(id.clone(), steps.steps));
        ScreenBuilder {
            screen_id: id,
            director: self,
        }
    }

    /// The registry and channels shared by every screen.
    pub fn layers(&self) -> &InterceptLayer<Entity> {
        self.hooks.layers()
    }

    pub fn hooks(&self) -> &LayerHooks<Entity> {
        &self.hooks
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn get_screen(&self, name: &str) -> Option<&ScreenDef> {
        self.screens.get(name)
    }

    /// Get the name of the currently active screen.
    pub fn active_screen(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.name.as_str())
    }

    /// Root container of the active screen.
    pub fn active_root(&self) -> Option<Entity> {
        self.active.as_ref().map(|active| active.root)
    }

    /// The screen followed by its chain of bases.
    ///
    /// Bases need not be registered themselves; the chain stops at the first
    /// unregistered name or at a repeat.
    pub fn lineage(&self, name: &str) -> Vec<ScreenId> {
        let mut lineage: Vec<ScreenId> = Vec::new();
        let mut current = Some(ScreenId::new(name));
        while let Some(id) = current {
            if lineage.contains(&id) {
                tracing::warn!(screen = name, base = %id, "screen bases form a cycle");
                break;
            }
            current = self
                .screens
                .get(id.as_str())
                .and_then(|screen| screen.base.clone());
            lineage.push(id);
        }
        lineage
    }

    /// Terminate the active screen, then construct `name` from scratch.
    ///
    /// Switching to the active screen rebuilds it.
    ///
    /// # Errors
    ///
    /// [`InterceptError::UnknownScreen`] if `name` is not registered; nothing
    /// is terminated in that case. [`InterceptError::Subscriber`] if a
    /// subscriber fails; construction stops there and the partly built screen
    /// stays active until the next switch or [`terminate`](Self::terminate).
    pub fn switch_to(&mut self, name: impl Into<ScreenId>) -> Result<(), InterceptError> {
        let id = name.into();
        let name = id.as_str().to_string();
        if !self.screens.contains_key(&name) {
            tracing::warn!(screen = %name, "screen not found");
            return Err(InterceptError::UnknownScreen(name));
        }

        self.terminate();

        let lineage = self.lineage(&name);
        let root = self.stage.spawn_root(id.root_name());
        self.active = Some(ActiveScreen {
            name: name.clone(),
            root,
        });
        tracing::debug!(screen = %name, ?lineage, "constructing screen");

        let Some(screen) = self.screens.get_mut(&name) else {
            return Err(InterceptError::UnknownScreen(name));
        };
        screen.enter(self.hooks.layers());

        for (category, step) in &mut screen.steps {
            self.hooks
                .construct(&mut self.stage, &lineage, root, *category, |stage| {
                    step(stage, root)
                })?;
        }
        Ok(())
    }

    /// Terminate the active screen, if any.
    ///
    /// Injected layers are released first, then the screen's `on_exit` runs,
    /// then its root container and everything under it is destroyed.
    pub fn terminate(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        tracing::debug!(screen = %active.name, "terminating screen");

        let screen = self.screens.get_mut(&active.name);
        self.hooks.terminate(&mut self.stage, |stage| {
            if let Some(screen) = screen {
                screen.exit();
            }
            stage.destroy_layer(active.root, true);
        });
    }
}
