//! Screen type definitions for the reference director.

use super::stage::Stage;
use crate::hooks::ScreenId;
use crate::intercept::InterceptLayer;
use crate::slot::Category;
use hecs::Entity;

/// Builds one category's content under the screen root.
pub type StepFn = Box<dyn FnMut(&mut Stage, Entity)>;

/// Callback run when a screen becomes active, before any construction step.
///
/// This is where extensions subscribe: channels are cleared every time a screen
/// terminates.
pub type EnterFn = Box<dyn FnMut(&InterceptLayer<Entity>)>;

/// A screen type: its base, construction steps and lifecycle hooks.
///
/// Screens are created via [`Director::screen`](super::Director::screen) and
/// built fresh every time they become active.
pub struct ScreenDef {
    /// Unique identifier for this screen.
    pub id: ScreenId,

    /// Screen this one derives from; hooks registered for the base apply here too.
    pub base: Option<ScreenId>,

    /// Construction steps in the order the host runs them.
    pub(crate) steps: Vec<(Category, StepFn)>,

    /// Optional callback when entering this screen.
    pub(crate) on_enter: Option<EnterFn>,

    /// Optional callback when this screen terminates.
    pub(crate) on_exit: Option<Box<dyn FnMut()>>,
}

impl ScreenDef {
    pub(crate) fn new(id: ScreenId, steps: Vec<(Category, StepFn)>) -> Self {
        Self {
            id,
            base: None,
            steps,
            on_enter: None,
            on_exit: None,
        }
    }

    /// Categories this screen constructs, in order.
    pub fn categories(&self) -> Vec<Category> {
        self.steps.iter().map(|(category, _)| *category).collect()
    }

    pub(crate) fn enter(&mut self, layers: &InterceptLayer<Entity>) {
        if let Some(ref mut callback) = self.on_enter {
            callback(layers);
        }
    }

    pub(crate) fn exit(&mut self) {
        if let Some(ref mut callback) = self.on_exit {
            callback();
        }
    }
}

/// Collects a screen's construction steps.
///
/// # Example
///
/// ```ignore
/// director.screen("Title", |screen| {
///     screen.background(|stage, root| {
///         stage.spawn_child(root, "TitleBackground");
///     });
///     screen.window_layer(|stage, root| {
///         stage.spawn_child(root, "WindowLayer");
///     });
/// });
/// ```
#[derive(Default)]
pub struct ScreenSetup {
    pub(crate) steps: Vec<(Category, StepFn)>,
}

impl ScreenSetup {
    /// Add a construction step for `category`.
    pub fn step<F>(&mut self, category: Category, build: F) -> &mut Self
    where
        F: FnMut(&mut Stage, Entity) + 'static,
    {
        self.steps.push((category, Box::new(build)));
        self
    }

    pub fn background<F>(&mut self, build: F) -> &mut Self
    where
        F: FnMut(&mut Stage, Entity) + 'static,
    {
        self.step(Category::Background, build)
    }

    pub fn foreground<F>(&mut self, build: F) -> &mut Self
    where
        F: FnMut(&mut Stage, Entity) + 'static,
    {
        self.step(Category::Foreground, build)
    }

    pub fn spriteset<F>(&mut self, build: F) -> &mut Self
    where
        F: FnMut(&mut Stage, Entity) + 'static,
    {
        self.step(Category::Spriteset, build)
    }

    pub fn window_layer<F>(&mut self, build: F) -> &mut Self
    where
        F: FnMut(&mut Stage, Entity) + 'static,
    {
        self.step(Category::WindowLayer, build)
    }
}

/// Builder for configuring a screen's base and lifecycle hooks.
///
/// Returned by [`Director::screen`](super::Director::screen).
///
/// # Example
///
/// ```ignore
/// director
///     .screen("Item", |screen| { /* steps */ })
///     .base("MenuBase")
///     .on_enter(|layers| {
///         layers.on_create_background(|| Ok(()));
///     })
///     .on_exit(|| tracing::info!("leaving item menu"));
/// ```
pub struct ScreenBuilder<'a> {
    pub(crate) screen_id: ScreenId,
    pub(crate) director: &'a mut super::Director,
}

impl<'a> ScreenBuilder<'a> {
    /// Derive this screen from `base`.
    pub fn base(self, base: impl Into<ScreenId>) -> Self {
        if let Some(screen) = self.director.screens.get_mut(self.screen_id.as_str()) {
            screen.base = Some(base.into());
        }
        self
    }

    /// Set a callback to run when entering this screen.
    ///
    /// Called after the previous screen has terminated, before the first
    /// construction step.
    pub fn on_enter<F: FnMut(&InterceptLayer<Entity>) + 'static>(self, callback: F) -> Self {
        if let Some(screen) = self.director.screens.get_mut(self.screen_id.as_str()) {
            screen.on_enter = Some(Box::new(callback));
        }
        self
    }

    /// Set a callback to run when this screen terminates.
    ///
    /// Called after the injected layers are released, before the screen's own
    /// containers are destroyed.
    pub fn on_exit<F: FnMut() + 'static>(self, callback: F) -> Self {
        if let Some(screen) = self.director.screens.get_mut(self.screen_id.as_str()) {
            screen.on_exit = Some(Box::new(callback));
        }
        self
    }
}
