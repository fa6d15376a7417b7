//! Configuration for layer hooks and the reference stage.

use glam::UVec2;

/// Options applied to every injected layer.
///
/// # Example
///
/// ```
/// use interlayer::InterceptConfig;
///
/// let config = InterceptConfig::new().name_prefix("Overlay").destroy_children(false);
/// assert_eq!(config.name_prefix, "Overlay");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterceptConfig {
    /// Prefix of every layer name; the slot name follows after an underscore.
    pub name_prefix: String,
    /// Whether teardown also destroys whatever subscribers attached to a layer.
    pub destroy_children: bool,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            name_prefix: "InterceptLayer".to_string(),
            destroy_children: true,
        }
    }
}

impl InterceptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for injected layer names, followed by `_` and the slot name.
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Whether teardown also destroys whatever was attached to injected layers.
    pub fn destroy_children(mut self, destroy: bool) -> Self {
        self.destroy_children = destroy;
        self
    }
}

/// Configuration of the reference [`Stage`](crate::stage::Stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageConfig {
    /// Output size reported to hooks.
    pub size: UVec2,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            size: UVec2::new(816, 624),
        }
    }
}

impl StageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = UVec2::new(width, height);
        self
    }
}
