//! The host seam: how injected layers are created, parented and destroyed.

use glam::UVec2;
use std::fmt::Debug;

/// Description of a layer container to be created by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerDesc {
    /// Identifier shown in the host's scene tree, e.g. `InterceptLayer_AfterBackground`.
    pub name: String,
    /// Size in output pixels.
    pub size: UVec2,
    /// Whether the container takes pointer and input events. Injected layers
    /// are always created with `false` so input reaches the layers around them.
    pub interactive: bool,
}

impl LayerDesc {
    /// A non-interactive container of the given name and size.
    pub fn new(name: impl Into<String>, size: UVec2) -> Self {
        Self {
            name: name.into(),
            size,
            interactive: false,
        }
    }
}

/// The host rendering framework's container primitive.
///
/// Implement this for whatever owns the host's display tree. The hooks only
/// ever create, attach and destroy containers through it; what a container
/// draws is up to the host and to subscribers.
///
/// # Implementing a Host
///
/// ```ignore
/// impl LayerHost for MyRenderer {
///     type Layer = NodeKey;
///
///     fn output_size(&self) -> UVec2 {
///         self.surface_size
///     }
///
///     fn create_layer(&mut self, desc: &LayerDesc) -> NodeKey {
///         self.nodes.insert(Node::container(&desc.name, desc.size, desc.interactive))
///     }
///
///     fn add_child(&mut self, parent: NodeKey, child: NodeKey) {
///         self.nodes.attach(parent, child);
///     }
///
///     fn destroy_layer(&mut self, layer: NodeKey, children: bool) {
///         self.nodes.remove(layer, children);
///     }
/// }
/// ```
pub trait LayerHost {
    /// Handle to a container owned by the host.
    type Layer: Copy + Eq + Debug;

    /// Current output dimensions in pixels.
    fn output_size(&self) -> UVec2;

    /// Create a detached container.
    fn create_layer(&mut self, desc: &LayerDesc) -> Self::Layer;

    /// Attach `child` as the topmost child of `parent`.
    fn add_child(&mut self, parent: Self::Layer, child: Self::Layer);

    /// Detach and release a container, and its children too when `children` is set.
    fn destroy_layer(&mut self, layer: Self::Layer, children: bool);
}
