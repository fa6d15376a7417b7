//! A display tree stored in a `hecs` world.

use crate::config::StageConfig;
use crate::layer::{LayerDesc, LayerHost};
use glam::UVec2;
use hecs::{Entity, World};

/// Component describing one container in the display tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerNode {
    pub name: String,
    pub size: UVec2,
    pub interactive: bool,
}

/// Component linking a container to its parent and ordered children.
///
/// Children are drawn in order, so the last child is the topmost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub parent: Option<Entity>,
    pub children: Vec<Entity>,
}

/// Reference [`LayerHost`] keeping every container as an entity.
///
/// # Example
///
/// ```
/// use interlayer::{LayerDesc, LayerHost, StageConfig};
/// use interlayer::stage::Stage;
///
/// let mut stage = Stage::new(StageConfig::new().size(640, 480));
/// let root = stage.spawn_root("Scene_Title");
/// let child = stage.create_layer(&LayerDesc::new("Overlay", stage.output_size()));
/// stage.add_child(root, child);
///
/// stage.destroy_layer(root, true);
/// assert!(!stage.contains(child));
/// ```
pub struct Stage {
    world: World,
    size: UVec2,
    destroyed: usize,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

impl Stage {
    /// Create an empty stage with the configured output size.
    pub fn new(config: StageConfig) -> Self {
        Self {
            world: World::new(),
            size: config.size,
            destroyed: 0,
        }
    }

    /// The underlying world, for queries over [`LayerNode`] and [`Hierarchy`].
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Change the output size reported to hooks. Existing containers keep their size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
    }

    /// Create a parentless, interactive container covering the output.
    pub fn spawn_root(&mut self, name: impl Into<String>) -> Entity {
        self.world.spawn((
            LayerNode {
                name: name.into(),
                size: self.size,
                interactive: true,
            },
            Hierarchy::default(),
        ))
    }

    /// Create an interactive container and attach it on top of `parent`.
    pub fn spawn_child(&mut self, parent: Entity, name: impl Into<String>) -> Entity {
        let mut desc = LayerDesc::new(name, self.size);
        desc.interactive = true;
        let child = self.create_layer(&desc);
        self.add_child(parent, child);
        child
    }

    /// Whether `layer` is still alive.
    pub fn contains(&self, layer: Entity) -> bool {
        self.world.contains(layer)
    }

    /// A copy of the node component of `layer`.
    pub fn node(&self, layer: Entity) -> Option<LayerNode> {
        self.world.get::<&LayerNode>(layer).ok().map(|node| (*node).clone())
    }

    /// The container `layer` is attached to, if any.
    pub fn parent(&self, layer: Entity) -> Option<Entity> {
        self.world
            .get::<&Hierarchy>(layer)
            .ok()
            .and_then(|hierarchy| hierarchy.parent)
    }

    /// Children of `layer`, bottom to top.
    pub fn children(&self, layer: Entity) -> Vec<Entity> {
        self.world
            .get::<&Hierarchy>(layer)
            .map(|hierarchy| hierarchy.children.clone())
            .unwrap_or_default()
    }

    /// Names of the children of `layer`, bottom to top.
    pub fn child_names(&self, layer: Entity) -> Vec<String> {
        self.children(layer)
            .into_iter()
            .filter_map(|child| self.node(child).map(|node| node.name))
            .collect()
    }

    /// First live container with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<Entity> {
        self.world
            .query::<&LayerNode>()
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(entity, _)| entity)
    }

    /// Whether `ancestor` is `layer` or sits above it in the tree.
    pub fn is_ancestor(&self, ancestor: Entity, layer: Entity) -> bool {
        let mut current = Some(layer);
        while let Some(entity) = current {
            if entity == ancestor {
                return true;
            }
            current = self.parent(entity);
        }
        false
    }

    /// Number of live containers.
    pub fn layer_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Number of containers destroyed since creation.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    fn detach(&mut self, child: Entity) {
        let parent = match self.world.get::<&mut Hierarchy>(child) {
            Ok(mut hierarchy) => hierarchy.parent.take(),
            Err(_) => None,
        };
        if let Some(parent) = parent {
            if let Ok(mut hierarchy) = self.world.get::<&mut Hierarchy>(parent) {
                hierarchy.children.retain(|&c| c != child);
            }
        }
    }
}

impl LayerHost for Stage {
    type Layer = Entity;

    fn output_size(&self) -> UVec2 {
        self.size
    }

    fn create_layer(&mut self, desc: &LayerDesc) -> Entity {
        self.world.spawn((
            LayerNode {
                name: desc.name.clone(),
                size: desc.size,
                interactive: desc.interactive,
            },
            Hierarchy::default(),
        ))
    }

    /// Re-parenting moves the child; it is never in two child lists. A child
    /// cannot be attached below itself.
    fn add_child(&mut self, parent: Entity, child: Entity) {
        if !self.contains(parent) || !self.contains(child) || self.is_ancestor(child, parent) {
            tracing::warn!(?parent, ?child, "cannot attach layer");
            return;
        }

        self.detach(child);
        if let Ok(mut hierarchy) = self.world.get::<&mut Hierarchy>(child) {
            hierarchy.parent = Some(parent);
        }
        if let Ok(mut hierarchy) = self.world.get::<&mut Hierarchy>(parent) {
            hierarchy.children.push(child);
        }
    }

    /// Destroying a container that no longer exists does nothing. Without
    /// `children`, the children are detached and survive as roots.
    fn destroy_layer(&mut self, layer: Entity, children: bool) {
        if !self.contains(layer) {
            tracing::trace!(?layer, "layer already destroyed");
            return;
        }
        self.detach(layer);

        let mut pending = vec![layer];
        while let Some(entity) = pending.pop() {
            let kids = self.children(entity);
            if children {
                pending.extend(kids);
            } else {
                for kid in kids {
                    if let Ok(mut hierarchy) = self.world.get::<&mut Hierarchy>(kid) {
                        hierarchy.parent = None;
                    }
                }
            }
            if self.world.despawn(entity).is_ok() {
                self.destroyed += 1;
            }
        }
    }
}
