//! Read access to the recorded hierarchy.
//!
//! Recorders never hold node references. They keep a [`NodeHandle`] and read
//! through a [`NodeTree`] passed into every call, so the host stays the sole
//! owner of its nodes.

use crate::scene::{NodeHandle, Scene, SkinnedMesh, Transform};

/// Blend-shape channel layout of a node's mesh, captured once at setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlendShapeDescriptor {
    pub channel_names: Vec<String>,
}

impl BlendShapeDescriptor {
    #[inline]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channel_names.len()
    }
}

/// Node tree provider consumed by the recorder.
pub trait NodeTree {
    /// `root` followed by all of its descendants in pre-order.
    fn subtree(&self, root: NodeHandle) -> Vec<NodeHandle>;

    fn node_name(&self, node: NodeHandle) -> Option<&str>;

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle>;

    fn local_transform(&self, node: NodeHandle) -> Option<Transform>;

    /// Returns the blend-shape layout if the node carries a deformable mesh.
    fn blend_shapes(&self, node: NodeHandle) -> Option<BlendShapeDescriptor>;

    /// Current weight of one blend-shape channel.
    fn blend_weight(&self, node: NodeHandle, channel: usize) -> Option<f32>;
}

impl NodeTree for Scene {
    fn subtree(&self, root: NodeHandle) -> Vec<NodeHandle> {
        self.collect_subtree(root)
    }

    fn node_name(&self, node: NodeHandle) -> Option<&str> {
        self.get_name(node)
    }

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.get_node(node)?.parent()
    }

    fn local_transform(&self, node: NodeHandle) -> Option<Transform> {
        self.get_node(node).map(|n| n.transform)
    }

    fn blend_shapes(&self, node: NodeHandle) -> Option<BlendShapeDescriptor> {
        let mesh_key = self.get_node(node)?.mesh?;
        let mesh: &SkinnedMesh = self.meshes.get(mesh_key)?;
        Some(BlendShapeDescriptor {
            channel_names: mesh.blend_shape_names.clone(),
        })
    }

    fn blend_weight(&self, node: NodeHandle, channel: usize) -> Option<f32> {
        self.get_node(node).map(|n| n.morph_weight(channel))
    }
}
