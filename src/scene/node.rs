use crate::scene::transform::Transform;
use crate::scene::{MeshKey, NodeHandle};

/// A scene node: a named point in the transform hierarchy.
///
/// # Hierarchy
///
/// Nodes form a tree structure through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: List of child node handles
///
/// # Blend shapes
///
/// A node may reference a [`SkinnedMesh`](crate::scene::SkinnedMesh) in the
/// scene's mesh pool. The current weight of each of the mesh's blend-shape
/// channels lives on the node in `morph_weights`, indexed by channel.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,

    pub mesh: Option<MeshKey>,
    pub morph_weights: Vec<f32>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
            morph_weights: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Current weight of blend-shape channel `index`; channels without an
    /// explicit weight read as zero.
    #[inline]
    #[must_use]
    pub fn morph_weight(&self, index: usize) -> f32 {
        self.morph_weights.get(index).copied().unwrap_or(0.0)
    }

    pub fn set_morph_weight(&mut self, index: usize, weight: f32) {
        if self.morph_weights.len() <= index {
            self.morph_weights.resize(index + 1, 0.0);
        }
        self.morph_weights[index] = weight;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
