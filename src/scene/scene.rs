use glam::{Quat, Vec3};
use slotmap::SlotMap;

use crate::scene::mesh::SkinnedMesh;
use crate::scene::node::Node;
use crate::scene::{MeshKey, NodeHandle};

/// 场景图结构
///
/// Owns the node hierarchy and the mesh pool. The recorder never owns nodes;
/// it addresses them by [`NodeHandle`] and reads them through the
/// [`NodeTree`](crate::recorder::NodeTree) implementation of this type.
#[derive(Debug, Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub meshes: SlotMap<MeshKey, SkinnedMesh>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
        }
    }

    /// 开始构建一个节点
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// 添加一个节点到场景 (默认放在根节点)
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeHandle) -> NodeHandle {
        child.parent = Some(parent);
        let handle = self.nodes.insert(child);

        // 建立父子关系
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        } else {
            log::error!("Parent node not found, '{}' added as root", self.nodes[handle].name);
            self.nodes[handle].parent = None;
            self.root_nodes.push(handle);
        }

        handle
    }

    /// 移除节点 (递归移除所有子节点)
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        let children = node.children.clone();
        let parent = node.parent;

        for child in children {
            self.remove_node(child);
        }

        if let Some(parent) = parent {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|&c| c != handle);
            }
        } else {
            self.root_nodes.retain(|&r| r != handle);
        }

        self.nodes.remove(handle);
    }

    /// 建立父子关系 (Attach)
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::error!("Node not found during attach!");
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("Cannot attach node under its own descendant!");
            return;
        }

        // 1. Detach from old
        match self.nodes[child].parent {
            Some(old) => {
                if let Some(p) = self.nodes.get_mut(old) {
                    p.children.retain(|&c| c != child);
                }
            }
            None => self.root_nodes.retain(|&r| r != child),
        }

        // 2. Attach to new
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    /// Returns true if `ancestor` lies on the parent chain of `node` (or is `node`).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(Node::parent);
        }
        false
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    /// Depth-first search of the subtree under `root` for a node named `name`.
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(root)?;
        if node.name == name {
            return Some(root);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_node_by_name(child, name))
    }

    /// Collects `root` and all of its descendants in pre-order.
    #[must_use]
    pub fn collect_subtree(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        if !self.nodes.contains_key(root) {
            return out;
        }

        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            out.push(handle);
            if let Some(node) = self.nodes.get(handle) {
                // Push in reverse so the first child is visited first
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn add_mesh(&mut self, mesh: SkinnedMesh) -> MeshKey {
        self.meshes.insert(mesh)
    }

    /// Attaches a mesh to a node and sizes its weight array to the mesh's channel count.
    pub fn set_mesh(&mut self, handle: NodeHandle, mesh: MeshKey) {
        let channels = self.meshes.get(mesh).map_or(0, SkinnedMesh::blend_shape_count);
        if let Some(node) = self.nodes.get_mut(handle) {
            node.mesh = Some(mesh);
            node.morph_weights.resize(channels, 0.0);
        }
    }
}

/// Fluent node construction.
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    // === 链式配置方法 ===

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.node.transform.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: MeshKey) -> Self {
        self.node.mesh = Some(mesh);
        self
    }

    // === 终结方法 ===

    /// 完成构建，将 Node 插入 Scene，返回 Handle
    pub fn build(self) -> NodeHandle {
        let mesh = self.node.mesh;
        let handle = match self.parent {
            Some(parent) => self.scene.add_to_parent(self.node, parent),
            None => self.scene.add_node(self.node),
        };
        if let Some(mesh) = mesh {
            self.scene.set_mesh(handle, mesh);
        }
        handle
    }
}
