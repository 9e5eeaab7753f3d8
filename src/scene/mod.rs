//! 场景图系统模块
//!
//! The node hierarchy read by the recorder:
//! - Node: 场景节点（支持父子关系和变换）
//! - Transform: 变换组件（位置、旋转、缩放）
//! - SkinnedMesh: blend-shape channel layout of a mesh
//! - Scene: 场景容器

pub mod mesh;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod transform;

pub use mesh::SkinnedMesh;
pub use node::Node;
pub use scene::{NodeBuilder, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
}
