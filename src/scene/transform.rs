use glam::{Quat, Vec3};

/// Transform 组件
///
/// 节点的局部位置、旋转、缩放（TRS）。录制器只读取它，从不写回。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Flattens the transform into the ten recorded channel values:
    /// position xyz, rotation xyzw, scale xyz.
    #[must_use]
    pub fn to_channels(&self) -> [f32; 10] {
        let p = self.position;
        let r = self.rotation;
        let s = self.scale;
        [p.x, p.y, p.z, r.x, r.y, r.z, r.w, s.x, s.y, s.z]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
