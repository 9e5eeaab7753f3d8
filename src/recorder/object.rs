use crate::animation::ROTATION_PROPERTIES;
use crate::errors::{RecorderError, Result};
use crate::recorder::curve::CurveContainer;
use crate::recorder::source::NodeTree;
use crate::scene::NodeHandle;

/// Number of transform channels recorded per node.
pub const TRANSFORM_CHANNELS: usize = 10;

/// Property names of the transform channels, in the order of
/// [`Transform::to_channels`](crate::scene::Transform::to_channels).
pub const TRANSFORM_PROPERTIES: [&str; TRANSFORM_CHANNELS] = [
    "localPosition.x",
    "localPosition.y",
    "localPosition.z",
    ROTATION_PROPERTIES[0],
    ROTATION_PROPERTIES[1],
    ROTATION_PROPERTIES[2],
    ROTATION_PROPERTIES[3],
    "localScale.x",
    "localScale.y",
    "localScale.z",
];

/// Records the local transform of one node.
#[derive(Debug, Clone)]
pub struct ObjectRecorder {
    path: String,
    node: NodeHandle,
    curves: [CurveContainer; TRANSFORM_CHANNELS],
}

impl ObjectRecorder {
    #[must_use]
    pub fn new(path: String, node: NodeHandle) -> Self {
        Self {
            path,
            node,
            curves: TRANSFORM_PROPERTIES.map(CurveContainer::new),
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    #[inline]
    #[must_use]
    pub fn curves(&self) -> &[CurveContainer] {
        &self.curves
    }

    /// Appends the node's current local transform at `time` to every channel.
    ///
    /// If the node no longer exists nothing is appended.
    pub fn add_frame<T: NodeTree + ?Sized>(&mut self, tree: &T, time: f32) -> Result<()> {
        let transform = tree
            .local_transform(self.node)
            .ok_or_else(|| RecorderError::NodeNotFound(self.path.clone()))?;

        for (curve, value) in self.curves.iter_mut().zip(transform.to_channels()) {
            curve.add_sample(time, value);
        }
        Ok(())
    }
}
