use crate::errors::{RecorderError, Result};
use crate::recorder::curve::CurveContainer;
use crate::recorder::source::{BlendShapeDescriptor, NodeTree};
use crate::scene::NodeHandle;

/// Prefix of blend-shape weight property names.
pub const BLEND_SHAPE_PREFIX: &str = "blendShape.";

/// Records the blend-shape weights of one skinned mesh.
///
/// The channel set is fixed by the descriptor given at construction;
/// channels added to the mesh afterwards are not picked up.
#[derive(Debug, Clone)]
pub struct BlendShapeRecorder {
    path: String,
    node: NodeHandle,
    curves: Vec<CurveContainer>,
}

impl BlendShapeRecorder {
    #[must_use]
    pub fn new(path: String, node: NodeHandle, descriptor: &BlendShapeDescriptor) -> Self {
        let curves = descriptor
            .channel_names
            .iter()
            .map(|name| CurveContainer::new(format!("{BLEND_SHAPE_PREFIX}{name}")))
            .collect();

        Self { path, node, curves }
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

    #[inline]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.curves.len()
    }

    /// Appends the current weight of every channel at `time`.
    pub fn add_frame<T: NodeTree + ?Sized>(&mut self, tree: &T, time: f32) -> Result<()> {
        // Read everything first so a vanished node leaves all channels untouched
        let weights = (0..self.curves.len())
            .map(|channel| tree.blend_weight(self.node, channel))
            .collect::<Option<Vec<f32>>>()
            .ok_or_else(|| RecorderError::NodeNotFound(self.path.clone()))?;

        for (curve, weight) in self.curves.iter_mut().zip(weights) {
            curve.add_sample(time, weight);
        }
        Ok(())
    }
}
