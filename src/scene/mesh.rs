/// A deformable mesh carrying named blend-shape channels.
///
/// Only the channel layout is kept here; per-frame weights are stored on the
/// node that instantiates the mesh.
#[derive(Debug, Clone, Default)]
pub struct SkinnedMesh {
    pub name: String,
    pub blend_shape_names: Vec<String>,
}

impl SkinnedMesh {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            blend_shape_names: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_blend_shapes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blend_shape_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn blend_shape_count(&self) -> usize {
        self.blend_shape_names.len()
    }
}
