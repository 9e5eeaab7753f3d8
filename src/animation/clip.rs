use glam::Quat;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::animation::curve::AnimationCurve;

/// Property names of the four rotation channels of a transform, in x/y/z/w order.
pub const ROTATION_PROPERTIES: [&str; 4] = [
    "localRotation.x",
    "localRotation.y",
    "localRotation.z",
    "localRotation.w",
];

/// The kind of component a curve animates on its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Local position / rotation / scale of a node
    Transform,
    /// Blend-shape weights of a skinned mesh
    SkinnedMesh,
}

/// A curve together with the address of the property it animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveBinding {
    /// Hierarchical path of the target node relative to the recording root
    pub path: String,
    pub component: ComponentKind,
    pub property: String,
    pub curve: AnimationCurve,
}

type BindingKey = (ComponentKind, String, String);

/// A recorded animation: a named set of curves keyed by
/// (path, component kind, property).
///
/// Bindings keep insertion order; a hash index over their addresses keeps
/// lookups and replacements constant-time as clips grow to thousands of curves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "ClipRecord")]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    bindings: Vec<CurveBinding>,
    #[serde(skip)]
    index: FxHashMap<BindingKey, usize>,
}

/// Serialized form of a clip; the lookup index is rebuilt on load.
#[derive(Deserialize)]
struct ClipRecord {
    name: String,
    duration: f32,
    bindings: Vec<CurveBinding>,
}

impl From<ClipRecord> for AnimationClip {
    fn from(record: ClipRecord) -> Self {
        let mut clip = Self {
            name: record.name,
            duration: record.duration,
            bindings: Vec::with_capacity(record.bindings.len()),
            index: FxHashMap::default(),
        };
        for binding in record.bindings {
            // Later duplicates replace earlier ones, same as `set_curve`.
            let key = (binding.component, binding.path.clone(), binding.property.clone());
            if let Some(&slot) = clip.index.get(&key) {
                clip.bindings[slot] = binding;
            } else {
                clip.index.insert(key, clip.bindings.len());
                clip.bindings.push(binding);
            }
        }
        clip
    }
}

impl PartialEq for AnimationClip {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.duration == other.duration && self.bindings == other.bindings
    }
}

fn binding_key(path: &str, component: ComponentKind, property: &str) -> BindingKey {
    (component, path.to_owned(), property.to_owned())
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 0.0,
            bindings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// All curve bindings, in insertion order.
    #[must_use]
    pub fn bindings(&self) -> &[CurveBinding] {
        &self.bindings
    }

    /// Inserts a curve for the given address, replacing any curve already bound there.
    pub fn set_curve(
        &mut self,
        path: &str,
        component: ComponentKind,
        property: &str,
        curve: AnimationCurve,
    ) {
        self.duration = self.duration.max(curve.end_time());

        let key = binding_key(path, component, property);
        if let Some(&slot) = self.index.get(&key) {
            self.bindings[slot].curve = curve;
            return;
        }

        self.index.insert(key, self.bindings.len());
        self.bindings.push(CurveBinding {
            path: path.to_owned(),
            component,
            property: property.to_owned(),
            curve,
        });
    }

    #[must_use]
    pub fn curve(&self, path: &str, component: ComponentKind, property: &str) -> Option<&AnimationCurve> {
        self.slot(path, component, property).map(|slot| &self.bindings[slot].curve)
    }

    /// Iterates over the distinct target paths that have curves of `component`.
    pub fn paths(&self, component: ComponentKind) -> impl Iterator<Item = &str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        self.bindings
            .iter()
            .filter(move |b| b.component == component)
            .map(|b| b.path.as_str())
            .filter(move |path| seen.insert(*path))
    }

    fn slot(&self, path: &str, component: ComponentKind, property: &str) -> Option<usize> {
        self.index.get(&binding_key(path, component, property)).copied()
    }

    /// Rewrites every transform rotation so that consecutive keys take the
    /// shortest arc.
    ///
    /// `q` and `-q` describe the same orientation; a recorder reading a
    /// node's rotation may flip between them from one frame to the next.
    /// Each key whose dot product with the previous (already corrected) key
    /// is negative is negated. Paths lacking any of the four rotation
    /// channels, or whose channels disagree in length, are left untouched.
    pub fn ensure_quaternion_continuity(&mut self) {
        let paths: Vec<String> = self
            .paths(ComponentKind::Transform)
            .map(str::to_owned)
            .collect();

        for path in paths {
            let Some(indices) = self.rotation_indices(&path) else {
                continue;
            };

            let len = self.bindings[indices[0]].curve.len();
            if indices.iter().any(|&i| self.bindings[i].curve.len() != len) {
                log::warn!("Rotation channels of '{path}' differ in length, skipping continuity pass");
                continue;
            }

            let mut flipped = 0usize;
            for key in 1..len {
                let prev = self.rotation_at(&indices, key - 1);
                let curr = self.rotation_at(&indices, key);
                if prev.dot(curr) < 0.0 {
                    for &i in &indices {
                        let value = &mut self.bindings[i].curve.keys[key].value;
                        *value = -*value;
                    }
                    flipped += 1;
                }
            }

            if flipped > 0 {
                log::debug!("Flipped {flipped} rotation keys on '{path}'");
            }
        }
    }

    fn rotation_indices(&self, path: &str) -> Option<[usize; 4]> {
        let mut indices = [0usize; 4];
        for (slot, property) in indices.iter_mut().zip(ROTATION_PROPERTIES) {
            *slot = self.slot(path, ComponentKind::Transform, property)?;
        }
        Some(indices)
    }

    fn rotation_at(&self, indices: &[usize; 4], key: usize) -> Quat {
        let [x, y, z, w] = indices.map(|i| self.bindings[i].curve.keys[key].value);
        Quat::from_xyzw(x, y, z, w)
    }
}
