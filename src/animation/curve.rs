use serde::{Deserialize, Serialize};

/// A single (time, value) sample of a scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// An ordered sequence of keyframes for one scalar property.
///
/// Keyframes are stored exactly as recorded. Fitting tangents or reducing
/// keys is left to whichever exporter consumes the curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationCurve {
    pub keys: Vec<Keyframe>,
}

impl AnimationCurve {
    #[must_use]
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Builds a curve from parallel time and value columns.
    #[must_use]
    pub fn from_columns(times: &[f32], values: &[f32]) -> Self {
        let keys = times
            .iter()
            .zip(values)
            .map(|(&time, &value)| Keyframe::new(time, value))
            .collect();
        Self { keys }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last keyframe, or 0 for an empty curve.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Evaluates the curve with linear interpolation between keyframes.
    ///
    /// Times outside the keyed range clamp to the first/last value.
    /// Returns `None` for an empty curve.
    #[must_use]
    pub fn evaluate(&self, time: f32) -> Option<f32> {
        let first = self.keys.first()?;
        let len = self.keys.len();

        // partition_point finds the first key with t > time, i.e. the next key
        let next_idx = self.keys.partition_point(|k| k.time <= time);
        if next_idx == 0 {
            return Some(first.value);
        }
        if next_idx >= len {
            return Some(self.keys[len - 1].value);
        }

        let k0 = self.keys[next_idx - 1];
        let k1 = self.keys[next_idx];
        let dt = k1.time - k0.time;

        // Prevent division by zero on duplicate timestamps
        let t = if dt > 1e-6 { (time - k0.time) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        Some(k0.value + (k1.value - k0.value) * t)
    }
}
