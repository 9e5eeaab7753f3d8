use crate::animation::AnimationCurve;

/// Accumulates the recorded samples of a single scalar property.
///
/// Samples are kept as two parallel columns and appended unconditionally,
/// including repeated timestamps. Appending a time earlier than the last
/// one is a caller bug and is caught in debug builds.
#[derive(Debug, Clone)]
pub struct CurveContainer {
    property: String,
    times: Vec<f32>,
    values: Vec<f32>,
}

impl CurveContainer {
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn add_sample(&mut self, time: f32, value: f32) {
        debug_assert!(
            self.times.last().is_none_or(|&last| time >= last),
            "sample time {time} precedes last sample of '{}'",
            self.property
        );
        self.times.push(time);
        self.values.push(value);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Snapshot of the recorded samples as a keyframe curve.
    #[must_use]
    pub fn to_curve(&self) -> AnimationCurve {
        AnimationCurve::from_columns(&self.times, &self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_duplicate_timestamps() {
        let mut container = CurveContainer::new("localPosition.x");
        container.add_sample(0.0, 1.0);
        container.add_sample(0.0, 2.0);
        container.add_sample(0.5, 3.0);

        assert_eq!(container.len(), 3);
        let curve = container.to_curve();
        assert_eq!(curve.keys[1].time, 0.0);
        assert_eq!(curve.keys[1].value, 2.0);
    }

    #[test]
    fn empty_container_yields_empty_curve() {
        let container = CurveContainer::new("localScale.z");
        assert!(container.is_empty());
        assert!(container.to_curve().is_empty());
        assert_eq!(container.property(), "localScale.z");
    }
}
