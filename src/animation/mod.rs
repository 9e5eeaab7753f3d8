//! Animation data produced by the recorder.
//!
//! - [`AnimationCurve`]: ordered (time, value) keyframes of one scalar property
//! - [`AnimationClip`]: named set of curves addressed by (path, component, property)

pub mod clip;
pub mod curve;

pub use clip::{AnimationClip, ComponentKind, CurveBinding, ROTATION_PROPERTIES};
pub use curve::{AnimationCurve, Keyframe};
