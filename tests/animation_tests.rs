//! Animation Data Tests
//!
//! Tests for:
//! - AnimationCurve linear evaluation and clamping
//! - AnimationClip curve addressing and duration
//! - Clip lookup at scale and after deserialization
//! - Quaternion continuity post-processing

use glam::Quat;

use myth_recorder::animation::{AnimationClip, AnimationCurve, ComponentKind, Keyframe, ROTATION_PROPERTIES};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn set_rotation_keys(clip: &mut AnimationClip, path: &str, keys: &[Quat]) {
    let times: Vec<f32> = (0..keys.len()).map(|i| i as f32 * 0.1).collect();
    let columns: [Vec<f32>; 4] = [
        keys.iter().map(|q| q.x).collect(),
        keys.iter().map(|q| q.y).collect(),
        keys.iter().map(|q| q.z).collect(),
        keys.iter().map(|q| q.w).collect(),
    ];
    for (property, values) in ROTATION_PROPERTIES.iter().zip(&columns) {
        clip.set_curve(
            path,
            ComponentKind::Transform,
            property,
            AnimationCurve::from_columns(&times, values),
        );
    }
}

fn rotation_key(clip: &AnimationClip, path: &str, key: usize) -> Quat {
    let [x, y, z, w] = ROTATION_PROPERTIES
        .map(|p| clip.curve(path, ComponentKind::Transform, p).unwrap().keys[key].value);
    Quat::from_xyzw(x, y, z, w)
}

// ============================================================================
// AnimationCurve
// ============================================================================

#[test]
fn curve_linear_midpoint() {
    let curve = AnimationCurve::from_columns(&[0.0, 1.0], &[0.0, 10.0]);
    assert!(approx(curve.evaluate(0.5).unwrap(), 5.0));
}

#[test]
fn curve_exact_keyframes() {
    let curve = AnimationCurve::from_columns(&[0.0, 1.0, 2.0], &[0.0, 10.0, 20.0]);
    assert!(approx(curve.evaluate(0.0).unwrap(), 0.0));
    assert!(approx(curve.evaluate(1.0).unwrap(), 10.0));
    assert!(approx(curve.evaluate(2.0).unwrap(), 20.0));
}

#[test]
fn curve_clamps_outside_range() {
    let curve = AnimationCurve::new(vec![Keyframe::new(1.0, 10.0), Keyframe::new(2.0, 20.0)]);
    assert!(approx(curve.evaluate(0.5).unwrap(), 10.0));
    assert!(approx(curve.evaluate(5.0).unwrap(), 20.0));
}

#[test]
fn curve_single_key_is_constant() {
    let curve = AnimationCurve::new(vec![Keyframe::new(0.3, 7.0)]);
    assert!(approx(curve.evaluate(0.0).unwrap(), 7.0));
    assert!(approx(curve.evaluate(9.0).unwrap(), 7.0));
    assert!(approx(curve.end_time(), 0.3));
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_tracks_latest_key() {
    let mut clip = AnimationClip::new("walk");
    clip.set_curve("Hips", ComponentKind::Transform, "localPosition.x", AnimationCurve::from_columns(&[0.0, 1.5], &[0.0, 1.0]));
    clip.set_curve("Face", ComponentKind::SkinnedMesh, "blendShape.Smile", AnimationCurve::from_columns(&[0.0, 2.5], &[0.0, 100.0]));

    assert!(approx(clip.duration, 2.5));
    assert_eq!(clip.bindings().len(), 2);
}

#[test]
fn clip_set_curve_replaces_same_address() {
    let mut clip = AnimationClip::new("walk");
    clip.set_curve("Hips", ComponentKind::Transform, "localPosition.x", AnimationCurve::default());
    clip.set_curve("Hips", ComponentKind::Transform, "localPosition.x", AnimationCurve::from_columns(&[0.0], &[3.0]));

    assert_eq!(clip.bindings().len(), 1);
    assert_eq!(clip.curve("Hips", ComponentKind::Transform, "localPosition.x").unwrap().len(), 1);
}

#[test]
fn clip_component_is_part_of_the_address() {
    let mut clip = AnimationClip::new("walk");
    clip.set_curve("Head", ComponentKind::Transform, "blendShape.Smile", AnimationCurve::default());

    assert!(clip.curve("Head", ComponentKind::SkinnedMesh, "blendShape.Smile").is_none());
    assert!(clip.curve("Head", ComponentKind::Transform, "blendShape.Smile").is_some());
}

#[test]
fn clip_with_thousands_of_paths_resolves_every_curve() {
    let mut clip = AnimationClip::new("crowd");
    for i in 0..2000 {
        let path = format!("Crowd/Member{i}");
        for property in ROTATION_PROPERTIES {
            clip.set_curve(&path, ComponentKind::Transform, property, AnimationCurve::from_columns(&[0.0], &[0.5]));
        }
    }
    // Overwrite one address late in the clip
    clip.set_curve("Crowd/Member1999", ComponentKind::Transform, "localRotation.w", AnimationCurve::from_columns(&[0.0, 1.0], &[1.0, 1.0]));

    assert_eq!(clip.bindings().len(), 2000 * 4);
    assert_eq!(clip.paths(ComponentKind::Transform).count(), 2000);
    assert_eq!(clip.curve("Crowd/Member1999", ComponentKind::Transform, "localRotation.w").unwrap().len(), 2);
    assert_eq!(clip.curve("Crowd/Member0", ComponentKind::Transform, "localRotation.x").unwrap().len(), 1);
    assert!(clip.curve("Crowd/Member2000", ComponentKind::Transform, "localRotation.x").is_none());

    clip.ensure_quaternion_continuity();
    assert!(approx(clip.duration, 1.0));
}

#[test]
fn deserialized_clip_supports_lookup_and_replacement() {
    let mut clip = AnimationClip::new("walk");
    clip.set_curve("Hips", ComponentKind::Transform, "localPosition.x", AnimationCurve::from_columns(&[0.0, 1.0], &[0.0, 2.0]));
    clip.set_curve("Face", ComponentKind::SkinnedMesh, "blendShape.Smile", AnimationCurve::default());

    let json = serde_json::to_string(&clip).unwrap();
    let mut loaded: AnimationClip = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, clip);

    assert_eq!(loaded.curve("Hips", ComponentKind::Transform, "localPosition.x").unwrap().len(), 2);
    assert!(loaded.curve("Face", ComponentKind::SkinnedMesh, "blendShape.Smile").is_some());

    loaded.set_curve("Hips", ComponentKind::Transform, "localPosition.x", AnimationCurve::from_columns(&[0.0], &[5.0]));
    assert_eq!(loaded.bindings().len(), 2);
    assert!(approx(loaded.curve("Hips", ComponentKind::Transform, "localPosition.x").unwrap().keys[0].value, 5.0));
}

// ============================================================================
// Quaternion continuity
// ============================================================================

#[test]
fn continuity_flips_antipodal_key() {
    let q = Quat::from_rotation_x(0.8);
    let mut clip = AnimationClip::new("spin");
    set_rotation_keys(&mut clip, "Arm", &[q, -q]);

    clip.ensure_quaternion_continuity();

    let q0 = rotation_key(&clip, "Arm", 0);
    let q1 = rotation_key(&clip, "Arm", 1);
    assert!(q0.dot(q1) > 0.0);
    assert!(approx(q1.x, q.x));
    assert!(approx(q1.w, q.w));
}

#[test]
fn continuity_compares_against_corrected_key() {
    let q = Quat::from_rotation_z(0.4);
    let mut clip = AnimationClip::new("spin");
    set_rotation_keys(&mut clip, "Arm", &[q, -q, q, -q]);

    clip.ensure_quaternion_continuity();

    for key in 0..4 {
        let k = rotation_key(&clip, "Arm", key);
        assert!(approx(k.z, q.z), "key {key} flipped: {k:?}");
        assert!(approx(k.w, q.w), "key {key} flipped: {k:?}");
    }
}

#[test]
fn continuity_keeps_smooth_rotation_untouched() {
    let keys: Vec<Quat> = (0..8).map(|i| Quat::from_rotation_y(i as f32 * 0.5)).collect();
    let mut clip = AnimationClip::new("spin");
    set_rotation_keys(&mut clip, "Arm", &keys);
    let before = clip.clone();

    clip.ensure_quaternion_continuity();

    assert_eq!(clip, before);
}

#[test]
fn continuity_ignores_paths_without_all_channels() {
    let mut clip = AnimationClip::new("partial");
    clip.set_curve("Arm", ComponentKind::Transform, "localRotation.w", AnimationCurve::from_columns(&[0.0, 0.1], &[1.0, -1.0]));
    let before = clip.clone();

    clip.ensure_quaternion_continuity();

    assert_eq!(clip, before);
}
