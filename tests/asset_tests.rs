//! Asset & Config Tests
//!
//! Tests for:
//! - JsonFileSink writing and reading back clips
//! - Sink failures surfacing as AssetPersistence
//! - RecorderConfig JSON loading and defaults

use std::path::Path;

use myth_recorder::animation::{AnimationClip, AnimationCurve, ComponentKind};
use myth_recorder::assets::{AssetSink, JsonFileSink};
use myth_recorder::errors::RecorderError;
use myth_recorder::recorder::{KeyCode, RecorderConfig, RecordingSession};
use myth_recorder::scene::Scene;

// ============================================================================
// JsonFileSink
// ============================================================================

#[test]
fn json_sink_round_trips_clip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("take.anim");

    let mut clip = AnimationClip::new("take");
    clip.set_curve("Hips", ComponentKind::Transform, "localPosition.y", AnimationCurve::from_columns(&[0.0, 0.5], &[1.0, 1.2]));

    JsonFileSink.create_asset(&clip, &path)?;

    assert!(path.exists());
    let loaded = JsonFileSink::load(&path)?;
    assert_eq!(loaded, clip);
    Ok(())
}

#[test]
fn json_sink_reports_persistence_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    // A regular file where a directory is expected
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"")?;

    let err = JsonFileSink
        .create_asset(&AnimationClip::new("x"), &blocker.join("x.anim"))
        .unwrap_err();
    assert!(matches!(err, RecorderError::AssetPersistence(_)), "got {err}");
    Ok(())
}

#[test]
fn session_writes_suffixed_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let save_path = format!("{}/", dir.path().display());

    let mut scene = Scene::new();
    let root = scene.build_node("Root").build();
    scene.build_node("Child").with_parent(root).build();

    let mut session = RecordingSession::new(RecorderConfig::new(save_path, "take"), JsonFileSink);
    session.setup(&scene, root)?;
    for _ in 0..2 {
        session.start()?;
        session.tick(&scene, 1.0 / 30.0);
        session.stop(&scene)?;
    }

    assert!(dir.path().join("take.anim").exists());
    assert!(dir.path().join("take-1.anim").exists());

    let clip = JsonFileSink::load(dir.path().join("take-1.anim"))?;
    assert_eq!(clip.name, "take");
    assert_eq!(clip.curve("Child", ComponentKind::Transform, "localScale.x").map(AnimationCurve::len), Some(1));
    Ok(())
}

// ============================================================================
// RecorderConfig
// ============================================================================

#[test]
fn config_defaults() {
    let config = RecorderConfig::default();
    assert!(config.record_blend_shape);
    assert!(!config.record_limited_frames);
    assert_eq!(config.record_frames, 1000);
    assert!(!config.change_time_scale);
    assert_eq!(config.time_scale_on_start, 0.0);
    assert_eq!(config.time_scale_on_record, 1.0);
    assert!(config.transform_whitelist.is_none());
    assert_eq!(config.controls.start_key, KeyCode::Q);
    assert_eq!(config.controls.stop_key, KeyCode::W);
}

#[test]
fn config_from_partial_json() -> anyhow::Result<()> {
    let config = RecorderConfig::from_json_str(
        r#"{
            "save_path": "clips/",
            "file_name": "walk",
            "transform_whitelist": ["Hips", "Spine"],
            "record_limited_frames": true,
            "record_frames": 120,
            "controls": { "start_key": "r" }
        }"#,
    )?;

    assert_eq!(config.save_path, "clips/");
    assert_eq!(config.file_name, "walk");
    assert_eq!(config.transform_whitelist, Some(vec!["Hips".to_owned(), "Spine".to_owned()]));
    assert!(config.record_limited_frames);
    assert_eq!(config.record_frames, 120);
    assert!(config.record_blend_shape);
    assert_eq!(config.controls.start_key, KeyCode('r'));
    assert_eq!(config.controls.stop_key, KeyCode::W);
    Ok(())
}

#[test]
fn config_load_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("recorder.json");
    let config = RecorderConfig::new("out/", "idle").with_frame_limit(30);
    std::fs::write(&path, serde_json::to_string(&config)?)?;

    assert_eq!(RecorderConfig::load(&path)?, config);
    Ok(())
}

#[test]
fn config_load_missing_file_is_io_error() {
    let err = RecorderConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, RecorderError::IoError(_)), "got {err}");
}
