//! # Myth Recorder
//!
//! Records the motion of a node hierarchy, and optionally the blend-shape
//! weights of its skinned meshes, into keyframe animation clips.
//!
//! ```rust,ignore
//! use myth_recorder::{JsonFileSink, RecorderConfig, RecordingSession, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.build_node("Rig").build();
//!
//! let mut session = RecordingSession::new(RecorderConfig::new("clips/", "take"), JsonFileSink);
//! session.setup(&scene, root)?;
//! session.start()?;
//! // once per rendered frame
//! session.tick(&scene, 1.0 / 60.0);
//! let export = session.stop(&scene)?; // writes clips/take.anim
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod assets;
pub mod errors;
pub mod recorder;
pub mod scene;

pub use animation::{AnimationClip, AnimationCurve, ComponentKind, CurveBinding, Keyframe};
pub use assets::{AssetSink, JsonFileSink, MemorySink};
pub use errors::{RecorderError, Result};
pub use recorder::{
    ClipExport, NodeTree, RecorderCommand, RecorderConfig, RecorderEvent, RecordingSession, SessionState,
};
pub use scene::{Node, NodeHandle, Scene, SkinnedMesh, Transform};
