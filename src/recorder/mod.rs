//! Recording engine
//!
//! - [`CurveContainer`]: per-property sample buffer
//! - [`ObjectRecorder`]: ten transform channels of one node
//! - [`BlendShapeRecorder`]: weight channels of one skinned mesh
//! - [`RecordingSession`]: state machine driving the recorders and exporting clips
//! - [`resolve_path`]: hierarchical addressing of recorded nodes

pub mod blend_shape;
pub mod config;
pub mod controls;
pub mod curve;
pub mod object;
pub mod path;
pub mod session;
pub mod source;

pub use blend_shape::{BLEND_SHAPE_PREFIX, BlendShapeRecorder};
pub use config::RecorderConfig;
pub use controls::{KeyCode, RecorderCommand, RecorderControls};
pub use curve::CurveContainer;
pub use object::{ObjectRecorder, TRANSFORM_CHANNELS, TRANSFORM_PROPERTIES};
pub use path::{PATH_SEPARATOR, resolve_path};
pub use session::{ClipExport, RecorderEvent, RecordingSession, SessionState};
pub use source::{BlendShapeDescriptor, NodeTree};
