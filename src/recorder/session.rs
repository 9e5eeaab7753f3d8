//! Recording session: drives the recorders and exports clips.
//!
//! # Lifecycle
//!
//! ```text
//!  setup ──► Idle ──start──► Recording ──stop──► (export, setup) ──► Idle
//!                                │
//!                                └─ fixed_tick reaches frame limit ──► Finished (export)
//! ```
//!
//! The host drives two independent clocks. [`RecordingSession::tick`] runs
//! once per rendered frame, advances the elapsed time and samples every
//! recorder. [`RecordingSession::fixed_tick`] runs once per fixed step and
//! only matters in frame-limited mode: it samples transform recorders at the
//! current elapsed time without advancing it, and never samples blend shapes.

use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::animation::{AnimationClip, ComponentKind};
use crate::assets::{AssetSink, export_path};
use crate::errors::{RecorderError, Result};
use crate::recorder::blend_shape::BlendShapeRecorder;
use crate::recorder::config::RecorderConfig;
use crate::recorder::controls::{KeyCode, RecorderCommand};
use crate::recorder::object::ObjectRecorder;
use crate::recorder::path::resolve_path;
use crate::recorder::source::NodeTree;
use crate::scene::NodeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
    /// Frame limit reached; needs [`RecordingSession::reset`] before recording again.
    Finished,
}

/// Notifications a host may react to (status display, time scale, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum RecorderEvent {
    Started,
    Stopped,
    Finished,
    Exported { path: PathBuf },
    /// Requested global playback speed
    TimeScale(f32),
    Status(String),
}

/// A clip handed to the asset sink, with the destination it was written to.
#[derive(Debug, Clone)]
pub struct ClipExport {
    pub path: PathBuf,
    pub clip: AnimationClip,
}

type Listener = Box<dyn FnMut(&RecorderEvent)>;

pub struct RecordingSession {
    config: RecorderConfig,
    sink: Box<dyn AssetSink>,
    listener: Option<Listener>,

    root: Option<NodeHandle>,
    state: SessionState,
    object_recorders: Vec<ObjectRecorder>,
    blend_shape_recorders: Vec<BlendShapeRecorder>,

    elapsed: f32,
    frame_index: u32,
    file_index: u32,
}

impl RecordingSession {
    pub fn new(config: RecorderConfig, sink: impl AssetSink + 'static) -> Self {
        Self {
            config,
            sink: Box::new(sink),
            listener: None,
            root: None,
            state: SessionState::Idle,
            object_recorders: Vec::new(),
            blend_shape_recorders: Vec::new(),
            elapsed: 0.0,
            frame_index: 0,
            file_index: 0,
        }
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&RecorderEvent) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Index the next export will use for its file name.
    #[inline]
    #[must_use]
    pub fn file_index(&self) -> u32 {
        self.file_index
    }

    #[inline]
    #[must_use]
    pub fn object_recorders(&self) -> &[ObjectRecorder] {
        &self.object_recorders
    }

    #[inline]
    #[must_use]
    pub fn blend_shape_recorders(&self) -> &[BlendShapeRecorder] {
        &self.blend_shape_recorders
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Builds fresh recorders for the subtree under `root` and returns to `Idle`.
    ///
    /// The whitelist filters transform recorders node by node; children of a
    /// skipped node are still visited. Blend-shape recorders ignore the
    /// whitelist.
    pub fn setup<T: NodeTree + ?Sized>(&mut self, tree: &T, root: NodeHandle) -> Result<()> {
        if tree.node_name(root).is_none() {
            return Err(RecorderError::NodeNotFound(format!("{root:?}")));
        }

        let whitelist: Option<FxHashSet<&str>> = self
            .config
            .transform_whitelist
            .as_ref()
            .map(|names| names.iter().map(String::as_str).collect());

        let mut object_recorders = Vec::new();
        let mut blend_shape_recorders = Vec::new();

        for node in tree.subtree(root) {
            let name = tree.node_name(node).unwrap_or_default();
            let record_transform = whitelist.as_ref().is_none_or(|w| w.contains(name));

            let descriptor = if self.config.record_blend_shape {
                tree.blend_shapes(node).filter(|d| d.channel_count() > 0)
            } else {
                None
            };

            if !record_transform && descriptor.is_none() {
                continue;
            }

            let path = resolve_path(tree, root, node)?;
            if let Some(descriptor) = descriptor {
                blend_shape_recorders.push(BlendShapeRecorder::new(path.clone(), node, &descriptor));
            }
            if record_transform {
                object_recorders.push(ObjectRecorder::new(path, node));
            }
        }

        log::debug!(
            "Recorder setup: {} transform recorders, {} blend-shape recorders",
            object_recorders.len(),
            blend_shape_recorders.len()
        );

        self.root = Some(root);
        self.object_recorders = object_recorders;
        self.blend_shape_recorders = blend_shape_recorders;
        self.state = SessionState::Idle;
        self.elapsed = 0.0;
        self.frame_index = 0;

        if self.config.change_time_scale {
            self.emit(&RecorderEvent::TimeScale(self.config.time_scale_on_start));
        }
        Ok(())
    }

    /// Rebuilds the recorders under the current root, discarding all samples.
    pub fn reset<T: NodeTree + ?Sized>(&mut self, tree: &T) -> Result<()> {
        let root = self.require_root("reset")?;
        self.setup(tree, root)
    }

    // ========================================================================
    // Recording control
    // ========================================================================

    pub fn start(&mut self) -> Result<()> {
        self.require_root("start")?;
        if self.state != SessionState::Idle {
            return Err(self.invalid("start"));
        }

        self.state = SessionState::Recording;
        self.status("Start Recorder");
        self.emit(&RecorderEvent::Started);
        self.emit(&RecorderEvent::TimeScale(self.config.time_scale_on_record));
        Ok(())
    }

    /// Ends the recording, exports it and rebuilds the recorders.
    ///
    /// If the export fails the recorders are kept as they are, so the caller
    /// can retry [`export`](Self::export) and then [`reset`](Self::reset).
    pub fn stop<T: NodeTree + ?Sized>(&mut self, tree: &T) -> Result<ClipExport> {
        if self.state != SessionState::Recording {
            return Err(self.invalid("stop"));
        }

        self.state = SessionState::Idle;
        self.status("End Record, generating .anim file");
        self.emit(&RecorderEvent::Stopped);

        let export = self.export()?;
        self.reset(tree)?;
        Ok(export)
    }

    /// Dispatches a start/stop trigger. A stop yields the resulting export.
    pub fn handle_command<T: NodeTree + ?Sized>(
        &mut self,
        tree: &T,
        command: RecorderCommand,
    ) -> Result<Option<ClipExport>> {
        match command {
            RecorderCommand::Start => self.start().map(|()| None),
            RecorderCommand::Stop => self.stop(tree).map(Some),
        }
    }

    /// Looks a key press up in the configured bindings and dispatches it.
    /// Unbound keys are ignored.
    pub fn handle_key<T: NodeTree + ?Sized>(&mut self, tree: &T, key: KeyCode) -> Result<Option<ClipExport>> {
        match self.config.controls.command_for(key) {
            Some(command) => self.handle_command(tree, command),
            None => Ok(None),
        }
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Per-frame sampling. Dropped unless recording.
    ///
    /// A negative or non-finite `delta_time` drops the frame without
    /// advancing the clock, so sample times never run backwards.
    pub fn tick<T: NodeTree + ?Sized>(&mut self, tree: &T, delta_time: f32) {
        if self.state != SessionState::Recording {
            return;
        }
        if !delta_time.is_finite() || delta_time < 0.0 {
            log::warn!("Dropped frame with invalid delta time {delta_time}");
            return;
        }

        self.elapsed += delta_time;
        let time = self.elapsed;

        for recorder in &mut self.object_recorders {
            if let Err(err) = recorder.add_frame(tree, time) {
                log::warn!("Skipped transform sample at {time}: {err}");
            }
        }
        for recorder in &mut self.blend_shape_recorders {
            if let Err(err) = recorder.add_frame(tree, time) {
                log::warn!("Skipped blend-shape sample at {time}: {err}");
            }
        }
    }

    /// Fixed-step sampling for frame-limited mode.
    ///
    /// Samples transform recorders only, at the elapsed time of the frame
    /// clock. Once `record_frames` samples have been taken, the next call
    /// finishes the session and exports.
    pub fn fixed_tick<T: NodeTree + ?Sized>(&mut self, tree: &T) -> Result<Option<ClipExport>> {
        if self.state != SessionState::Recording || !self.config.record_limited_frames {
            return Ok(None);
        }

        if self.frame_index < self.config.record_frames {
            let time = self.elapsed;
            for recorder in &mut self.object_recorders {
                if let Err(err) = recorder.add_frame(tree, time) {
                    log::warn!("Skipped transform sample at frame {}: {err}", self.frame_index);
                }
            }
            self.frame_index += 1;
            return Ok(None);
        }

        self.state = SessionState::Finished;
        self.emit(&RecorderEvent::Finished);
        let export = self.export()?;
        self.status("Recording Finish, generating .anim file");
        Ok(Some(export))
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Assembles the clip from the current recorders without persisting it.
    #[must_use]
    pub fn build_clip(&self) -> AnimationClip {
        let mut clip = AnimationClip::new(self.config.file_name.clone());

        for recorder in &self.object_recorders {
            for curve in recorder.curves() {
                clip.set_curve(recorder.path(), ComponentKind::Transform, curve.property(), curve.to_curve());
            }
        }

        if self.config.record_blend_shape {
            for recorder in &self.blend_shape_recorders {
                for curve in recorder.curves() {
                    clip.set_curve(recorder.path(), ComponentKind::SkinnedMesh, curve.property(), curve.to_curve());
                }
            }
        }

        clip.ensure_quaternion_continuity();
        clip
    }

    /// Builds the clip and hands it to the asset sink.
    ///
    /// The file index only advances when the sink succeeds; recorder state
    /// is never touched, so a failed export can simply be retried.
    pub fn export(&mut self) -> Result<ClipExport> {
        self.require_root("export")?;

        let path = export_path(&self.config.save_path, &self.config.file_name, self.file_index);
        let clip = self.build_clip();

        if let Err(err) = self.sink.create_asset(&clip, &path) {
            log::error!("Export to {} failed: {err}", path.display());
            return Err(err);
        }

        self.file_index += 1;
        self.status(&format!(".anim file generated to {}", path.display()));
        self.emit(&RecorderEvent::Exported { path: path.clone() });

        Ok(ClipExport { path, clip })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn require_root(&self, operation: &'static str) -> Result<NodeHandle> {
        self.root.ok_or(RecorderError::SessionNotSetUp(operation))
    }

    fn invalid(&self, operation: &'static str) -> RecorderError {
        log::warn!("Rejected {operation} while {:?}", self.state);
        RecorderError::InvalidStateTransition {
            operation,
            state: self.state,
        }
    }

    fn status(&mut self, message: &str) {
        log::info!("{message}");
        self.emit(&RecorderEvent::Status(message.to_owned()));
    }

    fn emit(&mut self, event: &RecorderEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }
}
