use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::recorder::controls::RecorderControls;

/// Recording options, fixed for the lifetime of a session.
///
/// Every field has a default, so a JSON config only needs the keys it
/// overrides:
///
/// ```json
/// { "save_path": "clips/", "file_name": "walk", "record_blend_shape": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Prefix of the export destination; concatenated verbatim, so directories need a trailing separator
    pub save_path: String,
    pub file_name: String,

    /// If set, only nodes with one of these names get a transform recorder
    pub transform_whitelist: Option<Vec<String>>,
    pub record_blend_shape: bool,

    /// Enables the fixed-step path that stops by itself after `record_frames` samples
    pub record_limited_frames: bool,
    pub record_frames: u32,

    // Time scale hints, forwarded to the host untouched.
    // `time_scale_on_start` is sent at setup only with `change_time_scale`;
    // `time_scale_on_record` is sent on every start.
    pub change_time_scale: bool,
    pub time_scale_on_start: f32,
    pub time_scale_on_record: f32,

    pub controls: RecorderControls,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            save_path: String::new(),
            file_name: String::new(),
            transform_whitelist: None,
            record_blend_shape: true,
            record_limited_frames: false,
            record_frames: 1000,
            change_time_scale: false,
            time_scale_on_start: 0.0,
            time_scale_on_record: 1.0,
            controls: RecorderControls::default(),
        }
    }
}

impl RecorderConfig {
    #[must_use]
    pub fn new(save_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            save_path: save_path.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transform_whitelist = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_blend_shapes(mut self, enabled: bool) -> Self {
        self.record_blend_shape = enabled;
        self
    }

    #[must_use]
    pub fn with_frame_limit(mut self, frames: u32) -> Self {
        self.record_limited_frames = true;
        self.record_frames = frames;
        self
    }

    #[must_use]
    pub fn with_time_scale(mut self, on_start: f32, on_record: f32) -> Self {
        self.change_time_scale = true;
        self.time_scale_on_start = on_start;
        self.time_scale_on_record = on_record;
        self
    }
}
