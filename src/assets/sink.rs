use std::cell::RefCell;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::animation::AnimationClip;
use crate::errors::{RecorderError, Result};

/// Extension of exported clip files.
pub const CLIP_EXTENSION: &str = "anim";

/// Destination of the `index`-th export of a run.
///
/// The first export is `{save_path}{file_name}.anim`; later ones insert
/// `-{index}` before the extension.
#[must_use]
pub fn export_path(save_path: &str, file_name: &str, index: u32) -> PathBuf {
    let mut name = format!("{save_path}{file_name}");
    if index != 0 {
        name.push_str(&format!("-{index}"));
    }
    name.push('.');
    name.push_str(CLIP_EXTENSION);
    PathBuf::from(name)
}

/// Persists exported clips.
///
/// Implementations report failures as [`RecorderError::AssetPersistence`];
/// the session never retries.
pub trait AssetSink {
    fn create_asset(&mut self, clip: &AnimationClip, path: &Path) -> Result<()>;
}

/// Writes clips as pretty-printed JSON files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileSink;

impl JsonFileSink {
    fn write(clip: &AnimationClip, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, clip)?;
        writer.flush()
    }

    /// Reads back a clip written by this sink.
    pub fn load(path: impl AsRef<Path>) -> Result<AnimationClip> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl AssetSink for JsonFileSink {
    fn create_asset(&mut self, clip: &AnimationClip, path: &Path) -> Result<()> {
        Self::write(clip, path)
            .map_err(|err| RecorderError::AssetPersistence(format!("{}: {err}", path.display())))
    }
}

/// Keeps exported clips in memory.
///
/// Clones share the same storage, so a host can hand one clone to the
/// session and read exports through another.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    assets: Rc<RefCell<Vec<(PathBuf, AnimationClip)>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.borrow().is_empty()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.assets.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    #[must_use]
    pub fn clip(&self, index: usize) -> Option<AnimationClip> {
        self.assets.borrow().get(index).map(|(_, c)| c.clone())
    }

    #[must_use]
    pub fn last(&self) -> Option<(PathBuf, AnimationClip)> {
        self.assets.borrow().last().cloned()
    }
}

impl AssetSink for MemorySink {
    fn create_asset(&mut self, clip: &AnimationClip, path: &Path) -> Result<()> {
        self.assets.borrow_mut().push((path.to_path_buf(), clip.clone()));
        Ok(())
    }
}
