//! Persistence of exported clips.

pub mod sink;

pub use sink::{AssetSink, CLIP_EXTENSION, JsonFileSink, MemorySink, export_path};
