//! Descriptor writers.
//!
//! Both writers are pure functions of the region list and sheet info; the
//! `write_*` variants overwrite the target file.

mod atlas;
mod json;

pub use atlas::{render_atlas, write_atlas, PageSettings};
pub use json::{frame_key, render_json, write_json, APP_NAME};

/// The source image as referenced by the descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    /// File name of the image (no directory).
    pub image: String,
    pub width: u32,
    pub height: u32,
}

impl SheetInfo {
    pub fn new(image: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            image: image.into(),
            width,
            height,
        }
    }
}
