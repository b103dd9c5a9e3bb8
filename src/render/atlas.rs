//! libGDX-style `.atlas` writer.
//!
//! Layout: a five-line page header, a blank line, then one block per region
//! with the name followed by six indented `key: value` lines.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{AtlasError, Result};
use crate::types::Region;

use super::SheetInfo;

/// Texture settings written into the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub format: String,
    pub filter: String,
    pub repeat: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            format: "RGBA8888".to_string(),
            filter: "Linear,Linear".to_string(),
            repeat: "none".to_string(),
        }
    }
}

/// Render the atlas text for `regions`.
pub fn render_atlas(sheet: &SheetInfo, settings: &PageSettings, regions: &[Region]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", sheet.image);
    let _ = writeln!(out, "size: {}, {}", sheet.width, sheet.height);
    let _ = writeln!(out, "format: {}", settings.format);
    let _ = writeln!(out, "filter: {}", settings.filter);
    let _ = writeln!(out, "repeat: {}", settings.repeat);
    out.push('\n');

    for r in regions {
        let _ = writeln!(out, "{}", r.name);
        let _ = writeln!(out, "  rotate: {}", r.rotate);
        let _ = writeln!(out, "  xy: {}, {}", r.rect.x, r.rect.y);
        let _ = writeln!(out, "  size: {}, {}", r.rect.w, r.rect.h);
        let _ = writeln!(out, "  orig: {}, {}", r.orig_w, r.orig_h);
        let _ = writeln!(out, "  offset: {}, {}", r.off_x, r.off_y);
        let _ = writeln!(out, "  index: {}", r.index);
    }

    out
}

/// Write the atlas file, replacing any existing file at `path`.
pub fn write_atlas(
    sheet: &SheetInfo,
    settings: &PageSettings,
    regions: &[Region],
    path: &Path,
) -> Result<()> {
    let text = render_atlas(sheet, settings, regions);
    fs::write(path, text).map_err(|e| AtlasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write atlas: {}", e),
    })
}
