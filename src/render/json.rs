//! TexturePacker-compatible JSON (Hash) writer.
//!
//! Frames are keyed `"{name}_{index}"` and emitted in region-list order.

use std::fs;
use std::path::Path;

use serde::ser::Serializer;
use serde::Serialize;

use crate::error::{AtlasError, Result};
use crate::types::Region;

use super::SheetInfo;

/// Application name written into `meta.app`.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Render the JSON document for `regions`.
pub fn render_json(sheet: &SheetInfo, regions: &[Region]) -> Result<String> {
    let doc = TexturePackerJson::new(sheet, regions);
    serde_json::to_string_pretty(&doc).map_err(|e| AtlasError::Serialize {
        message: format!("Failed to serialize frames: {}", e),
    })
}

/// Write the JSON file, replacing any existing file at `path`.
pub fn write_json(sheet: &SheetInfo, regions: &[Region], path: &Path) -> Result<()> {
    let json = render_json(sheet, regions)?;
    fs::write(path, json).map_err(|e| AtlasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write frame JSON: {}", e),
    })
}

/// Key of a region in the `frames` object.
pub fn frame_key(region: &Region) -> String {
    format!("{}_{}", region.name, region.index)
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson<'a> {
    frames: Frames<'a>,
    meta: TPMeta<'a>,
}

/// Region list serialized as an insertion-ordered map.
struct Frames<'a>(&'a [Region]);

impl Serialize for Frames<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|r| (frame_key(r), TPFrame::from(r))))
    }
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
    pivot: TPPoint,
    index: u32,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPPoint {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct TPMeta<'a> {
    app: &'static str,
    version: &'static str,
    image: &'a str,
    size: TPSize,
    scale: &'static str,
}

impl From<&Region> for TPFrame {
    fn from(r: &Region) -> Self {
        TPFrame {
            frame: TPRect {
                x: r.rect.x,
                y: r.rect.y,
                w: r.rect.w,
                h: r.rect.h,
            },
            rotated: r.rotate,
            trimmed: r.is_trimmed(),
            sprite_source_size: TPRect {
                x: r.off_x,
                y: r.off_y,
                w: r.rect.w,
                h: r.rect.h,
            },
            source_size: TPSize {
                w: r.orig_w,
                h: r.orig_h,
            },
            pivot: TPPoint { x: 0.5, y: 0.5 },
            index: r.index,
        }
    }
}

impl<'a> TexturePackerJson<'a> {
    fn new(sheet: &'a SheetInfo, regions: &'a [Region]) -> Self {
        TexturePackerJson {
            frames: Frames(regions),
            meta: TPMeta {
                app: APP_NAME,
                version: env!("CARGO_PKG_VERSION"),
                image: &sheet.image,
                size: TPSize {
                    w: sheet.width,
                    h: sheet.height,
                },
                scale: "1",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_frame_fields() {
        let sheet = SheetInfo::new("sheet.png", 64, 32);
        let regions = vec![Region::new("idle", 1, Rect::new(32, 0, 32, 32))];
        let v = parse(&render_json(&sheet, &regions).unwrap());

        let f = &v["frames"]["idle_1"];
        assert_eq!(f["frame"]["x"], 32);
        assert_eq!(f["frame"]["y"], 0);
        assert_eq!(f["frame"]["w"], 32);
        assert_eq!(f["frame"]["h"], 32);
        assert_eq!(f["rotated"], false);
        assert_eq!(f["trimmed"], false);
        assert_eq!(f["spriteSourceSize"]["x"], 0);
        assert_eq!(f["spriteSourceSize"]["w"], 32);
        assert_eq!(f["sourceSize"]["h"], 32);
        assert_eq!(f["pivot"]["x"], 0.5);
        assert_eq!(f["pivot"]["y"], 0.5);
        assert_eq!(f["index"], 1);
    }

    #[test]
    fn test_meta() {
        let sheet = SheetInfo::new("hero.png", 128, 64);
        let v = parse(&render_json(&sheet, &[]).unwrap());

        assert_eq!(v["meta"]["app"], "gridatlas");
        assert_eq!(v["meta"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(v["meta"]["image"], "hero.png");
        assert_eq!(v["meta"]["size"]["w"], 128);
        assert_eq!(v["meta"]["size"]["h"], 64);
        assert_eq!(v["meta"]["scale"], "1");
        assert!(v["frames"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_frames_keep_region_order() {
        let sheet = SheetInfo::new("sheet.png", 64, 64);
        let regions = vec![
            Region::new("zeta", 0, Rect::new(0, 0, 32, 32)),
            Region::new("alpha", 0, Rect::new(32, 0, 32, 32)),
        ];
        let json = render_json(&sheet, &regions).unwrap();
        let zeta = json.find("\"zeta_0\"").unwrap();
        let alpha = json.find("\"alpha_0\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_trimmed_flag() {
        let sheet = SheetInfo::new("sheet.png", 64, 64);
        let mut region = Region::new("t", 0, Rect::new(0, 0, 30, 32));
        region.orig_w = 32;
        region.off_x = 1;
        let v = parse(&render_json(&sheet, &[region]).unwrap());
        assert_eq!(v["frames"]["t_0"]["trimmed"], true);
        assert_eq!(v["frames"]["t_0"]["spriteSourceSize"]["x"], 1);
        assert_eq!(v["frames"]["t_0"]["sourceSize"]["w"], 32);
    }

    #[test]
    fn test_two_space_indent() {
        let sheet = SheetInfo::new("sheet.png", 8, 8);
        let json = render_json(&sheet, &[]).unwrap();
        assert!(json.starts_with("{\n  \"frames\": {},\n  \"meta\": {\n    \"app\""));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        let sheet = SheetInfo::new("sheet.png", 64, 32);
        let regions = vec![Region::new("idle", 0, Rect::new(0, 0, 32, 32))];

        write_json(&sheet, &regions, &path).unwrap();

        let v = parse(&fs::read_to_string(&path).unwrap());
        assert!(v["frames"]["idle_0"].is_object());
        assert_eq!(v["meta"]["image"], "sheet.png");
    }
}
