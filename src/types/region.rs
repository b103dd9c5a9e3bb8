//! Region records produced by the grid slicer.
//!
//! A region is one named, indexed rectangle within the source image. Trim and
//! rotation fields are carried for descriptor-format compatibility; the grid
//! slicer never trims or rotates.

use std::fmt;

/// Pixel rectangle within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Identity of a region: `(name, index)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey {
    pub name: String,
    pub index: u32,
}

impl RegionKey {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.index)
    }
}

/// A named frame in the atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub index: u32,
    /// Packed rectangle in the sheet.
    pub rect: Rect,
    pub rotate: bool,
    /// Original (untrimmed) size.
    pub orig_w: u32,
    pub orig_h: u32,
    /// Offset of the packed rect inside the original size.
    pub off_x: u32,
    pub off_y: u32,
}

impl Region {
    /// Create an untrimmed, unrotated region covering `rect`.
    pub fn new(name: impl Into<String>, index: u32, rect: Rect) -> Self {
        Self {
            name: name.into(),
            index,
            rect,
            rotate: false,
            orig_w: rect.w,
            orig_h: rect.h,
            off_x: 0,
            off_y: 0,
        }
    }

    pub fn key(&self) -> RegionKey {
        RegionKey::new(self.name.clone(), self.index)
    }

    /// Copy this region's geometry under a different identity.
    pub fn aliased(&self, name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
            ..self.clone()
        }
    }

    /// True when the packed rect differs from the original size or is offset.
    pub fn is_trimmed(&self) -> bool {
        self.off_x != 0
            || self.off_y != 0
            || self.rect.w != self.orig_w
            || self.rect.h != self.orig_h
    }
}

/// A requested name and how many consecutive grid slots it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub count: u32,
}

impl NameCount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// An alias `alias:index` pointing at an already-sliced `target:index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DupSpec {
    pub alias: RegionKey,
    pub target: RegionKey,
}

impl DupSpec {
    pub fn new(
        alias_name: impl Into<String>,
        alias_index: u32,
        target_name: impl Into<String>,
        target_index: u32,
    ) -> Self {
        Self {
            alias: RegionKey::new(alias_name, alias_index),
            target: RegionKey::new(target_name, target_index),
        }
    }
}
