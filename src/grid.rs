//! Grid slicing.
//!
//! Walks the sheet left-to-right, top-to-bottom in fixed steps of
//! `tile + spacing`, offset by the margin, and assigns each slot to the next
//! expanded `(name, index)` pair. Slicing stops when the names run out or the
//! next slot would fall outside the image.

use crate::error::{AtlasError, Result};
use crate::types::{NameCount, Rect, Region};

/// Tile geometry for a grid-aligned sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub tile_w: u32,
    pub tile_h: u32,
    pub margin_x: u32,
    pub margin_y: u32,
    pub spacing_x: u32,
    pub spacing_y: u32,
}

impl GridSpec {
    /// Grid with no margin or spacing.
    pub fn new(tile_w: u32, tile_h: u32) -> Self {
        Self {
            tile_w,
            tile_h,
            margin_x: 0,
            margin_y: 0,
            spacing_x: 0,
            spacing_y: 0,
        }
    }

    pub fn with_margin(mut self, x: u32, y: u32) -> Self {
        self.margin_x = x;
        self.margin_y = y;
        self
    }

    pub fn with_spacing(mut self, x: u32, y: u32) -> Self {
        self.spacing_x = x;
        self.spacing_y = y;
        self
    }

    /// Check that at least one tile fits inside a `width` x `height` image.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if self.tile_w == 0 || self.tile_h == 0 {
            return Err(AtlasError::InvalidGrid {
                message: format!(
                    "Tile size must be non-zero, got {}x{}",
                    self.tile_w, self.tile_h
                ),
                help: Some("Both tile width and height must be at least 1".to_string()),
            });
        }

        let need_w = self.margin_x as u64 + self.tile_w as u64;
        let need_h = self.margin_y as u64 + self.tile_h as u64;
        if need_w > width as u64 || need_h > height as u64 {
            return Err(AtlasError::InvalidGrid {
                message: format!(
                    "{}x{} tile at margin {},{} does not fit in a {}x{} image",
                    self.tile_w, self.tile_h, self.margin_x, self.margin_y, width, height
                ),
                help: Some("Reduce --grid or --margin".to_string()),
            });
        }

        Ok(())
    }

    /// Iterate the tile slots of a `width` x `height` image in row-major order.
    pub fn slots(&self, width: u32, height: u32) -> GridSlots {
        GridSlots {
            spec: *self,
            width: width as u64,
            height: height as u64,
            cursor: GridCursor::default(),
            done: false,
        }
    }
}

/// Row/column position of the next slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub row: u64,
    pub col: u64,
}

/// Row-major iterator over the tile rectangles that fit inside the image.
#[derive(Debug, Clone)]
pub struct GridSlots {
    spec: GridSpec,
    width: u64,
    height: u64,
    cursor: GridCursor,
    done: bool,
}

impl GridSlots {
    fn origin(&self) -> (u64, u64) {
        let s = &self.spec;
        let x = s.margin_x as u64 + self.cursor.col * (s.tile_w as u64 + s.spacing_x as u64);
        let y = s.margin_y as u64 + self.cursor.row * (s.tile_h as u64 + s.spacing_y as u64);
        (x, y)
    }
}

impl Iterator for GridSlots {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let (tile_w, tile_h) = (self.spec.tile_w as u64, self.spec.tile_h as u64);

        while !self.done {
            let (x, y) = self.origin();

            if x + tile_w > self.width {
                self.cursor = GridCursor {
                    row: self.cursor.row + 1,
                    col: 0,
                };
                let (_, next_y) = self.origin();
                if next_y + tile_h > self.height {
                    self.done = true;
                }
                continue;
            }

            if y + tile_h > self.height {
                self.done = true;
                continue;
            }

            self.cursor.col += 1;
            // Both origins are bounded by the image size, which is u32.
            return Some(Rect::new(
                x as u32,
                y as u32,
                self.spec.tile_w,
                self.spec.tile_h,
            ));
        }

        None
    }
}

/// Result of slicing: the placed regions and how many were asked for.
#[derive(Debug, Clone)]
pub struct SliceOutcome {
    pub regions: Vec<Region>,
    pub requested: usize,
}

impl SliceOutcome {
    pub fn produced(&self) -> usize {
        self.regions.len()
    }

    /// True when the image ran out of slots before the names ran out.
    pub fn is_partial(&self) -> bool {
        self.produced() < self.requested
    }
}

/// Expand name/count pairs into the flat `(name, index)` assignment order.
pub fn expand_names(names: &[NameCount]) -> impl Iterator<Item = (&str, u32)> + '_ {
    names
        .iter()
        .flat_map(|nc| (0..nc.count).map(move |i| (nc.name.as_str(), i)))
}

/// Slice a `width` x `height` sheet and assign slots to `names` in order.
pub fn slice_grid(
    width: u32,
    height: u32,
    spec: &GridSpec,
    names: &[NameCount],
) -> Result<SliceOutcome> {
    spec.validate(width, height)?;

    let requested = names.iter().map(|nc| nc.count as usize).sum();
    let regions = expand_names(names)
        .zip(spec.slots(width, height))
        .map(|((name, index), rect)| Region::new(name, index, rect))
        .collect();

    Ok(SliceOutcome { regions, requested })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &[(&str, u32)]) -> Vec<NameCount> {
        pairs.iter().map(|&(n, c)| NameCount::new(n, c)).collect()
    }

    #[test]
    fn test_two_tiles_in_a_row() {
        let out = slice_grid(64, 32, &GridSpec::new(32, 32), &names(&[("idle", 2)])).unwrap();
        assert!(!out.is_partial());
        assert_eq!(out.regions.len(), 2);
        assert_eq!(out.regions[0].key().to_string(), "idle:0");
        assert_eq!(out.regions[0].rect, Rect::new(0, 0, 32, 32));
        assert_eq!(out.regions[1].key().to_string(), "idle:1");
        assert_eq!(out.regions[1].rect, Rect::new(32, 0, 32, 32));
    }

    #[test]
    fn test_bounds_exhausted_after_wrap() {
        // Second tile wraps to row 1, which is below the 32px image.
        let out = slice_grid(48, 32, &GridSpec::new(32, 32), &names(&[("tile", 2)])).unwrap();
        assert!(out.is_partial());
        assert_eq!(out.produced(), 1);
        assert_eq!(out.requested, 2);
        assert_eq!(out.regions[0].rect, Rect::new(0, 0, 32, 32));
    }

    #[test]
    fn test_wraps_to_next_row() {
        let out = slice_grid(48, 64, &GridSpec::new(32, 32), &names(&[("tile", 2)])).unwrap();
        assert!(!out.is_partial());
        assert_eq!(out.regions[1].rect, Rect::new(0, 32, 32, 32));
    }

    #[test]
    fn test_capacity_is_floor_product() {
        for &(w, h, tw, th) in &[(64, 32, 32, 32), (100, 50, 16, 16), (33, 65, 8, 16), (7, 7, 7, 7)] {
            let spec = GridSpec::new(tw, th);
            let expected = ((w / tw) * (h / th)) as usize;
            assert_eq!(spec.slots(w, h).count(), expected, "{}x{} / {}x{}", w, h, tw, th);

            let out = slice_grid(w, h, &spec, &names(&[("t", 10_000)])).unwrap();
            assert_eq!(out.produced(), expected);
        }
    }

    #[test]
    fn test_assignment_order_is_row_major() {
        let out = slice_grid(
            64,
            64,
            &GridSpec::new(32, 32),
            &names(&[("a", 2), ("b", 1)]),
        )
        .unwrap();
        let keys: Vec<String> = out.regions.iter().map(|r| r.key().to_string()).collect();
        assert_eq!(keys, vec!["a:0", "a:1", "b:0"]);
        assert_eq!(out.regions[2].rect, Rect::new(0, 32, 32, 32));
    }

    #[test]
    fn test_repeated_names_restart_index() {
        let out = slice_grid(
            128,
            32,
            &GridSpec::new(32, 32),
            &names(&[("a", 1), ("b", 1), ("a", 2)]),
        )
        .unwrap();
        let keys: Vec<String> = out.regions.iter().map(|r| r.key().to_string()).collect();
        assert_eq!(keys, vec!["a:0", "b:0", "a:0", "a:1"]);
    }

    #[test]
    fn test_margin_and_spacing() {
        let spec = GridSpec::new(16, 16).with_margin(2, 3).with_spacing(1, 4);
        let rects: Vec<Rect> = spec.slots(40, 50).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(2, 3, 16, 16),
                Rect::new(19, 3, 16, 16),
                Rect::new(2, 23, 16, 16),
                Rect::new(19, 23, 16, 16),
            ]
        );
    }

    #[test]
    fn test_zero_counts_consume_nothing() {
        let out = slice_grid(
            64,
            32,
            &GridSpec::new(32, 32),
            &names(&[("gap", 0), ("idle", 1)]),
        )
        .unwrap();
        assert_eq!(out.produced(), 1);
        assert_eq!(out.regions[0].name, "idle");
        assert_eq!(out.regions[0].rect.x, 0);
    }

    #[test]
    fn test_tile_wider_than_image_is_rejected() {
        let err = slice_grid(16, 64, &GridSpec::new(32, 32), &names(&[("a", 1)])).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidGrid { .. }));
    }

    #[test]
    fn test_margin_pushes_tile_out_of_bounds() {
        let spec = GridSpec::new(32, 32).with_margin(1, 0);
        assert!(spec.validate(32, 32).is_err());
        assert!(spec.validate(33, 32).is_ok());
    }

    #[test]
    fn test_zero_tile_is_rejected() {
        assert!(GridSpec::new(0, 8).validate(8, 8).is_err());
    }

    #[test]
    fn test_empty_names() {
        let out = slice_grid(64, 64, &GridSpec::new(32, 32), &[]).unwrap();
        assert_eq!(out.produced(), 0);
        assert!(!out.is_partial());
    }
}
