//! gridatlas - grid sprite sheet to atlas descriptors
//!
//! Slices a grid-aligned sprite sheet into named, indexed regions and writes
//! them as a libGDX `.atlas` file and a TexturePacker-style JSON hash.

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use alias::{resolve_aliases, RegionTable};
pub use config::{Config, OutputKind};
pub use error::{AtlasError, Result};
pub use grid::{slice_grid, GridSpec, SliceOutcome};
pub use parser::{parse_dups, parse_name_counts};
pub use render::{render_atlas, render_json, write_atlas, write_json, PageSettings, SheetInfo};
pub use types::{DupSpec, NameCount, Rect, Region, RegionKey};
