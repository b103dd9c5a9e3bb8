//! Core domain types for gridatlas.
//!
//! - `Region` - a named, indexed rectangle in the sheet
//! - `NameCount` - a requested name and its slot count
//! - `DupSpec` - an alias onto an existing region

mod region;

pub use region::{DupSpec, NameCount, Rect, Region, RegionKey};
