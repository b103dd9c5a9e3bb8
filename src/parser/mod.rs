//! Parsers for the command-line naming vocabulary.
//!
//! - `names` turns `idle:4 walk:8 banner` into ordered name/count pairs
//! - `dup` turns `default=idle:0,stand:1=idle:1` into alias specs

pub mod dup;
pub mod names;

pub use dup::{parse_dup, parse_dups};
pub use names::{parse_name_count, parse_name_counts, total_requested};
