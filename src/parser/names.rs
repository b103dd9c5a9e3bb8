//! `--names` token parsing.
//!
//! Each token is `name` or `name:count`. A bare name requests a single slot.

use crate::error::{AtlasError, Result};
use crate::types::NameCount;

/// Parse name tokens into an ordered list of name/count pairs.
///
/// Order is preserved and repeated names are kept as separate entries; each
/// entry indexes its own slots from 0.
pub fn parse_name_counts<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<NameCount>> {
    tokens.iter().map(|t| parse_name_count(t.as_ref())).collect()
}

/// Parse a single `name[:count]` token.
pub fn parse_name_count(token: &str) -> Result<NameCount> {
    let (name, count) = match token.split_once(':') {
        Some((name, count_str)) => {
            let count = count_str.parse::<u32>().map_err(|_| AtlasError::NameCount {
                token: token.to_string(),
                message: format!("count '{}' is not a non-negative integer", count_str),
            })?;
            (name, count)
        }
        None => (token, 1),
    };

    if name.is_empty() {
        return Err(AtlasError::NameCount {
            token: token.to_string(),
            message: "name is empty".to_string(),
        });
    }

    Ok(NameCount::new(name, count))
}

/// Total number of slots requested.
pub fn total_requested(names: &[NameCount]) -> usize {
    names.iter().map(|nc| nc.count as usize).sum()
}
