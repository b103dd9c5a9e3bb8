//! `--dup` alias parsing.
//!
//! Grammar per entry: `alias[:idx]=target:idx`. Each argument may hold several
//! comma-separated entries; empty entries are ignored.

use crate::error::{AtlasError, Result};
use crate::types::DupSpec;

/// Parse all `--dup` arguments into alias specs, in declaration order.
pub fn parse_dups<S: AsRef<str>>(args: &[S]) -> Result<Vec<DupSpec>> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .filter(|entry| !entry.is_empty())
        .map(parse_dup)
        .collect()
}

/// Parse a single `alias[:idx]=target:idx` entry.
pub fn parse_dup(entry: &str) -> Result<DupSpec> {
    let syntax = |message: &str| AtlasError::DupSyntax {
        entry: entry.to_string(),
        message: message.to_string(),
    };

    let (left, right) = entry
        .split_once('=')
        .ok_or_else(|| syntax("missing '='"))?;

    let (target_name, target_idx) = right
        .split_once(':')
        .ok_or_else(|| syntax("target must be name:index"))?;
    let target_index = parse_index(entry, target_idx)?;

    let (alias_name, alias_index) = match left.split_once(':') {
        Some((name, idx)) => (name, parse_index(entry, idx)?),
        None => (left, 0),
    };

    if alias_name.is_empty() {
        return Err(syntax("alias name is empty"));
    }
    if target_name.is_empty() {
        return Err(syntax("target name is empty"));
    }

    Ok(DupSpec::new(alias_name, alias_index, target_name, target_index))
}

fn parse_index(entry: &str, s: &str) -> Result<u32> {
    s.parse::<u32>().map_err(|_| AtlasError::DupSyntax {
        entry: entry.to_string(),
        message: format!("index '{}' is not a non-negative integer", s),
    })
}
