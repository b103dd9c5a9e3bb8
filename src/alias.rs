//! Alias resolution.
//!
//! An alias copies the geometry of an already-sliced region under a new
//! `(name, index)` key without consuming a grid slot. Targets are resolved
//! against the sliced set only, never against other aliases.

use std::collections::{HashMap, HashSet};

use crate::error::{AtlasError, Result};
use crate::types::{DupSpec, Region, RegionKey};

/// Composite-key index over a region list.
#[derive(Debug)]
pub struct RegionTable<'a> {
    regions: &'a [Region],
    by_key: HashMap<RegionKey, usize>,
}

impl<'a> RegionTable<'a> {
    /// Index `regions` by `(name, index)`, rejecting duplicate keys.
    pub fn build(regions: &'a [Region]) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if by_key.insert(region.key(), i).is_some() {
                return Err(AtlasError::DuplicateRegion {
                    name: region.name.clone(),
                    index: region.index,
                });
            }
        }
        Ok(Self { regions, by_key })
    }

    pub fn get(&self, key: &RegionKey) -> Option<&'a Region> {
        self.by_key.get(key).map(|&i| &self.regions[i])
    }

    pub fn contains(&self, key: &RegionKey) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Indices sliced under `name`, in ascending order.
    pub fn indices_of(&self, name: &str) -> Vec<u32> {
        let mut indices: Vec<u32> = self
            .by_key
            .keys()
            .filter(|k| k.name == name)
            .map(|k| k.index)
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Resolve `dups` against `regions` and prepend the aliases.
///
/// The returned list holds the aliases in declaration order followed by the
/// original regions in their original order.
pub fn resolve_aliases(regions: Vec<Region>, dups: &[DupSpec]) -> Result<Vec<Region>> {
    let table = RegionTable::build(&regions)?;
    let mut declared: HashSet<&RegionKey> = HashSet::with_capacity(dups.len());
    let mut aliases = Vec::with_capacity(dups.len());

    for dup in dups {
        let target = table
            .get(&dup.target)
            .ok_or_else(|| target_not_found(&table, &dup.target))?;

        if table.contains(&dup.alias) || !declared.insert(&dup.alias) {
            return Err(AtlasError::DuplicateRegion {
                name: dup.alias.name.clone(),
                index: dup.alias.index,
            });
        }

        aliases.push(target.aliased(dup.alias.name.clone(), dup.alias.index));
    }

    aliases.extend(regions);
    Ok(aliases)
}

fn target_not_found(table: &RegionTable<'_>, key: &RegionKey) -> AtlasError {
    let indices = table.indices_of(&key.name);
    let help = match (indices.first(), indices.last()) {
        (Some(first), Some(last)) => Some(format!(
            "'{}' was sliced with indices {}..={}",
            key.name, first, last
        )),
        _ => Some(format!(
            "No region named '{}' was sliced ({} regions total)",
            key.name,
            table.len()
        )),
    };

    AtlasError::DupTargetNotFound {
        name: key.name.clone(),
        index: key.index,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn sliced() -> Vec<Region> {
        vec![
            Region::new("idle", 0, Rect::new(0, 0, 32, 32)),
            Region::new("idle", 1, Rect::new(32, 0, 32, 32)),
            Region::new("walk", 0, Rect::new(0, 32, 32, 32)),
        ]
    }

    #[test]
    fn test_alias_copies_geometry() {
        let out = resolve_aliases(sliced(), &[DupSpec::new("default", 0, "idle", 1)]).unwrap();
        let alias = &out[0];
        let target = &out[2];

        assert_eq!(alias.key(), RegionKey::new("default", 0));
        assert_eq!(alias.rect, target.rect);
        assert_eq!(alias.rotate, target.rotate);
        assert_eq!((alias.orig_w, alias.orig_h), (target.orig_w, target.orig_h));
        assert_eq!((alias.off_x, alias.off_y), (target.off_x, target.off_y));
    }

    #[test]
    fn test_aliases_prepended_in_declaration_order() {
        let dups = vec![
            DupSpec::new("stand", 0, "idle", 0),
            DupSpec::new("default", 0, "idle", 0),
        ];
        let out = resolve_aliases(sliced(), &dups).unwrap();
        let keys: Vec<String> = out.iter().map(|r| r.key().to_string()).collect();
        assert_eq!(
            keys,
            vec!["stand:0", "default:0", "idle:0", "idle:1", "walk:0"]
        );
    }

    #[test]
    fn test_missing_target() {
        let err = resolve_aliases(sliced(), &[DupSpec::new("x", 0, "idle", 5)]).unwrap_err();
        match err {
            AtlasError::DupTargetNotFound { name, index, help } => {
                assert_eq!((name.as_str(), index), ("idle", 5));
                assert_eq!(help.as_deref(), Some("'idle' was sliced with indices 0..=1"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_alias_cannot_target_alias() {
        let dups = vec![
            DupSpec::new("default", 0, "idle", 0),
            DupSpec::new("again", 0, "default", 0),
        ];
        let err = resolve_aliases(sliced(), &dups).unwrap_err();
        assert!(matches!(err, AtlasError::DupTargetNotFound { .. }));
    }

    #[test]
    fn test_alias_colliding_with_sliced_region() {
        let err = resolve_aliases(sliced(), &[DupSpec::new("walk", 0, "idle", 0)]).unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateRegion { .. }));
    }

    #[test]
    fn test_alias_colliding_with_alias() {
        let dups = vec![
            DupSpec::new("default", 0, "idle", 0),
            DupSpec::new("default", 0, "idle", 1),
        ];
        assert!(resolve_aliases(sliced(), &dups).is_err());
    }

    #[test]
    fn test_duplicate_sliced_keys_rejected() {
        let mut regions = sliced();
        regions.push(Region::new("idle", 0, Rect::new(64, 0, 32, 32)));
        let err = resolve_aliases(regions, &[]).unwrap_err();
        match err {
            AtlasError::DuplicateRegion { name, index } => assert_eq!((name.as_str(), index), ("idle", 0)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_no_aliases_keeps_order() {
        let out = resolve_aliases(sliced(), &[]).unwrap();
        assert_eq!(out, sliced());
    }

    #[test]
    fn test_indices_of() {
        let regions = sliced();
        let table = RegionTable::build(&regions).unwrap();
        assert_eq!(table.indices_of("idle"), vec![0, 1]);
        assert!(table.indices_of("jump").is_empty());
    }
}
